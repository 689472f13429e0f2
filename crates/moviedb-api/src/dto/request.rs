//! Request bodies and their malformed-body messages.

pub use moviedb_service::account::requests::{
    LOGIN_INCOMPLETE, REGISTER_INCOMPLETE, TOKEN_INCOMPLETE,
};
pub use moviedb_service::profile::requests::PROFILE_INCOMPLETE;
pub use moviedb_service::{LoginRequest, ProfileUpdateRequest, RegisterRequest, TokenRequest};

use crate::extractors::RequestBody;

impl RequestBody for RegisterRequest {
    const MALFORMED: &'static str = REGISTER_INCOMPLETE;
}

impl RequestBody for LoginRequest {
    const MALFORMED: &'static str = LOGIN_INCOMPLETE;
}

impl RequestBody for TokenRequest {
    const MALFORMED: &'static str = TOKEN_INCOMPLETE;
}

impl RequestBody for ProfileUpdateRequest {
    const MALFORMED: &'static str = PROFILE_INCOMPLETE;
}

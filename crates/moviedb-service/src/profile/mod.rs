//! Profile reads and owner-only profile updates.

pub mod dob;
pub mod requests;
pub mod service;
pub mod visibility;

pub use requests::ProfileUpdateRequest;
pub use service::ProfileService;
pub use visibility::{ProfileView, ProfileVisibility};

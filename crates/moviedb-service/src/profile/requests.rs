//! Request body for the profile update endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use moviedb_core::error::AppError;

/// Message for a body missing one of the four profile fields.
pub const PROFILE_INCOMPLETE: &str =
    "Request body incomplete: firstName, lastName, dob and address are required.";

/// Message for a body with a non-string profile field.
pub const PROFILE_NOT_STRINGS: &str =
    "Request body invalid: firstName, lastName and address must be strings only.";

/// `PUT /user/{email}/profile` body.
///
/// Fields stay untyped until [`ProfileUpdateRequest::into_fields`] so that an
/// empty or falsy value can be told apart from a wrongly typed one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub dob: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
}

/// The four profile fields once they are known to be non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub address: String,
}

impl ProfileUpdateRequest {
    /// Builds a request from plain strings.
    pub fn new(first_name: &str, last_name: &str, dob: &str, address: &str) -> Self {
        Self {
            first_name: Some(Value::from(first_name)),
            last_name: Some(Value::from(last_name)),
            dob: Some(Value::from(dob)),
            address: Some(Value::from(address)),
        }
    }

    /// Checks presence first, then type.
    ///
    /// Missing, `null`, `""`, `false` and `0` all count as absent. Any other
    /// non-string value is a type error.
    pub fn into_fields(self) -> Result<ProfileFields, AppError> {
        let fields = [self.first_name, self.last_name, self.dob, self.address];

        if fields.iter().any(|f| !is_present(f.as_ref())) {
            return Err(AppError::validation(PROFILE_INCOMPLETE));
        }

        let [first_name, last_name, dob, address] = fields.map(|f| match f {
            Some(Value::String(s)) => Some(s),
            _ => None,
        });

        match (first_name, last_name, dob, address) {
            (Some(first_name), Some(last_name), Some(dob), Some(address)) => Ok(ProfileFields {
                first_name,
                last_name,
                dob,
                address,
            }),
            _ => Err(AppError::validation(PROFILE_NOT_STRINGS)),
        }
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Some(_) => true,
    }
}

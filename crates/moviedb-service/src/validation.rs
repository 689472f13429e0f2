//! Request body validation helpers.

use validator::Validate;

use moviedb_core::error::AppError;

/// Runs the `validator` rules of a request body and turns the first failure
/// into a validation error.
///
/// `fallback` is used when the failing rule carries no message.
pub fn validate_body<T: Validate>(body: &T, fallback: &str) -> Result<(), AppError> {
    body.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| fallback.to_string());
        AppError::validation(message)
    })
}

use super::envelope::{Failure, ResponseBody};
use axum::{http::StatusCode, Json};
use validator::ValidationErrors;

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<ResponseBody<ValidationErrors>>) {
    let mut body = Failure::IllegalFormat.body("Failed to validate payload");
    body.data = Some(errors);
    (Failure::IllegalFormat.status(), Json(body))
}

/// Trimmed-empty check shared by every name-like field.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

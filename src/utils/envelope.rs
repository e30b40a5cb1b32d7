//! The `{data, message, error}` body every endpoint answers with.
//!
//! Most domain failures are reported with `200 OK` and a populated `error`
//! field, so clients have to inspect the body rather than the status code.
//! Only malformed payloads (400), authentication (401/403) and internal
//! failures (500) change the status.

use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseBody<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl<T> ResponseBody<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn bare(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    IllegalFormat,
    RedundantIssue,
    NoSuchDocument,
    FailToDeleteDocument,
    Unauthorized,
    Forbidden,
    Internal,
}

impl Failure {
    pub fn status(self) -> StatusCode {
        match self {
            Self::IllegalFormat => StatusCode::BAD_REQUEST,
            Self::RedundantIssue | Self::NoSuchDocument | Self::FailToDeleteDocument => {
                StatusCode::OK
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::IllegalFormat => "illegal format",
            Self::RedundantIssue => "redundant issue",
            Self::NoSuchDocument => "no such document",
            Self::FailToDeleteDocument => "fail to delete document",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::Internal => "internal error",
        }
    }

    pub fn body<T>(self, error: impl Into<String>) -> ResponseBody<T> {
        ResponseBody {
            data: None,
            message: Some(self.message().to_string()),
            error: Some(error.into()),
        }
    }
}

pub fn success<T: Serialize>(data: T, message: impl Into<String>) -> axum::response::Response {
    (StatusCode::OK, Json(ResponseBody::success(data, message))).into_response()
}

pub fn failure(kind: Failure, error: impl Into<String>) -> axum::response::Response {
    failure_with_status(kind, kind.status(), error)
}

/// Same envelope as [`failure`] under a status other than the category default.
pub fn failure_with_status(
    kind: Failure,
    status: StatusCode,
    error: impl Into<String>,
) -> axum::response::Response {
    (status, Json(kind.body::<()>(error))).into_response()
}

pub fn internal_error() -> axum::response::Response {
    failure(Failure::Internal, "Sorry an error occurred")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_body_never_carries_data() {
        let body = Failure::RedundantIssue.body::<String>("dish's name existed in this shop");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "data": null,
                "message": "redundant issue",
                "error": "dish's name existed in this shop"
            })
        );
    }

    #[test]
    fn success_body_sets_message_and_no_error() {
        let body = ResponseBody::success(vec![1, 2], "listed");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "data": [1, 2], "message": "listed", "error": null })
        );
    }

    #[test]
    fn domain_failures_are_encoded_as_ok() {
        assert_eq!(Failure::RedundantIssue.status(), StatusCode::OK);
        assert_eq!(Failure::NoSuchDocument.status(), StatusCode::OK);
        assert_eq!(Failure::FailToDeleteDocument.status(), StatusCode::OK);
        assert_eq!(Failure::IllegalFormat.status(), StatusCode::BAD_REQUEST);
    }
}

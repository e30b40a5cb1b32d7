pub mod request {
    pub struct Payload {
        pub authorization: Option<String>,
    }
}

pub mod response {
    use crate::utils::envelope::{self, Failure, ResponseBody};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        Valid,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Valid => (StatusCode::OK, Json(ResponseBody::bare(true))).into_response(),
            }
        }
    }

    pub enum Error {
        MissingHeader,
        InvalidToken,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingHeader => {
                    envelope::failure(Failure::IllegalFormat, "Authorization header is required")
                }
                Self::InvalidToken => {
                    (StatusCode::UNAUTHORIZED, Json(ResponseBody::bare(false))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

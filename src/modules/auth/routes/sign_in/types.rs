pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        #[serde(default)]
        pub username: String,
        #[serde(default)]
        pub password: String,
    }
}

pub mod response {
    use crate::{
        modules::user::repository::Role,
        utils::envelope::{self, Failure},
    };
    use axum::response::IntoResponse;
    use serde::Serialize;

    #[derive(Serialize)]
    pub struct Session {
        pub token: String,
        #[serde(rename = "type")]
        pub type_: &'static str,
        pub id: String,
        pub username: String,
        pub email: String,
        pub role: Role,
    }

    pub enum Success {
        SignedIn(Session),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedIn(session) => envelope::success(session, "sign in successfully"),
            }
        }
    }

    pub enum Error {
        BadCredentials,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BadCredentials => envelope::failure(Failure::Unauthorized, "bad credentials"),
                Self::UnexpectedError => envelope::internal_error(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

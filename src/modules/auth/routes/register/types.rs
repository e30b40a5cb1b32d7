pub mod request {
    use crate::modules::user::repository::Role;
    use regex::Regex;
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    fn validate_username(username: &str) -> Result<(), ValidationError> {
        match Regex::new(r"^[A-Za-z0-9_.\-]+$") {
            Ok(regex) if regex.is_match(username) => Ok(()),
            _ => Err(ValidationError::new("INVALID_USERNAME").with_message(Cow::from(
                "Username may only contain letters, digits, '.', '_' and '-'",
            ))),
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        #[validate(
            length(
                min = 3,
                max = 20,
                code = "INVALID_USERNAME_LENGTH",
                message = "Username must be between 3 and 20 characters"
            ),
            custom(code = "INVALID_USERNAME", function = "validate_username")
        )]
        pub username: String,
        #[serde(default)]
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[serde(default)]
        #[validate(length(
            min = 6,
            max = 40,
            code = "INVALID_PASSWORD_LENGTH",
            message = "Password must be between 6 and 40 characters"
        ))]
        pub password: String,
        #[serde(default)]
        pub role: Role,
    }
}

pub mod response {
    use crate::{
        modules::user::repository::User,
        utils::{
            envelope::{self, Failure},
            validation,
        },
    };
    use axum::response::IntoResponse;
    use validator::ValidationErrors;

    pub enum Success {
        Registered(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered(user) => envelope::success(user, "register successfully"),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        UsernameTaken,
        EmailTaken,
        AlreadyRegistered,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::UsernameTaken => {
                    envelope::failure(Failure::RedundantIssue, "username is already taken")
                }
                Self::EmailTaken => {
                    envelope::failure(Failure::RedundantIssue, "email is already in use")
                }
                Self::AlreadyRegistered => envelope::failure(
                    Failure::RedundantIssue,
                    "username or email is already registered",
                ),
                Self::UnexpectedError => envelope::internal_error(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

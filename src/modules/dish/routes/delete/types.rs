pub mod request {
    pub struct Payload {
        pub dish_id: String,
        pub caller_id: String,
    }
}

pub mod response {
    use crate::{
        modules::dump_dish::repository::DumpDish,
        utils::envelope::{self, Failure},
    };
    use axum::response::IntoResponse;

    pub enum Success {
        DishDeleted(DumpDish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishDeleted(dump) => envelope::success(dump, "delete successfully"),
            }
        }
    }

    pub enum Error {
        DishNotFound,
        /// The dish existed and belonged to the caller but the delete removed nothing.
        FailedToDeleteDish(String),
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound => {
                    envelope::failure(Failure::NoSuchDocument, "no such dish under the owner")
                }
                Self::FailedToDeleteDish(dish_id) => envelope::failure(
                    Failure::FailToDeleteDocument,
                    format!("dishId: {}", dish_id),
                ),
                Self::UnexpectedError => envelope::internal_error(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

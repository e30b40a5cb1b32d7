pub mod request {
    pub struct Payload {
        pub shop_id: String,
        pub dish_id: String,
    }
}

pub mod response {
    use crate::{
        modules::dish::repository::Dish,
        utils::envelope::{self, Failure},
    };
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Dish(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dish(dish) => envelope::success(dish, "retrieve it"),
            }
        }
    }

    pub enum Error {
        ShopNotFound,
        DishNotFound,
        FailedToFetchDish,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ShopNotFound => envelope::failure_with_status(
                    Failure::NoSuchDocument,
                    StatusCode::BAD_REQUEST,
                    "no such shop",
                ),
                Self::DishNotFound => envelope::failure(
                    Failure::NoSuchDocument,
                    "no such dish under this restaurant",
                ),
                Self::FailedToFetchDish => envelope::internal_error(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

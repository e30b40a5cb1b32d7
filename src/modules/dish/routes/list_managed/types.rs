pub mod request {
    pub struct Payload {
        pub caller_id: String,
        pub shop_id: String,
    }
}

pub mod response {
    use crate::{
        modules::dish::repository::Dish,
        utils::envelope::{self, Failure},
    };
    use axum::response::IntoResponse;

    pub enum Success {
        Dishes { shop_id: String, dishes: Vec<Dish> },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dishes { shop_id, dishes } => envelope::success(
                    dishes,
                    format!("list all dishes under shopId {}", shop_id),
                ),
            }
        }
    }

    pub enum Error {
        ShopNotFound,
        FailedToFetchDishes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ShopNotFound => {
                    envelope::failure(Failure::NoSuchDocument, "no such shop under this user")
                }
                Self::FailedToFetchDishes => envelope::internal_error(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

pub mod request {
    use serde::Deserialize;
    use sqlx::types::BigDecimal;

    /// Dish as posted by its owner; an `id` in the body is ignored.
    #[derive(Deserialize)]
    pub struct Body {
        pub shop_id: Option<String>,
        #[serde(default)]
        pub name: String,
        pub description: Option<String>,
        /// Absent or `null` means 0.
        pub price: Option<BigDecimal>,
        pub image_url: Option<String>,
    }

    pub struct Payload {
        pub caller_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::dish::repository::Dish,
        utils::envelope::{self, Failure},
    };
    use axum::response::IntoResponse;

    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => envelope::success(dish, "create dish successfully"),
            }
        }
    }

    pub enum Error {
        EmptyName,
        NameExisted,
        ShopNotFound,
        FailedToCreateDish,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::EmptyName => envelope::failure(
                    Failure::IllegalFormat,
                    "dish's name can't be empty or whitespace",
                ),
                Self::NameExisted => {
                    envelope::failure(Failure::RedundantIssue, "dish's name existed in this shop")
                }
                Self::ShopNotFound => {
                    envelope::failure(Failure::NoSuchDocument, "no such shop under the user")
                }
                Self::FailedToCreateDish => envelope::internal_error(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

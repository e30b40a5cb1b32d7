pub mod request {
    use serde::Deserialize;
    use sqlx::types::BigDecimal;

    /// Replacement dish. The path id wins over any `id` in the body.
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
        pub dish_id: String,
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
        DishUpdated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated(dish) => envelope::success(dish, "update dish"),
            }
        }
    }

    pub enum Error {
        MissingShopId,
        EmptyName,
        DishNotFound,
        NameExisted,
        FailedToUpdateDish,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingShopId => {
                    envelope::failure(Failure::IllegalFormat, "shopId can't be empty")
                }
                Self::EmptyName => envelope::failure(
                    Failure::IllegalFormat,
                    "new dish's name can't be empty or whitespace",
                ),
                Self::DishNotFound => envelope::failure(Failure::NoSuchDocument, "no such dish"),
                Self::NameExisted => {
                    envelope::failure(Failure::RedundantIssue, "new dish's name existed")
                }
                Self::FailedToUpdateDish => envelope::internal_error(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

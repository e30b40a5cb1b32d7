use crate::modules::dish::repository::Dish;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

/// Archived copy of a dish, written once when the dish is deleted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct DumpDish {
    pub id: String,
    pub dish_id: String,
    pub shop_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub dish_created_at: NaiveDateTime,
    pub dumped_at: NaiveDateTime,
}

impl DumpDish {
    pub fn snapshot(dish: Dish) -> Self {
        Self {
            id: Ulid::new().to_string(),
            dish_id: dish.id,
            shop_id: dish.shop_id,
            owner_id: dish.owner_id,
            name: dish.name,
            description: dish.description,
            price: dish.price,
            image_url: dish.image_url,
            dish_created_at: dish.created_at,
            dumped_at: Utc::now().naive_utc(),
        }
    }

    /// True when this record holds exactly the fields of `dish`.
    pub fn matches(&self, dish: &Dish) -> bool {
        self.dish_id == dish.id
            && self.shop_id == dish.shop_id
            && self.owner_id == dish.owner_id
            && self.name == dish.name
            && self.description == dish.description
            && self.price == dish.price
            && self.image_url == dish.image_url
            && self.dish_created_at == dish.created_at
    }
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
}

/// Writes `dump` through `executor`, normally the transaction that removes the dish.
pub async fn insert<'e, E>(executor: E, dump: DumpDish) -> Result<DumpDish>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, DumpDish>(
        "
        INSERT INTO dump_dishes (
            id,
            dish_id,
            shop_id,
            owner_id,
            name,
            description,
            price,
            image_url,
            dish_created_at,
            dumped_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        ",
    )
    .bind(dump.id)
    .bind(dump.dish_id)
    .bind(dump.shop_id)
    .bind(dump.owner_id)
    .bind(dump.name)
    .bind(dump.description)
    .bind(dump.price)
    .bind(dump.image_url)
    .bind(dump.dish_created_at)
    .bind(dump.dumped_at)
    .fetch_one(executor)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while archiving a deleted dish: {}", err);
        Error::UnexpectedError
    })
}

use crate::modules::dump_dish::repository::{self as dump_dish, DumpDish};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::PgPool;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Dish {
    pub id: String,
    pub shop_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateDishPayload {
    pub shop_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
}

/// Full replacement of the editable fields; scoping columns stay untouched.
pub struct UpdateDishPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait DishRepository: Send + Sync {
    async fn create(&self, payload: CreateDishPayload) -> Result<Dish>;
    async fn find_by_id_and_shop_id(&self, id: String, shop_id: String) -> Result<Option<Dish>>;
    async fn find_by_id_and_owner_id(&self, id: String, owner_id: String)
        -> Result<Option<Dish>>;
    async fn find_many_by_shop_id(&self, shop_id: String) -> Result<Vec<Dish>>;
    async fn exists_by_shop_id_and_name(&self, shop_id: String, name: String) -> Result<bool>;
    async fn exists_by_id_and_shop_id_and_owner_id(
        &self,
        id: String,
        shop_id: String,
        owner_id: String,
    ) -> Result<bool>;
    /// Whether a dish other than `id` already uses `name` inside `shop_id`.
    async fn other_exists_by_name(&self, shop_id: String, id: String, name: String)
        -> Result<bool>;
    async fn update_by_id(&self, id: String, payload: UpdateDishPayload) -> Result<Dish>;
    /// Removes the dish and records its [`DumpDish`] as one unit.
    ///
    /// `Ok(None)` when nothing was removed, in which case nothing is archived either.
    async fn archive_by_id(&self, id: String) -> Result<Option<DumpDish>>;
}

pub struct PgDishRepository {
    pool: PgPool,
}

impl PgDishRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DishRepository for PgDishRepository {
    async fn create(&self, payload: CreateDishPayload) -> Result<Dish> {
        match sqlx::query_as::<_, Dish>(
            "
            INSERT INTO dishes (
                id,
                shop_id,
                owner_id,
                name,
                description,
                price,
                image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            ",
        )
        .bind(Ulid::new().to_string())
        .bind(payload.shop_id)
        .bind(payload.owner_id)
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.price)
        .bind(payload.image_url)
        .fetch_one(&self.pool)
        .await
        {
            Ok(dish) => Ok(dish),
            Err(err) => {
                tracing::error!("Error occurred while trying to create a dish: {}", err);
                Err(Error::UnexpectedError)
            }
        }
    }

    async fn find_by_id_and_shop_id(&self, id: String, shop_id: String) -> Result<Option<Dish>> {
        sqlx::query_as::<_, Dish>("SELECT * FROM dishes WHERE id = $1 AND shop_id = $2")
            .bind(id)
            .bind(shop_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch a dish by shop: {}", err);
                Error::UnexpectedError
            })
    }

    async fn find_by_id_and_owner_id(
        &self,
        id: String,
        owner_id: String,
    ) -> Result<Option<Dish>> {
        sqlx::query_as::<_, Dish>("SELECT * FROM dishes WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch a dish by owner: {}", err);
                Error::UnexpectedError
            })
    }

    async fn find_many_by_shop_id(&self, shop_id: String) -> Result<Vec<Dish>> {
        sqlx::query_as::<_, Dish>(
            "SELECT * FROM dishes WHERE shop_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(shop_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many dishes: {}", err);
            Error::UnexpectedError
        })
    }

    async fn exists_by_shop_id_and_name(&self, shop_id: String, name: String) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM dishes WHERE shop_id = $1 AND name = $2)",
        )
        .bind(shop_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while checking dish name: {}", err);
            Error::UnexpectedError
        })
    }

    async fn exists_by_id_and_shop_id_and_owner_id(
        &self,
        id: String,
        shop_id: String,
        owner_id: String,
    ) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM dishes WHERE id = $1 AND shop_id = $2 AND owner_id = $3)",
        )
        .bind(id)
        .bind(shop_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while checking dish ownership: {}", err);
            Error::UnexpectedError
        })
    }

    async fn other_exists_by_name(
        &self,
        shop_id: String,
        id: String,
        name: String,
    ) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM dishes WHERE shop_id = $1 AND id <> $2 AND name = $3)",
        )
        .bind(shop_id)
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while checking other dish names: {}", err);
            Error::UnexpectedError
        })
    }

    async fn update_by_id(&self, id: String, payload: UpdateDishPayload) -> Result<Dish> {
        sqlx::query_as::<_, Dish>(
            "
            UPDATE dishes SET
                name = $1,
                description = $2,
                price = $3,
                image_url = $4,
                updated_at = $5
            WHERE id = $6
            RETURNING *
            ",
        )
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.price)
        .bind(payload.image_url)
        .bind(Utc::now().naive_utc())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to update a dish: {}", err);
            Error::UnexpectedError
        })
    }

    async fn archive_by_id(&self, id: String) -> Result<Option<DumpDish>> {
        let mut tx = self.pool.begin().await.map_err(|err| {
            tracing::error!("Failed to start database transaction: {}", err);
            Error::UnexpectedError
        })?;

        let removed = sqlx::query_as::<_, Dish>("DELETE FROM dishes WHERE id = $1 RETURNING *")
            .bind(&id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to delete a dish: {}", err);
                Error::UnexpectedError
            })?;

        // Dropping `tx` rolls back.
        let Some(dish) = removed else {
            return Ok(None);
        };

        let dump = dump_dish::insert(&mut *tx, DumpDish::snapshot(dish))
            .await
            .map_err(|_| Error::UnexpectedError)?;

        tx.commit().await.map_err(|err| {
            tracing::error!("Failed to commit archive of dish {}: {}", id, err);
            Error::UnexpectedError
        })?;

        Ok(Some(dump))
    }
}

pub mod memory {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    /// Keeps dishes in insertion order, which is also the listing order.
    #[derive(Default)]
    pub struct InMemoryDishRepository {
        dishes: Mutex<Vec<Dish>>,
        dumps: Mutex<Vec<DumpDish>>,
    }

    impl InMemoryDishRepository {
        fn dishes(&self) -> Result<MutexGuard<'_, Vec<Dish>>> {
            self.dishes.lock().map_err(|_| Error::UnexpectedError)
        }

        pub fn len(&self) -> usize {
            self.dishes.lock().map(|d| d.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        pub fn dumps(&self) -> Vec<DumpDish> {
            self.dumps.lock().map(|d| d.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl DishRepository for InMemoryDishRepository {
        async fn create(&self, payload: CreateDishPayload) -> Result<Dish> {
            let dish = Dish {
                id: Ulid::new().to_string(),
                shop_id: payload.shop_id,
                owner_id: payload.owner_id,
                name: payload.name,
                description: payload.description,
                price: payload.price,
                image_url: payload.image_url,
                created_at: Utc::now().naive_utc(),
                updated_at: None,
            };
            self.dishes()?.push(dish.clone());
            Ok(dish)
        }

        async fn find_by_id_and_shop_id(
            &self,
            id: String,
            shop_id: String,
        ) -> Result<Option<Dish>> {
            Ok(self
                .dishes()?
                .iter()
                .find(|d| d.id == id && d.shop_id == shop_id)
                .cloned())
        }

        async fn find_by_id_and_owner_id(
            &self,
            id: String,
            owner_id: String,
        ) -> Result<Option<Dish>> {
            Ok(self
                .dishes()?
                .iter()
                .find(|d| d.id == id && d.owner_id == owner_id)
                .cloned())
        }

        async fn find_many_by_shop_id(&self, shop_id: String) -> Result<Vec<Dish>> {
            Ok(self
                .dishes()?
                .iter()
                .filter(|d| d.shop_id == shop_id)
                .cloned()
                .collect())
        }

        async fn exists_by_shop_id_and_name(&self, shop_id: String, name: String) -> Result<bool> {
            Ok(self
                .dishes()?
                .iter()
                .any(|d| d.shop_id == shop_id && d.name == name))
        }

        async fn exists_by_id_and_shop_id_and_owner_id(
            &self,
            id: String,
            shop_id: String,
            owner_id: String,
        ) -> Result<bool> {
            Ok(self
                .dishes()?
                .iter()
                .any(|d| d.id == id && d.shop_id == shop_id && d.owner_id == owner_id))
        }

        async fn other_exists_by_name(
            &self,
            shop_id: String,
            id: String,
            name: String,
        ) -> Result<bool> {
            Ok(self
                .dishes()?
                .iter()
                .any(|d| d.shop_id == shop_id && d.id != id && d.name == name))
        }

        async fn update_by_id(&self, id: String, payload: UpdateDishPayload) -> Result<Dish> {
            let mut dishes = self.dishes()?;
            let dish = dishes
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or(Error::UnexpectedError)?;

            dish.name = payload.name;
            dish.description = payload.description;
            dish.price = payload.price;
            dish.image_url = payload.image_url;
            dish.updated_at = Some(Utc::now().naive_utc());

            Ok(dish.clone())
        }

        async fn archive_by_id(&self, id: String) -> Result<Option<DumpDish>> {
            let mut dishes = self.dishes()?;
            let mut dumps = self.dumps.lock().map_err(|_| Error::UnexpectedError)?;

            let Some(position) = dishes.iter().position(|d| d.id == id) else {
                return Ok(None);
            };

            let dump = DumpDish::snapshot(dishes.remove(position));
            dumps.push(dump.clone());
            Ok(Some(dump))
        }
    }
}

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

type Result<T> = std::result::Result<T, Error>;

/// A restaurant. Shops are provisioned outside this API and only read here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Shop {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn exists_by_id(&self, id: String) -> Result<bool>;
    async fn exists_by_id_and_owner_id(&self, id: String, owner_id: String) -> Result<bool>;
    async fn find_by_id_and_owner_id(&self, id: String, owner_id: String) -> Result<Option<Shop>>;
}

pub struct PgShopRepository {
    pool: PgPool,
}

impl PgShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopRepository for PgShopRepository {
    async fn exists_by_id(&self, id: String) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM shops WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while checking shop existence: {}", err);
                Error::UnexpectedError
            })
    }

    async fn exists_by_id_and_owner_id(&self, id: String, owner_id: String) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM shops WHERE id = $1 AND owner_id = $2)",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while checking shop ownership: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_by_id_and_owner_id(&self, id: String, owner_id: String) -> Result<Option<Shop>> {
        sqlx::query_as::<_, Shop>("SELECT * FROM shops WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching shop by owner: {}", err);
                Error::UnexpectedError
            })
    }
}

pub mod memory {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryShopRepository {
        shops: Mutex<Vec<Shop>>,
    }

    impl InMemoryShopRepository {
        /// Seeds a shop, standing in for out-of-band provisioning.
        pub fn insert(&self, id: &str, owner_id: &str, name: &str) -> Shop {
            let shop = Shop {
                id: id.to_string(),
                owner_id: owner_id.to_string(),
                name: name.to_string(),
                created_at: Utc::now().naive_utc(),
            };
            if let Ok(mut shops) = self.shops.lock() {
                shops.push(shop.clone());
            }
            shop
        }

        fn find(&self, predicate: impl Fn(&Shop) -> bool) -> Result<Option<Shop>> {
            self.shops
                .lock()
                .map_err(|_| Error::UnexpectedError)
                .map(|shops| shops.iter().find(|s| predicate(s)).cloned())
        }
    }

    #[async_trait]
    impl ShopRepository for InMemoryShopRepository {
        async fn exists_by_id(&self, id: String) -> Result<bool> {
            self.find(|s| s.id == id).map(|s| s.is_some())
        }

        async fn exists_by_id_and_owner_id(&self, id: String, owner_id: String) -> Result<bool> {
            self.find(|s| s.id == id && s.owner_id == owner_id)
                .map(|s| s.is_some())
        }

        async fn find_by_id_and_owner_id(
            &self,
            id: String,
            owner_id: String,
        ) -> Result<Option<Shop>> {
            self.find(|s| s.id == id && s.owner_id == owner_id)
        }
    }
}

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Role {
    #[serde(rename = "OWNER")]
    Owner,
    #[default]
    #[serde(rename = "CUSTOMER")]
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::Customer => "CUSTOMER",
        }
    }

    /// Authority name as the role gate reports it, e.g. `ROLE_OWNER`.
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.as_str())
    }
}

impl TryFrom<String> for Role {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        match value.as_ref() {
            "OWNER" => Ok(Role::Owner),
            "CUSTOMER" => Ok(Role::Customer),
            role => {
                tracing::error!("Invalid user role found: {}", role);
                Err(Error::UnexpectedError)
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl TryFrom<UserRow> for User {
    type Error = Error;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(User {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            role: Role::try_from(row.role)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    /// A uniqueness constraint rejected the write.
    Conflict,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, payload: CreateUserPayload) -> Result<User>;
    async fn find_by_id(&self, id: String) -> Result<Option<User>>;
    async fn find_by_username(&self, username: String) -> Result<Option<User>>;
    async fn exists_by_username(&self, username: String) -> Result<bool>;
    async fn exists_by_email(&self, email: String) -> Result<bool>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        match sqlx::query_as::<_, UserRow>(
            "
            INSERT INTO users (id, username, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            ",
        )
        .bind(Ulid::new().to_string())
        .bind(payload.username)
        .bind(payload.email)
        .bind(payload.password_hash)
        .bind(payload.role.as_str())
        .fetch_one(&self.pool)
        .await
        {
            Ok(row) => User::try_from(row),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                tracing::warn!("User creation hit a uniqueness constraint: {}", err);
                Err(Error::Conflict)
            }
            Err(err) => {
                tracing::error!("Error occured while creating a user account: {}", err);
                Err(Error::UnexpectedError)
            }
        }
    }

    async fn find_by_id(&self, id: String) -> Result<Option<User>> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(&id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
                Error::UnexpectedError
            })?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_username(&self, username: String) -> Result<Option<User>> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE username = $1")
            .bind(&username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while fetching user with username {}: {}",
                    username,
                    err
                );
                Error::UnexpectedError
            })?
            .map(User::try_from)
            .transpose()
    }

    async fn exists_by_username(&self, username: String) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while checking username: {}", err);
                Error::UnexpectedError
            })
    }

    async fn exists_by_email(&self, email: String) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while checking email: {}", err);
                Error::UnexpectedError
            })
    }
}

/// Process-local store used by tests and local runs without Postgres.
pub mod memory {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        fn users(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>> {
            self.users.lock().map_err(|_| Error::UnexpectedError)
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn create(&self, payload: CreateUserPayload) -> Result<User> {
            let mut users = self.users()?;
            if users
                .iter()
                .any(|u| u.username == payload.username || u.email == payload.email)
            {
                return Err(Error::Conflict);
            }

            let user = User {
                id: Ulid::new().to_string(),
                username: payload.username,
                email: payload.email,
                password_hash: payload.password_hash,
                role: payload.role,
                created_at: Utc::now().naive_utc(),
                updated_at: None,
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, id: String) -> Result<Option<User>> {
            Ok(self.users()?.iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_username(&self, username: String) -> Result<Option<User>> {
            Ok(self.users()?.iter().find(|u| u.username == username).cloned())
        }

        async fn exists_by_username(&self, username: String) -> Result<bool> {
            Ok(self.users()?.iter().any(|u| u.username == username))
        }

        async fn exists_by_email(&self, email: String) -> Result<bool> {
            Ok(self.users()?.iter().any(|u| u.email == email))
        }
    }
}

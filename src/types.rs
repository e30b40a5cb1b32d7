pub use crate::utils::database;
use crate::modules::{dish, shop, user};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct JwtContext {
    pub secret: String,
    pub expiration_secs: u64,
}

/// Persistence collaborators every workflow talks to.
#[derive(Clone)]
pub struct Repositories {
    pub user: Arc<dyn user::repository::UserRepository>,
    pub shop: Arc<dyn shop::repository::ShopRepository>,
    pub dish: Arc<dyn dish::repository::DishRepository>,
}

impl Repositories {
    pub fn postgres(db_conn: database::DatabaseConnection) -> Self {
        Self {
            user: Arc::new(user::repository::PgUserRepository::new(db_conn.pool.clone())),
            shop: Arc::new(shop::repository::PgShopRepository::new(db_conn.pool.clone())),
            dish: Arc::new(dish::repository::PgDishRepository::new(db_conn.pool)),
        }
    }
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub jwt: JwtContext,
    pub repository: Repositories,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_secs: u64,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("failed to bind listener: {0}")]
    Io(#[from] std::io::Error),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => 8000,
        };
        let jwt_expiration_secs = match lookup("JWT_EXPIRATION_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "JWT_EXPIRATION_SECS",
                value: raw,
            })?,
            None => 86400,
        };

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            jwt: JwtConfig {
                secret: jwt_secret,
                expiration_secs: jwt_expiration_secs,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, StartupError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, StartupError> {
        let db_conn = database::connect(self.database.url.as_str()).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            jwt: JwtContext {
                secret: self.jwt.secret,
                expiration_secs: self.jwt.expiration_secs,
            },
            repository: Repositories::postgres(db_conn),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults_for_optional_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/jupiter"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8000);
        assert_eq!(config.app.environment, AppEnvironment::Development);
        assert_eq!(config.jwt.expiration_secs, 86400);
    }

    #[test]
    fn reports_missing_required_variables() {
        let err = Config::from_lookup(lookup_from(&[("JWT_SECRET", "secret")]))
            .err()
            .unwrap();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/jupiter"),
            ("JWT_SECRET", "secret"),
            ("PORT", "eighty"),
        ]))
        .err()
        .unwrap();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn recognises_production_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/jupiter"),
            ("JWT_SECRET", "secret"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();
        assert_eq!(config.app.environment, AppEnvironment::Production);
    }
}

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use jupiter_backend_rs::{
    app,
    modules::{
        auth::service::{jwt, password},
        dish::repository::{
            memory::InMemoryDishRepository, CreateDishPayload, Dish, DishRepository,
        },
        shop::repository::memory::InMemoryShopRepository,
        user::repository::{memory::InMemoryUserRepository, CreateUserPayload, Role, User, UserRepository},
    },
    types::{AppContext, AppEnvironment, Context, JwtContext, Repositories},
};
use serde_json::Value;
use sqlx::types::BigDecimal;
use std::{str::FromStr, sync::Arc};
use tower::ServiceExt;

pub const PASSWORD: &str = "secret123";

pub struct Harness {
    pub app: Router,
    pub ctx: Arc<Context>,
    pub users: Arc<InMemoryUserRepository>,
    pub shops: Arc<InMemoryShopRepository>,
    pub dishes: Arc<InMemoryDishRepository>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_dish_repository(|dishes| dishes as Arc<dyn DishRepository>)
    }

    /// Lets a test put its own [`DishRepository`] in front of the in-memory store.
    pub fn with_dish_repository<F>(wrap: F) -> Self
    where
        F: FnOnce(Arc<InMemoryDishRepository>) -> Arc<dyn DishRepository>,
    {
        let users = Arc::new(InMemoryUserRepository::default());
        let shops = Arc::new(InMemoryShopRepository::default());
        let dishes = Arc::new(InMemoryDishRepository::default());

        let ctx = Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                environment: AppEnvironment::Development,
                port: 8000,
            },
            jwt: JwtContext {
                secret: "integration-secret".to_string(),
                expiration_secs: 3600,
            },
            repository: Repositories {
                user: users.clone(),
                shop: shops.clone(),
                dish: wrap(dishes.clone()),
            },
        });

        Self {
            app: app::router(ctx.clone()),
            ctx,
            users,
            shops,
            dishes,
        }
    }

    /// Seeds a user and returns it with a freshly issued bearer token.
    pub async fn user(&self, username: &str, role: Role) -> (User, String) {
        let user = self
            .users
            .create(CreateUserPayload {
                username: username.to_string(),
                email: format!("{}@example.com", username),
                password_hash: password::hash(PASSWORD).unwrap(),
                role,
            })
            .await
            .unwrap();
        let token = jwt::issue_token(&self.ctx.jwt, &user).unwrap();
        (user, token)
    }

    pub async fn owner(&self, username: &str) -> (User, String) {
        self.user(username, Role::Owner).await
    }

    pub async fn dish(&self, shop_id: &str, owner_id: &str, name: &str) -> Dish {
        self.dishes
            .create(CreateDishPayload {
                shop_id: shop_id.to_string(),
                owner_id: owner_id.to_string(),
                name: name.to_string(),
                description: None,
                price: BigDecimal::from_str("9.99").unwrap(),
                image_url: None,
            })
            .await
            .unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        self.dispatch(request).await
    }

    pub async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

pub fn decimal(value: &Value) -> BigDecimal {
    let raw = match value {
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    };
    BigDecimal::from_str(&raw).unwrap()
}

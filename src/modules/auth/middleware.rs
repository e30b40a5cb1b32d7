use super::service::jwt::{self, Claims};
use crate::modules::user::repository::{Role, User};
use crate::types::Context;
use crate::utils::envelope::{self, Failure};
use axum::extract::FromRequestParts;
use axum::RequestPartsExt;
use axum::{async_trait, extract::Extension, http, http::request::Parts, response::Response};
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

enum Error {
    InvalidSession,
}

fn get_token_from_header(header: &str) -> Result<String, Error> {
    header
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .ok_or(Error::InvalidSession)
}

async fn get_auth_from_header(ctx: Arc<Context>, header: &str) -> Result<Auth, Error> {
    let token = get_token_from_header(header)?;
    let claims = jwt::decode_token(&ctx.jwt, &token).map_err(|_| Error::InvalidSession)?;

    let user = ctx
        .repository
        .user
        .find_by_id(jwt::resolve_caller_id(&claims))
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)?;

    Ok(Auth { user, claims })
}

/// An authenticated caller, resolved from `Authorization: Bearer <jwt>`.
#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
    pub claims: Claims,
}

impl Auth {
    pub fn caller_id(&self) -> String {
        jwt::resolve_caller_id(&self.claims)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| {
                tracing::error!("Context extension missing from request: {}", err);
                envelope::internal_error()
            })?;

        let invalid = || envelope::failure(Failure::Unauthorized, "invalid session token");

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or_else(invalid)?;

        get_auth_from_header(ctx, auth_header)
            .await
            .map_err(|_| invalid())
    }
}

/// Marker naming the role a [`RoleAuth`] gate demands.
pub trait RequiredRole: Send + Sync + 'static {
    const ROLE: Role;
}

pub struct Owner;

impl RequiredRole for Owner {
    const ROLE: Role = Role::Owner;
}

/// [`Auth`] that additionally requires the caller to hold `R::ROLE`.
pub struct RoleAuth<R: RequiredRole> {
    pub auth: Auth,
    role: PhantomData<fn() -> R>,
}

impl<R: RequiredRole> RoleAuth<R> {
    pub fn caller_id(&self) -> String {
        self.auth.caller_id()
    }
}

pub type OwnerAuth = RoleAuth<Owner>;

#[async_trait]
impl<S: Send + Sync, R: RequiredRole> FromRequestParts<S> for RoleAuth<R> {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = Auth::from_request_parts(parts, state).await?;

        if auth.user.role != R::ROLE {
            tracing::warn!(
                "User {} lacks {} for {}",
                auth.user.id,
                R::ROLE.authority(),
                parts.uri.path()
            );
            return Err(envelope::failure(
                Failure::Forbidden,
                format!("{} is required", R::ROLE.authority()),
            ));
        }

        Ok(Self {
            auth,
            role: PhantomData,
        })
    }
}

use super::types::{request, response};
use crate::{
    modules::auth::service::{jwt, password},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = ctx
        .repository
        .user
        .find_by_username(payload.username)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::BadCredentials)?;

    if !password::verify(&payload.password, &user.password_hash) {
        tracing::warn!("Failed sign in attempt for user {}", user.id);
        return Err(response::Error::BadCredentials);
    }

    let token =
        jwt::issue_token(&ctx.jwt, &user).map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::SignedIn(response::Session {
        token,
        type_: "Bearer",
        id: user.id,
        username: user.username,
        email: user.email,
        role: user.role,
    }))
}

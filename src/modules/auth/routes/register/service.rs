use super::types::{request, response};
use crate::{
    modules::{auth::service::password, user::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let email = payload.email.to_lowercase();

    if ctx
        .repository
        .user
        .exists_by_username(payload.username.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
    {
        return Err(response::Error::UsernameTaken);
    }

    if ctx
        .repository
        .user
        .exists_by_email(email.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
    {
        return Err(response::Error::EmailTaken);
    }

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::UnexpectedError)?;

    let user = ctx
        .repository
        .user
        .create(repository::CreateUserPayload {
            username: payload.username,
            email,
            password_hash,
            role: payload.role,
        })
        .await
        .map_err(|err| match err {
            repository::Error::Conflict => response::Error::AlreadyRegistered,
            repository::Error::UnexpectedError => response::Error::UnexpectedError,
        })?;

    tracing::info!("Registered user {} as {}", user.id, user.role.authority());

    Ok(response::Success::Registered(user))
}

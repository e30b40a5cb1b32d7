use super::types::{request, response};
use crate::{modules::auth::service::jwt, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let header = payload
        .authorization
        .ok_or(response::Error::MissingHeader)?;

    // The scheme is not checked; headers shorter than the prefix carry no token at all.
    let token = jwt::strip_scheme_prefix(&header).ok_or_else(|| {
        tracing::warn!("Authorization header shorter than its scheme prefix");
        response::Error::InvalidToken
    })?;

    if jwt::validate_token(&ctx.jwt, token) {
        Ok(response::Success::Valid)
    } else {
        Err(response::Error::InvalidToken)
    }
}

use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.repository
        .dish
        .find_by_id_and_owner_id(payload.dish_id.clone(), payload.caller_id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::DishNotFound)?;

    let dump = ctx
        .repository
        .dish
        .archive_by_id(payload.dish_id.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or_else(|| {
            tracing::warn!("Dish {} vanished before it could be deleted", payload.dish_id);
            response::Error::FailedToDeleteDish(payload.dish_id.clone())
        })?;

    tracing::info!("Deleted dish {} into archive {}", dump.dish_id, dump.id);

    Ok(response::Success::DishDeleted(dump))
}

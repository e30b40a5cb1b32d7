use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if !ctx
        .repository
        .shop
        .exists_by_id(payload.shop_id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchDish)?
    {
        return Err(response::Error::ShopNotFound);
    }

    ctx.repository
        .dish
        .find_by_id_and_shop_id(payload.dish_id, payload.shop_id)
        .await
        .map_err(|_| response::Error::FailedToFetchDish)?
        .ok_or(response::Error::DishNotFound)
        .map(response::Success::Dish)
}

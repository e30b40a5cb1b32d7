use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let shop = ctx
        .repository
        .shop
        .find_by_id_and_owner_id(payload.shop_id, payload.caller_id)
        .await
        .map_err(|_| response::Error::FailedToFetchDishes)?
        .ok_or(response::Error::ShopNotFound)?;

    let dishes = ctx
        .repository
        .dish
        .find_many_by_shop_id(shop.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchDishes)?;

    Ok(response::Success::Dishes {
        shop_id: shop.id,
        dishes,
    })
}

use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if !ctx
        .repository
        .shop
        .exists_by_id(payload.shop_id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchDishes)?
    {
        return Err(response::Error::ShopNotFound);
    }

    let dishes = ctx
        .repository
        .dish
        .find_many_by_shop_id(payload.shop_id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchDishes)?;

    Ok(response::Success::Dishes {
        shop_id: payload.shop_id,
        dishes,
    })
}

use super::types::{request, response};
use crate::{modules::dish::repository, types::Context, utils::validation};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let body = payload.body;

    if validation::is_blank(&body.name) {
        tracing::warn!("Rejected dish with a blank name from {}", payload.caller_id);
        return Err(response::Error::EmptyName);
    }

    let shop_id = body.shop_id.ok_or(response::Error::ShopNotFound)?;

    if ctx
        .repository
        .dish
        .exists_by_shop_id_and_name(shop_id.clone(), body.name.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateDish)?
    {
        return Err(response::Error::NameExisted);
    }

    if !ctx
        .repository
        .shop
        .exists_by_id_and_owner_id(shop_id.clone(), payload.caller_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateDish)?
    {
        return Err(response::Error::ShopNotFound);
    }

    let dish = ctx
        .repository
        .dish
        .create(repository::CreateDishPayload {
            shop_id,
            owner_id: payload.caller_id,
            name: body.name,
            description: body.description,
            price: body.price.unwrap_or_default(),
            image_url: body.image_url,
        })
        .await
        .map_err(|_| response::Error::FailedToCreateDish)?;

    tracing::info!("Created dish {} in shop {}", dish.id, dish.shop_id);

    Ok(response::Success::DishCreated(dish))
}

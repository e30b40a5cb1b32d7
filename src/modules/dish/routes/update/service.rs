use super::types::{request, response};
use crate::{modules::dish::repository, types::Context, utils::validation};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let body = payload.body;

    let shop_id = body.shop_id.ok_or(response::Error::MissingShopId)?;

    if validation::is_blank(&body.name) {
        tracing::warn!("Rejected rename of dish {} to a blank name", payload.dish_id);
        return Err(response::Error::EmptyName);
    }

    // One lookup scoped by dish, shop and owner.
    if !ctx
        .repository
        .dish
        .exists_by_id_and_shop_id_and_owner_id(
            payload.dish_id.clone(),
            shop_id.clone(),
            payload.caller_id,
        )
        .await
        .map_err(|_| response::Error::FailedToUpdateDish)?
    {
        return Err(response::Error::DishNotFound);
    }

    if ctx
        .repository
        .dish
        .other_exists_by_name(shop_id, payload.dish_id.clone(), body.name.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateDish)?
    {
        return Err(response::Error::NameExisted);
    }

    let dish = ctx
        .repository
        .dish
        .update_by_id(
            payload.dish_id,
            repository::UpdateDishPayload {
                name: body.name,
                description: body.description,
                price: body.price.unwrap_or_default(),
                image_url: body.image_url,
            },
        )
        .await
        .map_err(|_| response::Error::FailedToUpdateDish)?;

    tracing::info!("Updated dish {}", dish.id);

    Ok(response::Success::DishUpdated(dish))
}

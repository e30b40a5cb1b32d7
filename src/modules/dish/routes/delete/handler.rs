use super::{service::service, types::request};
use crate::{modules::auth::middleware::OwnerAuth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: OwnerAuth,
    Path(dish_id): Path<String>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            dish_id,
            caller_id: auth.caller_id(),
        },
    )
    .await
}

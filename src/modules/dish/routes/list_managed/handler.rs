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
    Path(shop_id): Path<String>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            caller_id: auth.caller_id(),
            shop_id,
        },
    )
    .await
}

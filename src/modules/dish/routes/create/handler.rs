use super::{service::service, types::request};
use crate::{modules::auth::middleware::OwnerAuth, types::Context};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: OwnerAuth,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            caller_id: auth.caller_id(),
            body,
        },
    )
    .await
}

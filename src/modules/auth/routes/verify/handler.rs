use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, headers: HeaderMap) -> impl IntoResponse {
    // A value that is not visible ASCII is present but unusable, so it verifies as invalid.
    let authorization = headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default().to_string());

    service(ctx, request::Payload { authorization }).await
}

mod register;
mod sign_in;
mod verify;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(register::get_router())
        .merge(sign_in::get_router())
        .merge(verify::get_router())
}

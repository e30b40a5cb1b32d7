use crate::{
    modules::{auth, dish},
    types::Context,
    utils::envelope::ResponseBody,
};
use axum::{
    routing::{get, Router},
    Json,
};
use std::sync::Arc;

async fn welcome() -> Json<ResponseBody<()>> {
    Json(ResponseBody {
        data: None,
        message: Some("Welcome to Jupiter API".to_string()),
        error: None,
    })
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(welcome))
        .merge(auth::get_router())
        .merge(dish::get_router())
}

use crate::{
    modules,
    types::{Context, StartupError},
};
use axum::{
    http::{header, Method},
    Extension, Router,
};
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{cors, trace};

/// Builds the full HTTP surface for `ctx`, mounted under `/v1/jupiter`.
pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/v1/jupiter", modules::get_router())
        .with_state(ctx.clone())
        .layer(Extension(ctx))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());
        Self { ctx, router }
    }

    pub async fn serve(self) -> Result<(), StartupError> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!("App is running on {}", address);

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

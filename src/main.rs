use jupiter_backend_rs::{
    app::App,
    types::{Config, StartupError, ToContext},
};
use std::{process, sync::Arc};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

async fn run() -> Result<(), StartupError> {
    let ctx = Arc::new(Config::from_env()?.to_context().await?);
    App::new(ctx).serve().await
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(err) = run().await {
        tracing::error!("Jupiter failed to start: {}", err);
        process::exit(1);
    }
}

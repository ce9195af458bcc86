use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use pump_blink_api::rpc::BlockhashProvider;
use pump_blink_api::{handlers, AppState, BlinkStore, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let mongo = mongodb::Client::with_uri_str(&config.mongodb_uri).await?;
    let store = BlinkStore::new(&mongo.database(&config.mongodb_db));
    let state = AppState {
        store,
        rpc: Arc::new(BlockhashProvider::new(config.rpc_url.clone())),
    };

    // Blinks are fetched cross-origin by wallets and action clients, so CORS
    // stays permissive; OPTIONS answers with the same metadata as GET.
    let app = Router::new()
        .route(
            "/api/actions/tokens/{id}",
            get(handlers::get_blink)
                .post(handlers::post_buy)
                .options(handlers::get_blink),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, rpc = %config.rpc_url, "blink api listening");
    axum::serve(listener, app).await?;

    Ok(())
}

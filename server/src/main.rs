mod config;
mod error;
mod routes;
mod state;
mod store;
mod upstream;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("config: {0}")]
    Config(#[from] config::ConfigError),
    #[error("restaurant data: {0}")]
    Store(#[from] store::StoreError),
    #[error("upstream client: {0}")]
    Upstream(#[from] upstream::UpstreamError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is the normal case outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let cfg = config::RelayConfig::from_env()?;

    let store = store::RestaurantStore::load(&cfg.restaurants_path)?;
    tracing::info!(path = %cfg.restaurants_path.display(), count = store.len(), "restaurant data loaded");
    if store.is_empty() {
        tracing::warn!("restaurant data is empty; /search will return no results");
    }

    let upstream = upstream::HttpUpstream::new(cfg.upstream_url.clone(), cfg.timeouts)?;
    tracing::info!(
        endpoint = upstream.endpoint(),
        request_timeout_secs = cfg.timeouts.request_secs,
        "upstream QA client initialized"
    );

    let state = state::AppState::new(store, Arc::new(upstream));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port)).await?;

    tracing::info!(port = cfg.port, "zeal relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}

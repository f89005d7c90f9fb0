use std::net::SocketAddr;
use std::sync::Arc;

use ensoku_faucet::config::FaucetConfig;
use ensoku_faucet::logging::init_logging;
use ensoku_faucet::routes::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let state = match FaucetConfig::from_env() {
        Ok(config) => AppState { config: Some(Arc::new(config)) },
        Err(e) => {
            // Keep serving: requests get the configuration-error response.
            tracing::error!("{e}; faucet requests will be rejected");
            AppState { config: None }
        }
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("🚰 Ensoku faucet listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

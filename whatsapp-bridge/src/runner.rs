use anyhow::Result;
use relay_core::init_tracing;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use crate::components::{build_components, BridgeComponents};
use crate::config::BridgeConfig;
use crate::web::{build_router, AppState};

/// Main entry: validate config, init logging, build components, then serve until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bridge(config: BridgeConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        messages_api_url = %config.messages_api_url,
        "Initializing bridge"
    );

    let components = build_components(&config)?;
    let listener = TcpListener::bind(config.socket_addr()?).await?;
    serve(listener, components).await
}

/// Serves the bridge routes on an already-bound listener until Ctrl-C.
/// Split out so tests can bind an ephemeral port and inject components.
pub async fn serve(listener: TcpListener, components: BridgeComponents) -> Result<()> {
    let app = build_router(AppState::new(components));
    info!(addr = %listener.local_addr()?, "Bridge listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Bridge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

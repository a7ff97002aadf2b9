//! Startup orchestration.
//!
//! Resolve configuration → build the route table → bind → serve.
//! Any startup error is fatal; nothing is bound before configuration resolves.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{resolve, ConfigLoadError, ConfigSource};
use crate::http::GatewayServer;
use crate::lifecycle::Shutdown;
use crate::net::{bind, BindError};
use crate::observability::metrics;
use crate::pool::PoolEngine;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigLoadError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the gateway until Ctrl+C.
pub async fn launch<P: AsRef<Path>>(
    search_dirs: &[P],
    engine: Arc<dyn PoolEngine>,
) -> Result<(), StartupError> {
    let resolved = resolve(search_dirs)?;
    match &resolved.source {
        ConfigSource::Production(path) => {
            tracing::info!(path = %path.display(), "Configuration loaded")
        }
        ConfigSource::Sample(path) => {
            tracing::warn!(path = %path.display(), "Running with sample configuration")
        }
    }
    let config = Arc::new(resolved.config);

    tracing::info!(
        network = %config.client.network,
        address = %config.server.address,
        port = config.server.port,
        delegate = %config.delegate.address,
        "Gateway configuration"
    );

    let server = GatewayServer::new(config.clone(), engine);

    if !config.observability.metrics_address.is_empty() {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr, server.state().service_mode.get()),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = bind(&config.server).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

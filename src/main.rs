//! Pool gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!   cfg/config.toml ──┐
//!   cfg/sample.config.toml ─┴─▶ config::resolve ──▶ GatewayConfig (Arc, immutable)
//!                                                        │
//!   Client Request                                       ▼
//!   ──────────────▶ trace ─▶ request id ─▶ CORS ─▶ group guard ─▶ handler ─▶ PoolEngine
//!                                           │          │
//!                              OPTIONS → 200 ┘          ├─ productive groups: 503 while suspended
//!                                                       └─ /service:          403 unless loopback
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use pool_gateway::config::loader::DEFAULT_SEARCH_DIRS;
use pool_gateway::lifecycle::launch;
use pool_gateway::observability::logging::init_logging;
use pool_gateway::pool::DetachedEngine;

#[derive(Parser)]
#[command(name = "pool-gateway", version)]
#[command(about = "HTTP gateway for a delegate's payment pool", long_about = None)]
struct Cli {
    /// Directory searched for config.toml, then sample.config.toml. Repeatable;
    /// searched in the order given.
    #[arg(long = "search-dir", default_values = DEFAULT_SEARCH_DIRS)]
    search_dirs: Vec<PathBuf>,
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pool-gateway starting");

    if let Err(e) = launch(&cli.search_dirs, Arc::new(DetachedEngine)).await {
        tracing::error!(error = %e, "Gateway startup failed");
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
}

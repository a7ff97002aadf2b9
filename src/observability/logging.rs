//! Structured logging.
//!
//! Uses `tracing` with an `EnvFilter` driven by `RUST_LOG`; the default keeps
//! gateway and tower-http events at info.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "pool_gateway=info,tower_http=info";

/// Install the global subscriber. Call once, before configuration resolves.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

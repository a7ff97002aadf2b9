//! HTTP gateway for a delegate's reward-sharing pool.
//!
//! Exposes voter, delegate, social and relay queries answered by an external
//! payment engine, plus loopback-only control endpoints that suspend the
//! public surface while a payment run is in progress.

pub mod admin;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod pool;
pub mod routing;
pub mod security;

pub use config::schema::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;

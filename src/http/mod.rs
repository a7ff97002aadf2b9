//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (peer address recorded via ConnectInfo)
//!     → server.rs (trace, x-request-id)
//!     → cors.rs (headers on every response, OPTIONS answered here)
//!     → routing::groups (group guard)
//!     → handler
//! ```

pub mod cors;
pub mod server;

pub use server::{build_router, AppState, GatewayServer};

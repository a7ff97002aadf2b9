//! Payment pool surface.
//!
//! # Data Flow
//! ```text
//! GET /voters/..., /delegate/..., /social/..., /proxy/...
//!     → handlers.rs
//!         ├─ config-backed answers (identity, sharing policy, blocklist, social links)
//!         └─ engine.rs PoolEngine (rewards, voters, payment runs, node, news, relay)
//! ```

pub mod engine;
pub mod handlers;
pub mod types;

pub use engine::{DetachedEngine, EngineError, EngineResult, PoolEngine};

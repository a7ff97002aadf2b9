//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! cfg/config.toml ─┐
//!                  ├─ loader.rs (first loadable candidate wins)
//! cfg/sample.config.toml ─┘
//!     → schema.rs (serde defaults fill every missing key)
//!     → validation.rs (range checks; a failing production file is fatal)
//!     → GatewayConfig (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; there is no reload path
//! - All fields have defaults, so a missing key never surfaces as an error
//! - keys.rs exposes the same snapshot by dotted key

pub mod keys;
pub mod loader;
pub mod schema;
pub mod validation;

pub use keys::{ConfigValue, RECOGNIZED_KEYS};
pub use loader::{resolve, ConfigError, ConfigLoadError, ConfigSource, ResolvedConfig};
pub use schema::{
    ClientConfig, DelegateConfig, GatewayConfig, ObservabilityConfig, PayoutShareConfig,
    ServerConfig, VotersConfig, WebConfig,
};

//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (after CORS):
//!     productive groups → service_availability_middleware (503 while suspended)
//!     service group     → loopback_only_middleware (403 for remote peers)
//!     → handler
//! ```
//!
//! # Design Decisions
//! - Guards are attached per route group, never per handler
//! - Fail closed: a request without peer information is not local
//! - service_mode.rs owns the only mutable shared state in the gateway

pub mod access_control;
pub mod service_mode;

pub use access_control::{AccessDecision, Denial};
pub use service_mode::{ServiceMode, ServiceModeCell};

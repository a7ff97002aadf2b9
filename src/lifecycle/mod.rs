//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → Build routes → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → axum graceful shutdown → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: configuration and bind errors are fatal
//! - The listener binds last, after the route table exists

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{launch, StartupError};

//! Service-mode control.
//!
//! Mounted under `/service` behind the loopback-only guard, so only a
//! co-located operator or process (see `pool-ctl`) can flip the mode.

pub mod handlers;

pub use handlers::{start_service, stop_service, ServiceModeReport};

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Prometheus scrape (when observability.metrics_address is set)
//! ```
//!
//! # Design Decisions
//! - Every request carries an x-request-id (see http::server)
//! - Metrics are cheap when no exporter is installed

pub mod logging;
pub mod metrics;

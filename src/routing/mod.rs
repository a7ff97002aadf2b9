//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     groups.rs route_groups() (prefix, guard, endpoints)
//!     → RouteGroup::into_router (route_layer guard per group)
//!     → compose() merges the groups
//!     → http::server adds CORS and tracing around the whole table
//! ```
//!
//! # Design Decisions
//! - Route table is built once and immutable at runtime
//! - Guards live at the group boundary, not in handlers

pub mod groups;

pub use groups::{compose, route_groups, Endpoint, Guard, RouteGroup};

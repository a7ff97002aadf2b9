//! Network layer.
//!
//! The gateway binds a single plain TCP listener; axum handles one task per
//! connection on top of it.

pub mod listener;

pub use listener::{bind, bind_address, BindError};

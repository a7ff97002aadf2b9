//! Process-wide service mode.
//!
//! # States
//! - Active: public read traffic is served
//! - Suspended: gated routes answer 503 while the payment engine works
//!
//! # State Transitions
//! ```text
//! Active    → Suspended: /service/stop
//! Suspended → Active:    /service/start
//! ```
//! Both transitions are idempotent. The mode is not persisted and every
//! process starts Active.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::Serialize;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    Active = 0,
    Suspended = 1,
}

impl From<u8> for ServiceMode {
    fn from(val: u8) -> Self {
        match val {
            0 => ServiceMode::Active,
            _ => ServiceMode::Suspended,
        }
    }
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceMode::Active => f.write_str("active"),
            ServiceMode::Suspended => f.write_str("suspended"),
        }
    }
}

/// Shared cell holding the current [`ServiceMode`].
///
/// A single byte swapped atomically, so readers see either the old or the new
/// mode and never anything in between.
#[derive(Debug)]
pub struct ServiceModeCell {
    state: AtomicU8,
}

impl ServiceModeCell {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(ServiceMode::Active as u8),
        }
    }

    pub fn get(&self) -> ServiceMode {
        ServiceMode::from(self.state.load(Ordering::Acquire))
    }

    /// Store `mode`, returning the mode it replaced.
    pub fn set(&self, mode: ServiceMode) -> ServiceMode {
        ServiceMode::from(self.state.swap(mode as u8, Ordering::AcqRel))
    }

    pub fn suspend(&self) -> ServiceMode {
        self.set(ServiceMode::Suspended)
    }

    pub fn resume(&self) -> ServiceMode {
        self.set(ServiceMode::Active)
    }

    pub fn is_active(&self) -> bool {
        self.get() == ServiceMode::Active
    }
}

impl Default for ServiceModeCell {
    fn default() -> Self {
        Self::new()
    }
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_access_denied_total` (counter): denials by reason
//! - `gateway_service_mode` (gauge): 0=active, 1=suspended
//! - `gateway_service_mode_transitions_total` (counter): transitions by target mode
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::security::{Denial, ServiceMode};

/// Install the Prometheus exporter listening on `addr` and publish the
/// starting service mode.
pub fn init_metrics(addr: SocketAddr, mode: ServiceMode) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
            record_service_mode(mode, false);
        }
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_denial(denial: Denial) {
    counter!("gateway_access_denied_total", "reason" => denial.as_str()).increment(1);
}

pub fn record_service_mode(mode: ServiceMode, changed: bool) {
    gauge!("gateway_service_mode").set(mode as u8 as f64);
    if changed {
        let to = match mode {
            ServiceMode::Active => "active",
            ServiceMode::Suspended => "suspended",
        };
        counter!("gateway_service_mode_transitions_total", "to" => to).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_publishes_gauge_without_transition() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_service_mode(ServiceMode::Active, false);
        });

        let rendered = handle.render();
        assert!(rendered.contains("gateway_service_mode 0"), "{}", rendered);
        assert!(!rendered.contains("gateway_service_mode_transitions_total"));
    }

    #[test]
    fn test_transition_counted_by_target() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_service_mode(ServiceMode::Suspended, true);
        });

        let rendered = handle.render();
        assert!(rendered.contains("gateway_service_mode 1"), "{}", rendered);
        assert!(rendered.contains("gateway_service_mode_transitions_total{to=\"suspended\"} 1"));
    }
}

use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::security::ServiceMode;

#[derive(Debug, Serialize)]
pub struct ServiceModeReport {
    pub success: bool,
    pub service_mode: ServiceMode,
    /// False when the gateway was already in the requested mode.
    pub changed: bool,
}

/// `GET /service/start`: serve productive routes again.
pub async fn start_service(State(state): State<AppState>) -> Json<ServiceModeReport> {
    Json(transition(&state, ServiceMode::Active))
}

/// `GET /service/stop`: refuse productive routes until started again.
pub async fn stop_service(State(state): State<AppState>) -> Json<ServiceModeReport> {
    Json(transition(&state, ServiceMode::Suspended))
}

fn transition(state: &AppState, target: ServiceMode) -> ServiceModeReport {
    let previous = state.service_mode.set(target);
    let changed = previous != target;
    if changed {
        tracing::info!(from = %previous, to = %target, "Service mode changed");
    } else {
        tracing::debug!(mode = %target, "Service mode unchanged");
    }
    metrics::record_service_mode(target, changed);

    ServiceModeReport {
        success: true,
        service_mode: target,
        changed,
    }
}

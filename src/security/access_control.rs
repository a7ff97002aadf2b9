//! Access policy guards.
//!
//! Two independent checks, each usable as axum middleware:
//! - service availability: productive routes are refused while suspended
//! - loopback only: service-mode control is refused to remote peers
//!
//! A denial is a terminal response; the wrapped handler never runs.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::observability::metrics;
use crate::security::service_mode::{ServiceMode, ServiceModeCell};

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(Denial),
}

/// Reason a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    ServiceSuspended,
    NotLocalOrigin,
}

impl Denial {
    pub fn status(&self) -> StatusCode {
        match self {
            Denial::ServiceSuspended => StatusCode::SERVICE_UNAVAILABLE,
            Denial::NotLocalOrigin => StatusCode::FORBIDDEN,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Denial::ServiceSuspended => "service_suspended",
            Denial::NotLocalOrigin => "not_local_origin",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Denial::ServiceSuspended => "Service suspended while payments are processed",
            Denial::NotLocalOrigin => "Only local calls are allowed",
        }
    }
}

impl IntoResponse for Denial {
    fn into_response(self) -> Response {
        let body = json!({ "success": false, "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

/// Allow unless the gateway is suspended.
pub fn check_service_available(mode: ServiceMode) -> AccessDecision {
    match mode {
        ServiceMode::Active => AccessDecision::Allow,
        ServiceMode::Suspended => AccessDecision::Deny(Denial::ServiceSuspended),
    }
}

/// Allow only loopback peers. Unknown peers are refused.
pub fn check_local_origin(peer: Option<SocketAddr>) -> AccessDecision {
    match peer {
        Some(addr) if is_loopback(addr.ip()) => AccessDecision::Allow,
        _ => AccessDecision::Deny(Denial::NotLocalOrigin),
    }
}

fn is_loopback(ip: IpAddr) -> bool {
    // ::ffff:127.0.0.1 arrives on dual-stack listeners
    ip.to_canonical().is_loopback()
}

fn enforce(decision: AccessDecision, req: Request) -> Result<Request, Response> {
    match decision {
        AccessDecision::Allow => Ok(req),
        AccessDecision::Deny(denial) => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                reason = denial.as_str(),
                "Request denied"
            );
            metrics::record_denial(denial);
            Err(denial.into_response())
        }
    }
}

/// Middleware refusing requests while the service mode is suspended.
pub async fn service_availability_middleware(
    State(mode): State<Arc<ServiceModeCell>>,
    req: Request,
    next: Next,
) -> Response {
    match enforce(check_service_available(mode.get()), req) {
        Ok(req) => next.run(req).await,
        Err(response) => response,
    }
}

/// Middleware refusing requests that do not originate from the local host.
pub async fn loopback_only_middleware(req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    match enforce(check_local_origin(peer), req) {
        Ok(req) => next.run(req).await,
        Err(response) => response,
    }
}

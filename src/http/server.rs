//! HTTP server setup.
//!
//! # Responsibilities
//! - Hold the shared application state
//! - Assemble the route table with CORS, request IDs and tracing
//! - Serve the table on a bound listener with peer address info

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::GatewayConfig;
use crate::http::cors::apply_cors;
use crate::pool::PoolEngine;
use crate::routing;
use crate::security::ServiceModeCell;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub service_mode: Arc<ServiceModeCell>,
    pub engine: Arc<dyn PoolEngine>,
}

impl AppState {
    /// Fresh state; the service mode starts active.
    pub fn new(config: Arc<GatewayConfig>, engine: Arc<dyn PoolEngine>) -> Self {
        Self {
            config,
            service_mode: Arc::new(ServiceModeCell::new()),
            engine,
        }
    }
}

/// Build the complete router: route groups, fallback, CORS, request IDs, tracing.
///
/// Layer order, outermost first: trace, request id, CORS headers, preflight,
/// group guard, handler.
pub fn build_router(state: AppState) -> Router {
    let router = routing::compose(&state)
        .fallback(not_found)
        .with_state(state);

    apply_cors(router)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": format!("no route for {}", uri.path()) })),
    )
}

/// HTTP server for the pool gateway.
pub struct GatewayServer {
    router: Router,
    state: AppState,
}

impl GatewayServer {
    pub fn new(config: Arc<GatewayConfig>, engine: Arc<dyn PoolEngine>) -> Self {
        Self::with_state(AppState::new(config, engine))
    }

    pub fn with_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Shared state, e.g. to observe the service mode.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

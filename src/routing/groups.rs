//! Route groups and their access policies.
//!
//! Each group owns a prefix, its endpoints and exactly one guard. The guard is
//! attached once at the group boundary with `route_layer`, so an endpoint added
//! to a group inherits the group's policy.

use std::fmt;

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};

use crate::admin;
use crate::http::server::AppState;
use crate::pool::handlers;
use crate::security::access_control::{loopback_only_middleware, service_availability_middleware};

/// Access policy attached to a route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// 503 while the service mode is suspended.
    ServiceAvailability,
    /// 403 unless the peer is the local host.
    LoopbackOnly,
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::ServiceAvailability => f.write_str("service-availability"),
            Guard::LoopbackOnly => f.write_str("loopback-only"),
        }
    }
}

/// One endpoint of a group. `path` is relative to the group prefix; an empty
/// path is the prefix itself.
pub struct Endpoint {
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

impl Endpoint {
    fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: axum::handler::Handler<T, AppState>,
        T: 'static,
    {
        Self {
            path,
            handler: get(handler),
        }
    }
}

/// A named prefix owning ordered endpoints and a single guard.
pub struct RouteGroup {
    pub name: &'static str,
    pub prefix: &'static str,
    pub guard: Guard,
    pub endpoints: Vec<Endpoint>,
}

impl RouteGroup {
    /// Full paths served by this group, in registration order.
    pub fn paths(&self) -> Vec<String> {
        self.endpoints
            .iter()
            .map(|e| format!("{}{}", self.prefix, e.path))
            .collect()
    }

    /// Build the group's router with its guard applied to every endpoint.
    pub fn into_router(self, state: &AppState) -> Router<AppState> {
        let prefix = self.prefix;
        let router = self
            .endpoints
            .into_iter()
            .fold(Router::new(), |router, endpoint| {
                router.route(&format!("{}{}", prefix, endpoint.path), endpoint.handler)
            });

        match self.guard {
            Guard::ServiceAvailability => router.route_layer(middleware::from_fn_with_state(
                state.service_mode.clone(),
                service_availability_middleware,
            )),
            Guard::LoopbackOnly => router.route_layer(middleware::from_fn(loopback_only_middleware)),
        }
    }
}

/// The gateway's route groups.
pub fn route_groups() -> Vec<RouteGroup> {
    vec![
        RouteGroup {
            name: "voters",
            prefix: "/voters",
            guard: Guard::ServiceAvailability,
            endpoints: vec![
                Endpoint::get("/rewards", handlers::pending_rewards),
                Endpoint::get("/blocked", handlers::blocked_voters),
                Endpoint::get("", handlers::voters),
            ],
        },
        RouteGroup {
            name: "delegate",
            prefix: "/delegate",
            guard: Guard::ServiceAvailability,
            endpoints: vec![
                Endpoint::get("", handlers::delegate),
                Endpoint::get("/config", handlers::sharing_config),
                Endpoint::get("/paymentruns", handlers::payment_runs),
                Endpoint::get("/paymentruns/details", handlers::payment_run_details),
                Endpoint::get("/nodestatus", handlers::node_status),
            ],
        },
        RouteGroup {
            name: "service",
            prefix: "/service",
            guard: Guard::LoopbackOnly,
            endpoints: vec![
                Endpoint::get("/start", admin::start_service),
                Endpoint::get("/stop", admin::stop_service),
            ],
        },
        RouteGroup {
            name: "social",
            prefix: "/social",
            guard: Guard::ServiceAvailability,
            endpoints: vec![
                Endpoint::get("", handlers::news),
                Endpoint::get("/info", handlers::social_info),
            ],
        },
        RouteGroup {
            name: "proxy",
            prefix: "/proxy",
            guard: Guard::ServiceAvailability,
            endpoints: vec![Endpoint::get("/senddark", handlers::send_devnet)],
        },
    ]
}

/// Merge every group into one router.
pub fn compose(state: &AppState) -> Router<AppState> {
    route_groups()
        .into_iter()
        .fold(Router::new(), |router, group| {
            tracing::debug!(
                group = group.name,
                prefix = group.prefix,
                guard = %group.guard,
                endpoints = group.endpoints.len(),
                "Registering route group"
            );
            router.merge(group.into_router(state))
        })
}

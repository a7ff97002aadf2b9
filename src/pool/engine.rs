//! Contract between the gateway and the payment engine.
//!
//! The engine computes shares, persists payment runs and talks to the node;
//! the gateway only forwards queries to it.

use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pool::types::{
    NewsItem, NodeStatus, PaymentRun, PaymentRunDetail, PendingReward, SendReceipt, Voter,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("payment engine unavailable: {0}")]
    Unavailable(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn status(&self) -> StatusCode {
        match self {
            EngineError::NotFound(_) => StatusCode::NOT_FOUND,
            EngineError::BadRequest(_) => StatusCode::BAD_REQUEST,
            EngineError::Unavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Payment engine call failed");
        }
        let body = json!({ "success": false, "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Queries served by the payment engine.
#[async_trait]
pub trait PoolEngine: Send + Sync {
    async fn pending_rewards(&self) -> EngineResult<Vec<PendingReward>>;

    async fn voters(&self) -> EngineResult<Vec<Voter>>;

    async fn payment_runs(&self) -> EngineResult<Vec<PaymentRun>>;

    async fn payment_run_details(&self, parent_id: i64) -> EngineResult<Vec<PaymentRunDetail>>;

    async fn node_status(&self) -> EngineResult<NodeStatus>;

    async fn news(&self, address: &str) -> EngineResult<Vec<NewsItem>>;

    /// Relay a devnet transfer to `address`.
    async fn send_devnet(&self, address: &str) -> EngineResult<SendReceipt>;
}

/// Engine used when no payment engine is attached to the gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedEngine;

impl DetachedEngine {
    fn unavailable<T>() -> EngineResult<T> {
        Err(EngineError::Unavailable("no payment engine attached".to_string()))
    }
}

#[async_trait]
impl PoolEngine for DetachedEngine {
    async fn pending_rewards(&self) -> EngineResult<Vec<PendingReward>> {
        Self::unavailable()
    }

    async fn voters(&self) -> EngineResult<Vec<Voter>> {
        Self::unavailable()
    }

    async fn payment_runs(&self) -> EngineResult<Vec<PaymentRun>> {
        Self::unavailable()
    }

    async fn payment_run_details(&self, _parent_id: i64) -> EngineResult<Vec<PaymentRunDetail>> {
        Self::unavailable()
    }

    async fn node_status(&self) -> EngineResult<NodeStatus> {
        Self::unavailable()
    }

    async fn news(&self, _address: &str) -> EngineResult<Vec<NewsItem>> {
        Self::unavailable()
    }

    async fn send_devnet(&self, _address: &str) -> EngineResult<SendReceipt> {
        Self::unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detached_engine_is_unavailable() {
        let engine = DetachedEngine;
        let err = engine.voters().await.unwrap_err();
        assert!(matches!(err, EngineError::Unavailable(_)));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(EngineError::NotFound("run 7".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            EngineError::BadRequest("missing address".into()).to_string(),
            "bad request: missing address"
        );
    }
}

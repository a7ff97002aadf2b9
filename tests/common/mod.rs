//! Shared utilities for gateway integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Method, Request};
use pool_gateway::config::GatewayConfig;
use pool_gateway::http::AppState;
use pool_gateway::pool::types::{
    NewsItem, NodeStatus, PaymentRun, PaymentRunDetail, PendingReward, SendReceipt, Voter,
};
use pool_gateway::pool::{EngineError, EngineResult, PoolEngine};

/// Engine that answers with fixed data and counts every call.
#[derive(Default)]
pub struct CountingEngine {
    calls: AtomicUsize,
}

impl CountingEngine {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PoolEngine for CountingEngine {
    async fn pending_rewards(&self) -> EngineResult<Vec<PendingReward>> {
        self.hit();
        Ok(vec![PendingReward {
            address: "AVoter1".into(),
            vote_weight: 1_000_000_000,
            earned: 25_000_000,
        }])
    }

    async fn voters(&self) -> EngineResult<Vec<Voter>> {
        self.hit();
        Ok(vec![Voter {
            address: "AVoter1".into(),
            public_key: "02ab".into(),
            balance: 1_000_000_000,
            blocked: false,
        }])
    }

    async fn payment_runs(&self) -> EngineResult<Vec<PaymentRun>> {
        self.hit();
        Ok(vec![PaymentRun {
            id: 7,
            created_at: 1_500_000_000,
            share_ratio: 0.9,
            voters_count: 1,
            voters_paid: 25_000_000,
            fees: 10_000_000,
            network: "DEVNET".into(),
        }])
    }

    async fn payment_run_details(&self, parent_id: i64) -> EngineResult<Vec<PaymentRunDetail>> {
        self.hit();
        if parent_id != 7 {
            return Err(EngineError::NotFound(format!("payment run {}", parent_id)));
        }
        Ok(vec![PaymentRunDetail {
            run_id: 7,
            address: "AVoter1".into(),
            vote_duration_hours: 48,
            earned: 25_000_000,
            tx_id: "tx1".into(),
        }])
    }

    async fn node_status(&self) -> EngineResult<NodeStatus> {
        self.hit();
        Ok(NodeStatus {
            syncing: false,
            height: 123,
            blocks_remaining: 0,
            forging: true,
        })
    }

    async fn news(&self, address: &str) -> EngineResult<Vec<NewsItem>> {
        self.hit();
        Ok(vec![NewsItem {
            tx_id: "news1".into(),
            timestamp: 1_500_000_000,
            message: format!("news from {}", address),
        }])
    }

    async fn send_devnet(&self, address: &str) -> EngineResult<SendReceipt> {
        self.hit();
        Ok(SendReceipt {
            tx_id: "dark1".into(),
            recipient: address.into(),
            amount: 100_000_000,
        })
    }
}

/// State over `config` with a fresh counting engine.
#[allow(dead_code)]
pub fn state_with(config: GatewayConfig) -> (AppState, Arc<CountingEngine>) {
    let engine = Arc::new(CountingEngine::default());
    let state = AppState::new(Arc::new(config), engine.clone());
    (state, engine)
}

#[allow(dead_code)]
pub fn local_peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

#[allow(dead_code)]
pub fn remote_peer() -> SocketAddr {
    "203.0.113.9:40000".parse().unwrap()
}

/// A request as the server would see it from `peer`.
#[allow(dead_code)]
pub fn request_from(method: Method, uri: &str, peer: SocketAddr) -> Request<Body> {
    let mut req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    req.extensions_mut().insert(ConnectInfo(peer));
    req
}

#[allow(dead_code)]
pub fn get_from(uri: &str, peer: SocketAddr) -> Request<Body> {
    request_from(Method::GET, uri, peer)
}

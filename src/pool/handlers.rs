//! Handlers for the voters, delegate, social and proxy groups.
//!
//! Policy and identity endpoints answer from the configuration snapshot;
//! everything else is delegated to the [`PoolEngine`](crate::pool::PoolEngine).

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::pool::engine::{EngineError, EngineResult};
use crate::pool::types::{
    BlockedVoters, DelegateInfo, NewsItem, NodeStatus, PaymentRun, PaymentRunDetail,
    PendingReward, SendReceipt, SharingConfig, SocialInfo, Voter,
};

#[derive(Debug, Deserialize)]
pub struct PaymentRunQuery {
    pub parentid: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddressQuery {
    pub address: Option<String>,
}

// voters

pub async fn pending_rewards(State(state): State<AppState>) -> EngineResult<Json<Vec<PendingReward>>> {
    Ok(Json(state.engine.pending_rewards().await?))
}

pub async fn blocked_voters(State(state): State<AppState>) -> Json<BlockedVoters> {
    Json(BlockedVoters::from_config(&state.config))
}

pub async fn voters(State(state): State<AppState>) -> EngineResult<Json<Vec<Voter>>> {
    Ok(Json(state.engine.voters().await?))
}

// delegate

pub async fn delegate(State(state): State<AppState>) -> Json<DelegateInfo> {
    Json(DelegateInfo::from_config(&state.config))
}

pub async fn sharing_config(State(state): State<AppState>) -> Json<SharingConfig> {
    Json(SharingConfig::from_config(&state.config))
}

pub async fn payment_runs(State(state): State<AppState>) -> EngineResult<Json<Vec<PaymentRun>>> {
    Ok(Json(state.engine.payment_runs().await?))
}

pub async fn payment_run_details(
    State(state): State<AppState>,
    Query(query): Query<PaymentRunQuery>,
) -> EngineResult<Json<Vec<PaymentRunDetail>>> {
    Ok(Json(state.engine.payment_run_details(query.parentid).await?))
}

pub async fn node_status(State(state): State<AppState>) -> EngineResult<Json<NodeStatus>> {
    Ok(Json(state.engine.node_status().await?))
}

// social

pub async fn news(
    State(state): State<AppState>,
    Query(query): Query<AddressQuery>,
) -> EngineResult<Json<Vec<NewsItem>>> {
    let address = non_empty(query.address)
        .or_else(|| non_empty(Some(state.config.web.arknewsaddress.clone())))
        .ok_or_else(|| EngineError::BadRequest("no news address given or configured".into()))?;
    Ok(Json(state.engine.news(&address).await?))
}

pub async fn social_info(State(state): State<AppState>) -> Json<SocialInfo> {
    Json(SocialInfo::from(&state.config.web))
}

// proxy

pub async fn send_devnet(
    State(state): State<AppState>,
    Query(query): Query<AddressQuery>,
) -> EngineResult<Json<SendReceipt>> {
    if !state.config.client.is_devnet() {
        return Err(EngineError::BadRequest(format!(
            "relay is only available on DEVNET, configured network is {}",
            state.config.client.network
        )));
    }
    let address = non_empty(query.address)
        .ok_or_else(|| EngineError::BadRequest("address is required".into()))?;

    tracing::info!(recipient = %address, "Relaying devnet transfer");
    Ok(Json(state.engine.send_devnet(&address).await?))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

//! Payloads exchanged with voters, dashboards and the payment engine.
//!
//! Amounts are in arktoshi (1 ARK = 100_000_000).

use serde::{Deserialize, Serialize};

use crate::config::{DelegateConfig, GatewayConfig, PayoutShareConfig, WebConfig};

/// A voter's reward accrued since the last payment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingReward {
    pub address: String,
    pub vote_weight: u64,
    pub earned: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    pub address: String,
    pub public_key: String,
    pub balance: u64,
    /// Whether the voter is excluded from payouts.
    pub blocked: bool,
}

/// Summary of one payment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRun {
    pub id: i64,
    /// Unix seconds.
    pub created_at: u64,
    pub share_ratio: f64,
    pub voters_count: u32,
    pub voters_paid: u64,
    pub fees: u64,
    pub network: String,
}

/// A single payout within a payment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRunDetail {
    pub run_id: i64,
    pub address: String,
    pub vote_duration_hours: u32,
    pub earned: u64,
    pub tx_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub syncing: bool,
    pub height: u64,
    pub blocks_remaining: u64,
    pub forging: bool,
}

/// A news entry published as a transaction vendor field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub tx_id: String,
    pub timestamp: u64,
    pub message: String,
}

/// Receipt for a relayed devnet transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub tx_id: String,
    pub recipient: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegateInfo {
    pub address: String,
    pub public_key: String,
    pub devnet_address: String,
    pub devnet_public_key: String,
    pub network: String,
    pub server_version: &'static str,
}

impl DelegateInfo {
    pub fn from_config(config: &GatewayConfig) -> Self {
        let DelegateConfig {
            address,
            pubkey,
            daddress,
            dpubkey,
        } = &config.delegate;
        Self {
            address: address.clone(),
            public_key: pubkey.clone(),
            devnet_address: daddress.clone(),
            devnet_public_key: dpubkey.clone(),
            network: config.client.network.clone(),
            server_version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareTarget {
    pub address: String,
    pub share_ratio: f64,
}

impl From<&PayoutShareConfig> for ShareTarget {
    fn from(share: &PayoutShareConfig) -> Self {
        Self {
            address: share.address.clone(),
            share_ratio: share.share_ratio,
        }
    }
}

/// Public view of the delegate's sharing policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharingConfig {
    pub share_ratio: f64,
    pub fidelity: bool,
    pub fidelity_limit_hours: u32,
    pub min_amount: f64,
    pub deduct_tx_fees: bool,
    pub cap_balance: bool,
    pub balance_cap_amount: f64,
    pub whitelist: Vec<String>,
    pub costs: ShareTarget,
    pub reserve: ShareTarget,
    pub personal: ShareTarget,
}

impl SharingConfig {
    pub fn from_config(config: &GatewayConfig) -> Self {
        let voters = &config.voters;
        Self {
            share_ratio: voters.share_ratio,
            fidelity: voters.fidelity,
            fidelity_limit_hours: voters.fidelity_limit,
            min_amount: voters.min_amount,
            deduct_tx_fees: voters.deduct_tx_fees,
            cap_balance: voters.cap_balance,
            balance_cap_amount: voters.balance_cap_amount,
            whitelist: voters.whitelisted_addresses(),
            costs: (&config.costs).into(),
            reserve: (&config.reserve).into(),
            personal: (&config.personal).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockedVoters {
    pub count: usize,
    pub addresses: Vec<String>,
}

impl BlockedVoters {
    pub fn from_config(config: &GatewayConfig) -> Self {
        let addresses = config.voters.blocked_addresses();
        Self {
            count: addresses.len(),
            addresses,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialInfo {
    pub email: String,
    pub slack: String,
    pub reddit: String,
    pub arkforum: String,
    pub news_address: String,
    pub frontend: bool,
}

impl From<&WebConfig> for SocialInfo {
    fn from(web: &WebConfig) -> Self {
        Self {
            email: web.email.clone(),
            slack: web.slack.clone(),
            reddit: web.reddit.clone(),
            arkforum: web.arkforum.clone(),
            news_address: web.arknewsaddress.clone(),
            frontend: web.frontend,
        }
    }
}

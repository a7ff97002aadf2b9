//! Configuration schema definitions.
//!
//! Every section carries `#[serde(default)]` so a partial file (or none at all)
//! still produces a fully populated snapshot. Unknown keys are ignored.

use serde::{Deserialize, Deserializer, Serialize};

const COSTS_TX: &str = "cost tx by ark-go";
const RESERVE_TX: &str = "reserve tx by ark-go";
const PERSONAL_TX: &str = "personal tx by ark-go";

/// Root configuration for the pool gateway.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Delegate identity (mainnet and devnet).
    pub delegate: DelegateConfig,

    /// Voter sharing policy.
    pub voters: VotersConfig,

    /// Operating cost payout share.
    #[serde(deserialize_with = "costs_share")]
    pub costs: PayoutShareConfig,

    /// Reserve payout share.
    #[serde(deserialize_with = "reserve_share")]
    pub reserve: PayoutShareConfig,

    /// Delegate's personal payout share.
    #[serde(deserialize_with = "personal_share")]
    pub personal: PayoutShareConfig,

    /// Network selector for the node client.
    pub client: ClientConfig,

    /// Listener and backing store settings.
    pub server: ServerConfig,

    /// Optional web frontend and social metadata.
    pub web: WebConfig,

    /// Metrics exporter settings.
    pub observability: ObservabilityConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            delegate: DelegateConfig::default(),
            voters: VotersConfig::default(),
            costs: PayoutShareConfig::with_description(COSTS_TX),
            reserve: PayoutShareConfig::with_description(RESERVE_TX),
            personal: PayoutShareConfig::with_description(PERSONAL_TX),
            client: ClientConfig::default(),
            server: ServerConfig::default(),
            web: WebConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Payout share sections keyed by their section name.
    pub fn payout_shares(&self) -> [(&'static str, &PayoutShareConfig); 3] {
        [
            ("costs", &self.costs),
            ("reserve", &self.reserve),
            ("personal", &self.personal),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DelegateConfig {
    pub address: String,
    pub pubkey: String,
    /// Devnet address.
    #[serde(alias = "Daddress")]
    pub daddress: String,
    /// Devnet public key.
    #[serde(alias = "Dpubkey")]
    pub dpubkey: String,
}

/// Voter sharing policy.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct VotersConfig {
    /// Fraction of forged rewards shared with voters (0.0 - 1.0).
    #[serde(alias = "shareRatio", alias = "shareratio")]
    pub share_ratio: f64,

    /// Vendor field attached to share transactions.
    pub txdescription: String,

    /// Only pay voters that stayed for the whole fidelity window.
    pub fidelity: bool,

    /// Fidelity window in hours.
    #[serde(alias = "fidelityLimit", alias = "fidelitylimit")]
    pub fidelity_limit: u32,

    /// Minimum payout amount.
    #[serde(alias = "minamount", alias = "minAmount")]
    pub min_amount: f64,

    #[serde(alias = "deductTxFees", alias = "deducttxfees")]
    pub deduct_tx_fees: bool,

    /// Comma separated addresses excluded from payouts.
    pub blocklist: String,

    #[serde(alias = "capBalance", alias = "capbalance")]
    pub cap_balance: bool,

    #[serde(alias = "balanceCapAmount", alias = "balancecapamount")]
    pub balance_cap_amount: f64,

    /// Comma separated addresses exclusively eligible for payouts.
    pub whitelist: String,
}

impl Default for VotersConfig {
    fn default() -> Self {
        Self {
            share_ratio: 0.0,
            txdescription: "share tx by ark-go".to_string(),
            fidelity: true,
            fidelity_limit: 24,
            min_amount: 0.0,
            deduct_tx_fees: true,
            blocklist: String::new(),
            cap_balance: false,
            balance_cap_amount: 0.0,
            whitelist: String::new(),
        }
    }
}

impl VotersConfig {
    /// Blocklist entries, trimmed, empties dropped.
    pub fn blocked_addresses(&self) -> Vec<String> {
        split_list(&self.blocklist)
    }

    /// Whitelist entries, trimmed, empties dropped.
    pub fn whitelisted_addresses(&self) -> Vec<String> {
        split_list(&self.whitelist)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A secondary payout recipient (costs, reserve, personal).
///
/// The three sections share a shape but not their default vendor field, so they
/// are deserialized through a raw all-optional form and filled from the section's defaults.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayoutShareConfig {
    pub address: String,
    pub share_ratio: f64,
    pub txdescription: String,
    /// Devnet address.
    pub daddress: String,
}

impl PayoutShareConfig {
    fn with_description(txdescription: &str) -> Self {
        Self {
            address: String::new(),
            share_ratio: 0.0,
            txdescription: txdescription.to_string(),
            daddress: String::new(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawShare {
    address: Option<String>,
    #[serde(alias = "shareRatio", alias = "shareratio")]
    share_ratio: Option<f64>,
    txdescription: Option<String>,
    #[serde(alias = "Daddress")]
    daddress: Option<String>,
}

fn share_section<'de, D>(deserializer: D, txdescription: &str) -> Result<PayoutShareConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawShare::deserialize(deserializer)?;
    let base = PayoutShareConfig::with_description(txdescription);
    Ok(PayoutShareConfig {
        address: raw.address.unwrap_or(base.address),
        share_ratio: raw.share_ratio.unwrap_or(base.share_ratio),
        txdescription: raw.txdescription.unwrap_or(base.txdescription),
        daddress: raw.daddress.unwrap_or(base.daddress),
    })
}

fn costs_share<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PayoutShareConfig, D::Error> {
    share_section(deserializer, COSTS_TX)
}

fn reserve_share<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PayoutShareConfig, D::Error> {
    share_section(deserializer, RESERVE_TX)
}

fn personal_share<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PayoutShareConfig, D::Error> {
    share_section(deserializer, PERSONAL_TX)
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Network name, e.g. "DEVNET" or "MAINNET".
    pub network: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: DEVNET.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn is_devnet(&self) -> bool {
        self.network.eq_ignore_ascii_case(DEVNET)
    }
}

pub const DEVNET: &str = "DEVNET";

/// Listener and backing store settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind IP address.
    pub address: String,

    /// Bind port.
    pub port: u16,

    /// Payment database filename used by the payment engine.
    pub dbfilename: String,

    /// Node endpoint used by the payment engine.
    pub nodeip: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 54000,
            dbfilename: "payment.db".to_string(),
            nodeip: String::new(),
        }
    }
}

/// Web frontend toggle and social links.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct WebConfig {
    pub frontend: bool,
    pub email: String,
    pub slack: String,
    pub reddit: String,
    pub arkforum: String,
    /// Address whose transactions carry the delegate's news feed.
    pub arknewsaddress: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Prometheus listener address; empty disables the exporter.
    pub metrics_address: String,
}

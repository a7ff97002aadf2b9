//! Dotted-key view over the configuration snapshot.
//!
//! `voters.share_ratio`, `server.port`, ... resolve against the serialized
//! form of [`GatewayConfig`], so the typed schema stays the single source of
//! truth for both names and defaults.

use std::fmt;

use crate::config::schema::GatewayConfig;

/// Every key the gateway and its collaborators read.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "delegate.address",
    "delegate.pubkey",
    "delegate.daddress",
    "delegate.dpubkey",
    "voters.share_ratio",
    "voters.txdescription",
    "voters.fidelity",
    "voters.fidelity_limit",
    "voters.min_amount",
    "voters.deduct_tx_fees",
    "voters.blocklist",
    "voters.cap_balance",
    "voters.balance_cap_amount",
    "voters.whitelist",
    "costs.address",
    "costs.share_ratio",
    "costs.txdescription",
    "costs.daddress",
    "reserve.address",
    "reserve.share_ratio",
    "reserve.txdescription",
    "reserve.daddress",
    "personal.address",
    "personal.share_ratio",
    "personal.txdescription",
    "personal.daddress",
    "client.network",
    "server.address",
    "server.port",
    "server.dbfilename",
    "server.nodeip",
    "web.frontend",
    "web.email",
    "web.slack",
    "web.reddit",
    "web.arkforum",
    "web.arknewsaddress",
    "observability.metrics_address",
];

/// A scalar configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl GatewayConfig {
    /// Look up a scalar by dotted key. Returns `None` for unknown keys and
    /// for keys naming a whole section.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        let root = toml::Value::try_from(self).ok()?;
        let mut current = &root;
        for segment in key.split('.') {
            current = current.as_table()?.get(segment)?;
        }
        match current {
            toml::Value::String(s) => Some(ConfigValue::String(s.clone())),
            toml::Value::Integer(i) => Some(ConfigValue::Integer(*i)),
            toml::Value::Float(x) => Some(ConfigValue::Float(*x)),
            toml::Value::Boolean(b) => Some(ConfigValue::Boolean(*b)),
            _ => None,
        }
    }
}

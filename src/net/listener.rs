//! TCP listener binding.
//!
//! # Responsibilities
//! - Turn `server.address` + `server.port` into a socket address
//! - Bind it once; failure is fatal and never retried on another port

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServerConfig;

/// Error type for listener binding.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("invalid bind address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {address}: {source}")]
    Io {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Socket address the gateway listens on.
pub fn bind_address(config: &ServerConfig) -> Result<SocketAddr, BindError> {
    let ip: IpAddr = config
        .address
        .trim()
        .parse()
        .map_err(|source| BindError::InvalidAddress {
            address: config.address.clone(),
            source,
        })?;
    Ok(SocketAddr::new(ip, config.port))
}

/// Bind the configured address.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, BindError> {
    let address = bind_address(config)?;
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| BindError::Io { address, source })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| BindError::Io { address, source })?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address() {
        let addr = bind_address(&ServerConfig::default()).unwrap();
        assert_eq!(addr, "0.0.0.0:54000".parse().unwrap());
    }

    #[test]
    fn test_ipv6_bind_address() {
        let config = ServerConfig {
            address: "::1".into(),
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(bind_address(&config).unwrap(), "[::1]:8080".parse().unwrap());
    }

    #[test]
    fn test_invalid_address() {
        let config = ServerConfig {
            address: "not-an-ip".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            bind_address(&config),
            Err(BindError::InvalidAddress { .. })
        ));
    }

    #[tokio::test]
    async fn test_port_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServerConfig {
            address: "127.0.0.1".into(),
            port: taken.local_addr().unwrap().port(),
            ..ServerConfig::default()
        };
        assert!(matches!(bind(&config).await, Err(BindError::Io { .. })));
    }
}

//! Configuration validation.
//!
//! Serde handles syntax; this pass checks value ranges. All errors are
//! collected rather than stopping at the first.

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// Tolerance for the share ratio sum.
const RATIO_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{section}.share_ratio must be within [0, 1], got {value}")]
    ShareRatioOutOfRange { section: &'static str, value: f64 },

    #[error("share ratios sum to {0}, which exceeds 1.0")]
    ShareRatioSum(f64),

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("client.network must not be empty")]
    EmptyNetwork,
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut ratios = vec![("voters", config.voters.share_ratio)];
    ratios.extend(
        config
            .payout_shares()
            .iter()
            .map(|(section, share)| (*section, share.share_ratio)),
    );

    for (section, value) in &ratios {
        if !(0.0..=1.0).contains(value) {
            errors.push(ValidationError::ShareRatioOutOfRange {
                section: *section,
                value: *value,
            });
        }
    }

    let sum: f64 = ratios.iter().map(|(_, v)| v).sum();
    if sum > 1.0 + RATIO_EPSILON {
        errors.push(ValidationError::ShareRatioSum(sum));
    }

    if config.voters.min_amount < 0.0 {
        errors.push(ValidationError::Negative {
            field: "voters.min_amount",
            value: config.voters.min_amount,
        });
    }
    if config.voters.balance_cap_amount < 0.0 {
        errors.push(ValidationError::Negative {
            field: "voters.balance_cap_amount",
            value: config.voters.balance_cap_amount,
        });
    }

    if config.client.network.trim().is_empty() {
        errors.push(ValidationError::EmptyNetwork);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_full_split_is_valid() {
        let mut config = GatewayConfig::default();
        config.voters.share_ratio = 0.7;
        config.costs.share_ratio = 0.1;
        config.reserve.share_ratio = 0.1;
        config.personal.share_ratio = 0.1;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.voters.share_ratio = 1.5;
        config.costs.share_ratio = -0.1;
        config.voters.min_amount = -1.0;
        config.client.network = " ".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::ShareRatioOutOfRange {
            section: "voters",
            value: 1.5
        }));
        assert!(errors.contains(&ValidationError::ShareRatioOutOfRange {
            section: "costs",
            value: -0.1
        }));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::ShareRatioSum(_))));
        assert!(errors.contains(&ValidationError::EmptyNetwork));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_sum_over_one() {
        let mut config = GatewayConfig::default();
        config.voters.share_ratio = 0.9;
        config.personal.share_ratio = 0.2;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::ShareRatioSum(_)));
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{PrivacyError, PrivacyResult};
use crate::models::Mode;

/// Privacy pipeline configuration. Read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Privacy parameter. Laplace noise scale is `1/epsilon` (halved for
    /// sentiment-bearing tokens). Must be positive.
    pub epsilon: f64,
    /// Per-token drop probability, in `[0, 1)`.
    pub token_drop_rate: f64,
    /// Default stage selection for callers that don't pass a mode per call.
    pub mode: Mode,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            epsilon: defaults::DEFAULT_EPSILON,
            token_drop_rate: defaults::DEFAULT_TOKEN_DROP_RATE,
            mode: Mode::Combined,
        }
    }
}

impl PrivacyConfig {
    /// Validate numeric ranges. NaN fails both checks.
    pub fn validate(&self) -> PrivacyResult<()> {
        if !(self.epsilon > 0.0) {
            return Err(PrivacyError::InvalidConfig {
                reason: format!("epsilon must be positive, got {}", self.epsilon),
            });
        }
        if !(self.token_drop_rate >= 0.0 && self.token_drop_rate < 1.0) {
            return Err(PrivacyError::InvalidConfig {
                reason: format!(
                    "token_drop_rate must be in [0, 1), got {}",
                    self.token_drop_rate
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PrivacyConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_epsilon_rejected() {
        let config = PrivacyConfig {
            epsilon: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PrivacyError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn nan_epsilon_rejected() {
        let config = PrivacyConfig {
            epsilon: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn drop_rate_of_one_rejected() {
        let config = PrivacyConfig {
            token_drop_rate: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let config: PrivacyConfig = serde_json::from_str(r#"{"epsilon": 0.5}"#).unwrap();
        assert_eq!(config.epsilon, 0.5);
        assert_eq!(config.token_drop_rate, defaults::DEFAULT_TOKEN_DROP_RATE);
        assert_eq!(config.mode, Mode::Combined);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PrivacyError;

/// Which perturbation stages run after the mandatory redaction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Redact, then drop tokens at random.
    TokenDropping,
    /// Redact, then perturb per-sentence word frequencies.
    DifferentialPrivacy,
    /// Redact, drop tokens, then perturb frequencies of the survivors.
    Combined,
}

impl Mode {
    /// The wire name used at the request boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::TokenDropping => "token_dropping",
            Mode::DifferentialPrivacy => "differential_privacy",
            Mode::Combined => "combined",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = PrivacyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "token_dropping" => Ok(Mode::TokenDropping),
            "differential_privacy" => Ok(Mode::DifferentialPrivacy),
            "combined" => Ok(Mode::Combined),
            other => Err(PrivacyError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

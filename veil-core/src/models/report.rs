use serde::{Deserialize, Serialize};

use super::Mode;

/// One analysis request: raw text plus the wire name of the requested mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    pub mode: String,
}

/// A text together with the sentiment the model assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredText {
    pub text: String,
    pub label: String,
    pub score: f64,
}

/// Before/after comparison produced for one request: the original text and
/// its privacy-preserved counterpart, each scored independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub original: ScoredText,
    pub preserved: ScoredText,
    pub mode: Mode,
}

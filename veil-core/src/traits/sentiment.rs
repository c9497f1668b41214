use serde::{Deserialize, Serialize};

use crate::errors::SentimentResult;

/// A sentiment classification with the model's confidence for that label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: String,
    /// Confidence for `label`, in `[0, 1]`.
    pub score: f64,
}

/// External sentiment model.
///
/// The pipeline treats this as an opaque oracle, invoked once on the
/// original text and once on the transformed text; it takes no part in the
/// transformation itself.
pub trait ISentimentModel: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentResult<Sentiment>;
}

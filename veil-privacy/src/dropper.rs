//! Stochastic per-token retention filter.

use tracing::debug;
use veil_core::traits::NoiseSource;
use veil_core::vocabulary::SentimentVocabulary;

/// Drops whitespace-delimited tokens at random, except sentiment-bearing
/// ones, which are always retained.
#[derive(Debug, Clone)]
pub struct TokenDropper {
    vocabulary: SentimentVocabulary,
}

impl TokenDropper {
    pub fn new(vocabulary: SentimentVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Drop each token whose uniform draw is `<= rate`, unless its
    /// case-folded form is in the vocabulary. One draw is consumed per
    /// token, vocabulary members included.
    ///
    /// Survivors are re-joined with single spaces; original whitespace
    /// widths are not preserved. Dropping every token yields an empty
    /// string, which is valid output.
    pub fn drop_tokens(&self, text: &str, rate: f64, noise: &mut dyn NoiseSource) -> String {
        let kept: Vec<&str> = text
            .split_whitespace()
            .filter(|token| noise.next_uniform() > rate || self.vocabulary.contains(token))
            .collect();
        debug!(kept = kept.len(), rate, "token dropping complete");
        kept.join(" ")
    }
}

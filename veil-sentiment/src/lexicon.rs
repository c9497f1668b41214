//! Word-list sentiment scoring.

use std::collections::HashSet;

use veil_core::constants::{LABEL_NEGATIVE, LABEL_NEUTRAL, LABEL_POSITIVE};
use veil_core::errors::SentimentResult;
use veil_core::traits::{ISentimentModel, Sentiment};

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "excited",
    "relieved",
    "hopeful",
    "comfortable",
    "appreciated",
    "hope",
    "optimism",
    "positive",
    "good",
    "great",
    "wonderful",
    "glad",
    "pleased",
    "calm",
    "confident",
    "grateful",
    "love",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "worried",
    "anxious",
    "stressed",
    "concerned",
    "fear",
    "apprehension",
    "challenging",
    "negative",
    "bad",
    "terrible",
    "awful",
    "upset",
    "afraid",
    "miserable",
    "annoyed",
    "hate",
];

/// Lexicon scorer standing in for the external transformer model.
///
/// Counts positive and negative word hits over case-folded, punctuation-
/// stripped tokens. The label is the majority class (`POSITIVE` on a tie)
/// and the score is the hit ratio for that label, floored at 0.5 so it
/// reads as the confidence of the emitted label. Text with no hits at all
/// is `NEUTRAL` at 0.5.
pub struct LexiconModel {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl LexiconModel {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ISentimentModel for LexiconModel {
    fn analyze(&self, text: &str) -> SentimentResult<Sentiment> {
        let mut positive_hits = 0usize;
        let mut negative_hits = 0usize;

        for token in text.split_whitespace() {
            let word: String = token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if self.positive.contains(word.as_str()) {
                positive_hits += 1;
            } else if self.negative.contains(word.as_str()) {
                negative_hits += 1;
            }
        }

        let total = positive_hits + negative_hits;
        if total == 0 {
            return Ok(Sentiment {
                label: LABEL_NEUTRAL.to_string(),
                score: 0.5,
            });
        }

        let (label, hits) = if positive_hits >= negative_hits {
            (LABEL_POSITIVE, positive_hits)
        } else {
            (LABEL_NEGATIVE, negative_hits)
        };

        Ok(Sentiment {
            label: label.to_string(),
            score: (hits as f64 / total as f64).max(0.5),
        })
    }
}

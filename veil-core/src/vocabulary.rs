//! Sentiment-bearing vocabulary.
//!
//! Tokens whose case-folded form appears here are immune to random dropping
//! and receive half the Laplace noise scale during frequency rewriting.

use std::collections::HashSet;

/// The standard word list, matching the emotional-state vocabulary the
/// pipeline was calibrated against.
const STANDARD_WORDS: &[&str] = &[
    "happy",
    "sad",
    "angry",
    "excited",
    "worried",
    "relieved",
    "anxious",
    "hopeful",
    "stressed",
    "comfortable",
    "concerned",
    "appreciated",
    "fear",
    "hope",
    "optimism",
    "apprehension",
    "challenging",
    "positive",
    "negative",
    "good",
    "bad",
    "great",
    "terrible",
];

/// Fixed, case-insensitive set of sentiment-bearing words. Never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct SentimentVocabulary {
    words: HashSet<String>,
}

impl SentimentVocabulary {
    /// The standard vocabulary.
    pub fn standard() -> Self {
        Self::from_words(STANDARD_WORDS.iter().copied())
    }

    /// Build a vocabulary from arbitrary words. Entries are case-folded once
    /// here so membership probes stay cheap.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for SentimentVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

//! Sentence-level word-frequency perturbation under Laplace noise.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use veil_core::traits::NoiseSource;
use veil_core::vocabulary::SentimentVocabulary;

/// Sentence boundary: terminal punctuation followed by one-or-more spaces.
/// The punctuation stays with the preceding sentence's last token.
static SENTENCE_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[.!?] +").ok());

/// Perturbs per-sentence word counts with calibrated Laplace noise, then
/// reconstructs each sentence to match the perturbed counts.
///
/// Sentiment-bearing tokens get half the noise scale, since their identity
/// matters more for the before/after comparison. Reconstruction only walks
/// the original token sequence, so upward noise has no visible effect; only
/// downward noise removes occurrences.
#[derive(Debug, Clone)]
pub struct NoisyFrequencyRewriter {
    vocabulary: SentimentVocabulary,
}

impl NoisyFrequencyRewriter {
    pub fn new(vocabulary: SentimentVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Rewrite every sentence of `text` under noise scale `1/epsilon`
    /// (halved for vocabulary tokens). Sentences are re-joined with single
    /// spaces; inter-sentence spacing beyond that is not preserved.
    pub fn rewrite(&self, text: &str, epsilon: f64, noise: &mut dyn NoiseSource) -> String {
        let sentences = split_sentences(text);
        let rewritten: Vec<String> = sentences
            .iter()
            .map(|sentence| self.rewrite_sentence(sentence, epsilon, noise))
            .collect();
        debug!(sentences = rewritten.len(), epsilon, "frequency rewrite complete");
        rewritten.join(" ")
    }

    fn rewrite_sentence(
        &self,
        sentence: &str,
        epsilon: f64,
        noise: &mut dyn NoiseSource,
    ) -> String {
        let words: Vec<&str> = sentence.split_whitespace().collect();

        // Case-sensitive occurrence counts, with first-appearance order kept
        // so noise draws are consumed deterministically under a seeded source.
        let mut counts: HashMap<&str, i64> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for &word in &words {
            let entry = counts.entry(word).or_insert(0);
            if *entry == 0 {
                order.push(word);
            }
            *entry += 1;
        }

        // One Laplace sample per distinct token; round, clamp at zero.
        let mut remaining: HashMap<&str, i64> = HashMap::with_capacity(order.len());
        for word in order {
            let scale = if self.vocabulary.contains(word) {
                0.5 / epsilon
            } else {
                1.0 / epsilon
            };
            let noisy = counts[word] as f64 + noise.next_laplace(scale);
            remaining.insert(word, (noisy.round() as i64).max(0));
        }

        // Walk the original order, emitting while the perturbed budget
        // lasts. Earlier occurrences take priority; nothing is fabricated.
        let mut kept: Vec<&str> = Vec::with_capacity(words.len());
        for word in words {
            if let Some(budget) = remaining.get_mut(word) {
                if *budget > 0 {
                    kept.push(word);
                    *budget -= 1;
                }
            }
        }
        kept.join(" ")
    }
}

/// Split on `[.!?]` followed by one-or-more spaces, keeping the punctuation
/// with the preceding sentence. Mirrors lookbehind-style splitting without
/// lookbehind support.
fn split_sentences(text: &str) -> Vec<&str> {
    let Some(re) = SENTENCE_BOUNDARY.as_ref() else {
        return vec![text];
    };
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in re.find_iter(text) {
        // The boundary's first byte is the terminal punctuation.
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

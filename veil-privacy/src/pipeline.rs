//! Fixed-order orchestration of the privacy stages.

use std::str::FromStr;

use tracing::{debug, info};
use veil_core::config::PrivacyConfig;
use veil_core::errors::PrivacyResult;
use veil_core::models::Mode;
use veil_core::traits::NoiseSource;
use veil_core::vocabulary::SentimentVocabulary;

use crate::dropper::TokenDropper;
use crate::redactor::EntityRedactor;
use crate::rewriter::NoisyFrequencyRewriter;

/// Composes redaction, token dropping, and frequency rewriting.
///
/// Redaction always runs first; the mode selects what follows. In combined
/// mode the order is drop-then-perturb: surviving tokens have their
/// frequencies perturbed. Configuration is read-only after construction.
pub struct PrivacyPipeline {
    config: PrivacyConfig,
    redactor: EntityRedactor,
    dropper: TokenDropper,
    rewriter: NoisyFrequencyRewriter,
}

impl PrivacyPipeline {
    /// Build a pipeline over the standard sentiment vocabulary.
    pub fn new(config: PrivacyConfig) -> PrivacyResult<Self> {
        Self::with_vocabulary(config, SentimentVocabulary::standard())
    }

    /// Build a pipeline over a caller-supplied vocabulary.
    pub fn with_vocabulary(
        config: PrivacyConfig,
        vocabulary: SentimentVocabulary,
    ) -> PrivacyResult<Self> {
        config.validate()?;
        Ok(Self {
            redactor: EntityRedactor::new(),
            dropper: TokenDropper::new(vocabulary.clone()),
            rewriter: NoisyFrequencyRewriter::new(vocabulary),
            config,
        })
    }

    /// Apply the pipeline for a mode given by its wire name. An unknown
    /// name fails with [`PrivacyError::InvalidMode`] before any stage runs.
    ///
    /// [`PrivacyError::InvalidMode`]: veil_core::errors::PrivacyError
    pub fn apply(
        &self,
        text: &str,
        mode: &str,
        noise: &mut dyn NoiseSource,
    ) -> PrivacyResult<String> {
        let mode = Mode::from_str(mode)?;
        Ok(self.apply_mode(text, mode, noise))
    }

    /// Apply the pipeline for an already-parsed mode. Infallible: every
    /// stage accepts any text, including empty.
    pub fn apply_mode(&self, text: &str, mode: Mode, noise: &mut dyn NoiseSource) -> String {
        let redacted = self.redactor.redact(text);
        debug!(%mode, "entity redaction complete");

        let transformed = match mode {
            Mode::TokenDropping => {
                self.dropper
                    .drop_tokens(&redacted, self.config.token_drop_rate, noise)
            }
            Mode::DifferentialPrivacy => {
                self.rewriter.rewrite(&redacted, self.config.epsilon, noise)
            }
            Mode::Combined => {
                let dropped =
                    self.dropper
                        .drop_tokens(&redacted, self.config.token_drop_rate, noise);
                self.rewriter.rewrite(&dropped, self.config.epsilon, noise)
            }
        };

        info!(
            %mode,
            in_len = text.len(),
            out_len = transformed.len(),
            "privacy pipeline complete"
        );
        transformed
    }

    /// Apply the pipeline with the mode from the configuration.
    pub fn apply_default(&self, text: &str, noise: &mut dyn NoiseSource) -> String {
        self.apply_mode(text, self.config.mode, noise)
    }

    pub fn config(&self) -> &PrivacyConfig {
        &self.config
    }
}

//! Before/after sentiment comparison over the privacy pipeline.

use std::str::FromStr;

use tracing::info;
use veil_core::errors::VeilResult;
use veil_core::models::{AnalysisReport, AnalysisRequest, Mode, ScoredText};
use veil_core::traits::{ISentimentModel, NoiseSource};
use veil_privacy::PrivacyPipeline;

/// Scores a text before and after privacy transformation through an
/// external sentiment model, producing the request-boundary report.
///
/// The model is an opaque oracle: it is invoked once on the original text
/// and once on the transformed text, and takes no part in the
/// transformation.
pub struct Comparator<'a> {
    model: &'a dyn ISentimentModel,
    pipeline: &'a PrivacyPipeline,
}

impl<'a> Comparator<'a> {
    pub fn new(model: &'a dyn ISentimentModel, pipeline: &'a PrivacyPipeline) -> Self {
        Self { model, pipeline }
    }

    /// Run one request: transform under the requested mode, score both
    /// texts independently, and return the comparison report. An unknown
    /// mode name fails before any transformation or scoring happens.
    pub fn analyze(
        &self,
        text: &str,
        mode: &str,
        noise: &mut dyn NoiseSource,
    ) -> VeilResult<AnalysisReport> {
        let mode = Mode::from_str(mode)?;
        let preserved_text = self.pipeline.apply_mode(text, mode, noise);

        let original = self.score(text)?;
        let preserved = self.score(&preserved_text)?;

        info!(
            %mode,
            original = %original.label,
            preserved = %preserved.label,
            "analysis complete"
        );

        Ok(AnalysisReport {
            original,
            preserved,
            mode,
        })
    }

    /// Convenience wrapper over [`analyze`](Self::analyze) for a request
    /// value from the boundary contract.
    pub fn analyze_request(
        &self,
        request: &AnalysisRequest,
        noise: &mut dyn NoiseSource,
    ) -> VeilResult<AnalysisReport> {
        self.analyze(&request.text, &request.mode, noise)
    }

    fn score(&self, text: &str) -> VeilResult<ScoredText> {
        let sentiment = self.model.analyze(text)?;
        Ok(ScoredText {
            text: text.to_string(),
            label: sentiment.label,
            score: sentiment.score,
        })
    }
}

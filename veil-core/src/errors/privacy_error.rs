/// Errors from the privacy transformation pipeline.
///
/// Mode validation is the only failure the pipeline surfaces; empty input,
/// absent matches, and negative noisy counts are all handled in place.
#[derive(Debug, thiserror::Error)]
pub enum PrivacyError {
    #[error("invalid privacy mode: {mode}")]
    InvalidMode { mode: String },

    #[error("invalid privacy config: {reason}")]
    InvalidConfig { reason: String },
}

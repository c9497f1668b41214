/// Errors from the external sentiment model collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("sentiment model failure: {message}")]
    ModelFailure { message: String },
}

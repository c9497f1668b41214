//! Error types, one enum per concern, with an umbrella error for callers
//! that cross crate boundaries.

mod privacy_error;
mod sentiment_error;

pub use privacy_error::PrivacyError;
pub use sentiment_error::SentimentError;

/// Umbrella error for operations that span privacy and sentiment concerns.
#[derive(Debug, thiserror::Error)]
pub enum VeilError {
    #[error(transparent)]
    Privacy(#[from] PrivacyError),

    #[error(transparent)]
    Sentiment(#[from] SentimentError),
}

pub type VeilResult<T> = Result<T, VeilError>;
pub type PrivacyResult<T> = Result<T, PrivacyError>;
pub type SentimentResult<T> = Result<T, SentimentError>;

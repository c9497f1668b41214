//! # veil-core
//!
//! Foundation crate for the veil privacy pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod vocabulary;

// Re-export the most commonly used types at the crate root.
pub use config::PrivacyConfig;
pub use errors::{PrivacyError, PrivacyResult, SentimentError, SentimentResult, VeilError, VeilResult};
pub use models::{AnalysisReport, AnalysisRequest, Mode, ScoredText};
pub use traits::{ISentimentModel, NoiseSource, Sentiment, ThreadNoise};
pub use vocabulary::SentimentVocabulary;

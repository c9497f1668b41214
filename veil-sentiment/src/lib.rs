//! # veil-sentiment
//!
//! Sentiment side of the workspace: a lexicon-backed [`ISentimentModel`]
//! implementation standing in for the external model, and the [`Comparator`]
//! service that scores a text before and after privacy transformation.
//!
//! [`ISentimentModel`]: veil_core::traits::ISentimentModel

pub mod comparison;
pub mod lexicon;

pub use comparison::Comparator;
pub use lexicon::LexiconModel;

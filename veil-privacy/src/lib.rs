//! # veil-privacy
//!
//! Privacy-preserving text transformation: pattern-based entity redaction,
//! stochastic token dropping, and sentence-level word-frequency perturbation
//! under calibrated Laplace noise. [`PrivacyPipeline`] composes the stages
//! in their fixed order; redaction always runs first.

pub mod dropper;
pub mod patterns;
pub mod pipeline;
pub mod redactor;
pub mod rewriter;

pub use dropper::TokenDropper;
pub use pipeline::PrivacyPipeline;
pub use redactor::EntityRedactor;
pub use rewriter::NoisyFrequencyRewriter;

//! Default configuration values.

/// Privacy parameter (inverse noise scale). Smaller means more noise.
pub const DEFAULT_EPSILON: f64 = 2.0;

/// Probability that a non-sentiment token is dropped.
pub const DEFAULT_TOKEN_DROP_RATE: f64 = 0.15;

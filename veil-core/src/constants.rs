//! Constants shared across the workspace.

/// Label emitted for positive classifications.
pub const LABEL_POSITIVE: &str = "POSITIVE";

/// Label emitted for negative classifications.
pub const LABEL_NEGATIVE: &str = "NEGATIVE";

/// Label emitted when a text carries no scorable sentiment signal.
pub const LABEL_NEUTRAL: &str = "NEUTRAL";

//! Pattern-based detection and masking of sensitive spans.

use tracing::debug;

use crate::patterns::{self, RawMatch, Redaction};

/// Replaces sensitive spans (names, ages, street addresses, monetary
/// amounts) with bracketed `[CATEGORY]` placeholders.
///
/// Matching is purely lexical; there is no semantic entity resolution.
/// Redaction never fails and is idempotent: no rule matches digits-free
/// bracketed upper-case placeholders, so a second pass is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityRedactor;

impl EntityRedactor {
    pub fn new() -> Self {
        Self
    }

    /// Replace every sensitive span with its placeholder. Text without
    /// matches is returned unchanged.
    pub fn redact(&self, text: &str) -> String {
        let (redacted, _) = self.redact_with_matches(text);
        redacted
    }

    /// Like [`redact`](Self::redact), also returning the applied redactions
    /// for auditing.
    pub fn redact_with_matches(&self, text: &str) -> (String, Vec<Redaction>) {
        let matches = patterns::scan_all(text);
        if matches.is_empty() {
            return (text.to_string(), Vec::new());
        }
        debug!(spans = matches.len(), "redacting sensitive spans");
        let redacted = apply_replacements(text, &matches);
        (redacted, patterns::to_redactions(&matches))
    }
}

/// Apply placeholder replacements. Matches must be sorted descending by
/// start position so replacements don't shift the offsets still to be
/// applied, and must be non-overlapping.
fn apply_replacements(text: &str, matches: &[RawMatch]) -> String {
    let mut result = text.to_string();
    for m in matches {
        result.replace_range(m.start..m.end, m.placeholder);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_text_is_unchanged() {
        let redactor = EntityRedactor::new();
        let text = "the weather was mild all week";
        assert_eq!(redactor.redact(text), text);
    }

    #[test]
    fn empty_text_is_unchanged() {
        assert_eq!(EntityRedactor::new().redact(""), "");
    }

    #[test]
    fn reports_applied_redactions_in_text_order() {
        let redactor = EntityRedactor::new();
        let (redacted, redactions) =
            redactor.redact_with_matches("John Doe paid $500 on Baker Street");
        assert_eq!(redacted, "[NAME] paid [MONEY] on [LOCATION]");
        let rules: Vec<&str> = redactions.iter().map(|r| r.rule).collect();
        assert_eq!(rules, ["name", "money", "location"]);
    }
}

pub mod entities;

use tracing::debug;

/// A rule match before overlap resolution.
#[derive(Debug, Clone)]
pub struct RawMatch {
    pub rule: &'static str,
    pub placeholder: &'static str,
    pub start: usize,
    pub end: usize,
    pub specificity: f64,
}

/// A redaction applied to the text, reported for auditing.
#[derive(Debug, Clone, PartialEq)]
pub struct Redaction {
    pub rule: &'static str,
    pub placeholder: &'static str,
    pub start: usize,
    pub end: usize,
}

/// Run every redaction rule in its documented order (name, age, location,
/// money) and return the surviving matches sorted by start position
/// (descending) for safe end-to-start replacement.
pub fn scan_all(text: &str) -> Vec<RawMatch> {
    let mut matches = Vec::new();

    for rule in entities::all_rules() {
        let Some(re) = rule.regex.as_ref() else {
            debug!(rule = rule.name, "skipping rule: regex failed to compile");
            continue;
        };
        for m in re.find_iter(text) {
            matches.push(RawMatch {
                rule: rule.name,
                placeholder: rule.placeholder,
                start: m.start(),
                end: m.end(),
                specificity: rule.specificity,
            });
        }
    }

    // Sort by start position descending so replacement can run from the end
    // without invalidating earlier offsets. The sort is stable, so equal
    // starts keep rule-application order.
    matches.sort_by(|a, b| b.start.cmp(&a.start));

    dedup_overlapping(&mut matches);

    matches
}

/// Remove overlapping matches. The longer span wins; equal-length spans fall
/// to the rule with higher specificity, which is how a street-suffix span is
/// claimed by `location` rather than the generic `name` rule.
fn dedup_overlapping(matches: &mut Vec<RawMatch>) {
    let mut i = 0;
    while i + 1 < matches.len() {
        let current = &matches[i];
        let next = &matches[i + 1];
        let current_len = current.end - current.start;
        let next_len = next.end - next.start;

        // Sorted desc by start, so next.start <= current.start.
        if next.end > current.start {
            let next_wins = next_len > current_len
                || (next_len == current_len && next.specificity > current.specificity);
            if next_wins {
                matches.remove(i);
                // A long span can swallow several shorter ones; recheck the
                // previous pair against the promoted match.
                i = i.saturating_sub(1);
            } else {
                matches.remove(i + 1);
            }
        } else {
            i += 1;
        }
    }
}

/// Convert surviving matches to audit records, re-ordered by start position.
pub fn to_redactions(matches: &[RawMatch]) -> Vec<Redaction> {
    let mut redactions: Vec<Redaction> = matches
        .iter()
        .map(|m| Redaction {
            rule: m.rule,
            placeholder: m.placeholder,
            start: m.start,
            end: m.end,
        })
        .collect();
    redactions.sort_by_key(|r| r.start);
    redactions
}

use regex::Regex;
use std::sync::LazyLock;

/// A compiled redaction rule for one sensitive-entity category.
pub struct RedactionRule {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub placeholder: &'static str,
    /// Breaks equal-length overlap ties; higher wins.
    pub specificity: f64,
}

macro_rules! entity_rule {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Personal names (two or three capitalized words) ───────────────────────
entity_rule!(RE_NAME, r"\b[A-Z][a-z]+ (?:[A-Z][a-z]+ )?[A-Z][a-z]+\b");

// ── Ages (bare 1-2 digit numbers, optionally "-year-old") ─────────────────
entity_rule!(RE_AGE, r"\b\d{1,2}(?:-year-old)?\b");

// ── Street addresses (capitalized words ending in a street-type word) ─────
entity_rule!(
    RE_LOCATION,
    r"\b[A-Z][a-z]+ (?:[A-Z][a-z]+ )?(?:Street|Avenue|Road|Place)\b"
);

// ── Monetary amounts ───────────────────────────────────────────────────────
entity_rule!(RE_MONEY, r"\$\d+(?:,\d{3})*(?:\.\d{2})?");

/// All rules in their documented application order: name, age, location,
/// money. The order is load-bearing for overlap resolution bookkeeping and
/// must not change.
///
/// Specificity decides equal-length overlaps: a capitalized span ending in a
/// street-type word matches both `name` and `location`, and belongs to
/// `location`; a bare number inside a monetary amount belongs to `money`.
pub fn all_rules() -> Vec<RedactionRule> {
    vec![
        RedactionRule {
            name: "name",
            regex: &RE_NAME,
            placeholder: "[NAME]",
            specificity: 0.50,
        },
        RedactionRule {
            name: "age",
            regex: &RE_AGE,
            placeholder: "[AGE]",
            specificity: 0.70,
        },
        RedactionRule {
            name: "location",
            regex: &RE_LOCATION,
            placeholder: "[LOCATION]",
            specificity: 0.85,
        },
        RedactionRule {
            name: "money",
            regex: &RE_MONEY,
            placeholder: "[MONEY]",
            specificity: 0.95,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_compile() {
        for rule in all_rules() {
            assert!(
                rule.regex.is_some(),
                "rule '{}' failed to compile",
                rule.name
            );
        }
    }

    #[test]
    fn rule_order_is_documented_order() {
        let names: Vec<&str> = all_rules().iter().map(|r| r.name).collect();
        assert_eq!(names, ["name", "age", "location", "money"]);
    }

    #[test]
    fn age_rule_ignores_three_digit_numbers() {
        let re = RE_AGE.as_ref().unwrap();
        assert!(re.find("room 500").is_none());
        assert_eq!(re.find("a 34-year-old").unwrap().as_str(), "34-year-old");
    }

    #[test]
    fn money_rule_spans_separators_and_cents() {
        let re = RE_MONEY.as_ref().unwrap();
        assert_eq!(re.find("$1,250,000.50 cash").unwrap().as_str(), "$1,250,000.50");
        assert_eq!(re.find("owes $500 now").unwrap().as_str(), "$500");
    }
}

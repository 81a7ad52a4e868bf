//! Single replacement rule and the fold that runs a rule list.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Literal substring replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub from: String,
    pub to: String,
    /// Words that show the sound, for documentation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Rule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            example: None,
        }
    }

    /// Replace every non-overlapping occurrence of `from`, left to right.
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.from, &self.to)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Run `rules` in order; rule *n* sees the output of rules `0..n`.
pub fn apply_rules<'a, I>(rules: I, text: &str) -> String
where
    I: IntoIterator<Item = &'a Rule>,
{
    rules.into_iter().fold(text.to_string(), |current, rule| {
        if current.contains(rule.from.as_str()) {
            trace!(rule = %rule, "rule matched");
            rule.apply(&current)
        } else {
            current
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_all_occurrences() {
        let rule = Rule::new("sh", "ʃ");
        assert_eq!(rule.apply("shush"), "ʃuʃ");
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        let rule = Rule::new("aa", "b");
        assert_eq!(rule.apply("aaa"), "ba");
    }

    #[test]
    fn test_later_rules_see_earlier_output() {
        let rules = [Rule::new("a", "b"), Rule::new("b", "c")];
        assert_eq!(apply_rules(&rules, "ab"), "cc");

        let reversed = [Rule::new("b", "c"), Rule::new("a", "b")];
        assert_eq!(apply_rules(&reversed, "ab"), "bc");
    }

    #[test]
    fn test_no_match_returns_input() {
        let rules = [Rule::new("zh", "ʒ")];
        assert_eq!(apply_rules(&rules, "kæt"), "kæt");
        assert_eq!(apply_rules(&rules, ""), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rule::new("ō", "oʊ").to_string(), "ō → oʊ");
    }
}

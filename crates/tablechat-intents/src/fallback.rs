//! Catch-all rule: matches any query, including the empty string.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tablechat_core::{Dataset, IntentRule, FALLBACK_RESPONSE};

const RULE_NAME: &str = "Fallback";

// (?s) so queries containing newlines still match in full.
static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^.*$").expect("fallback pattern"));

/// Guarantees total coverage of the rule table; must be registered last.
pub struct Fallback;

impl IntentRule for Fallback {
    fn name(&self) -> &str {
        RULE_NAME
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn answer(&self, _captures: &Captures<'_>, _dataset: &Dataset) -> String {
        FALLBACK_RESPONSE.to_string()
    }
}

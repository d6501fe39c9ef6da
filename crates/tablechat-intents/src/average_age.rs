//! Average age rule: answers "What is the average age?".

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tablechat_core::{Dataset, IntentRule, FALLBACK_RESPONSE};

const RULE_NAME: &str = "AverageAge";

static PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^What is the average age\?$").expect("average age pattern"));

/// Reports the arithmetic mean of the Age column, fixed to one decimal place.
/// An empty table has no mean and routes to the fallback response.
pub struct AverageAge;

impl IntentRule for AverageAge {
    fn name(&self) -> &str {
        RULE_NAME
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn answer(&self, _captures: &Captures<'_>, dataset: &Dataset) -> String {
        match dataset.average_age() {
            Some(mean) => format!("The average age is {:.1} years.", mean),
            None => FALLBACK_RESPONSE.to_string(),
        }
    }
}

//! Head count rule: answers "How many people are in the data?".

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tablechat_core::{Dataset, IntentRule};

const RULE_NAME: &str = "HeadCount";

static PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^How many people are in the data\?$").expect("head count pattern"));

/// Reports the record count. An empty table is a valid answer of zero.
pub struct HeadCount;

impl IntentRule for HeadCount {
    fn name(&self) -> &str {
        RULE_NAME
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn answer(&self, _captures: &Captures<'_>, dataset: &Dataset) -> String {
        format!("There are {} people in the dataset.", dataset.len())
    }
}

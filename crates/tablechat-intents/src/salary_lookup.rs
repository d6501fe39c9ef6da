//! Salary lookup rule: answers "What is the salary of <name>?".

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tablechat_core::{Dataset, IntentRule, FALLBACK_RESPONSE};

const RULE_NAME: &str = "SalaryLookup";

static PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^What is the salary of (.*)\?$").expect("salary pattern"));

/// Looks up the captured name in the dataset (first match, exact equality).
/// A missing name is a normal, user-visible negative answer.
pub struct SalaryLookup;

impl IntentRule for SalaryLookup {
    fn name(&self) -> &str {
        RULE_NAME
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn answer(&self, captures: &Captures<'_>, dataset: &Dataset) -> String {
        let name = match captures.get(1) {
            Some(m) => m.as_str(),
            None => return FALLBACK_RESPONSE.to_string(),
        };
        match dataset.salary_of(name) {
            Some(salary) => format!("The salary of {} is {}", name, salary),
            None => format!("The salary of {} is not found in the data.", name),
        }
    }
}

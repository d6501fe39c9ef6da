//! Intent responder: ordered pattern table with first-match-wins dispatch.
//!
//! Each rule pairs a compiled recognition pattern with a handler that turns
//! the pattern's captures plus the dataset into one answer string. The table
//! is evaluated in registration order and only a match spanning the ENTIRE
//! query counts; the final registered rule is expected to be a catch-all, but
//! the table degrades to [`FALLBACK_RESPONSE`] even without one.

use crate::dataset::Dataset;
use regex::{Captures, Regex};
use std::sync::Arc;

/// Fixed response for queries no specific intent recognizes. Also returned
/// when a matched rule cannot produce an answer (absent capture, empty table).
pub const FALLBACK_RESPONSE: &str = "Sorry, I don't understand your question.";

/// Trait implemented by all recognized query intents.
pub trait IntentRule: Send + Sync {
    /// Unique rule name for discovery and logging.
    fn name(&self) -> &str;

    /// Compiled recognition pattern, matched case-sensitively against the
    /// full query text.
    fn pattern(&self) -> &Regex;

    /// Computes the answer from the pattern's captures and the dataset.
    /// Must be total: degrade to [`FALLBACK_RESPONSE`] rather than panic.
    fn answer(&self, captures: &Captures<'_>, dataset: &Dataset) -> String;
}

/// Ordered registry of intent rules. Declaration order is significant: the
/// first rule whose pattern matches the whole query wins, with no scoring.
pub struct IntentTable {
    rules: Vec<Arc<dyn IntentRule>>,
}

impl IntentTable {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule; evaluation order is registration order.
    pub fn register(&mut self, rule: Arc<dyn IntentRule>) {
        self.rules.push(rule);
    }

    /// Returns the names of all registered rules (for the status endpoint).
    pub fn rule_names(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name().to_string()).collect()
    }

    /// Classifies `query` and returns the formatted answer. Total over all
    /// string inputs: never panics, never errors. Stateless, so concurrent
    /// callers need no synchronization.
    pub fn respond(&self, query: &str, dataset: &Dataset) -> String {
        for rule in &self.rules {
            if let Some(captures) = rule.pattern().captures(query) {
                // Only a whole-query match counts, regardless of how the
                // rule anchored its pattern.
                let whole = captures
                    .get(0)
                    .map(|m| m.start() == 0 && m.end() == query.len())
                    .unwrap_or(false);
                if whole {
                    tracing::debug!(rule = rule.name(), "query matched intent rule");
                    return rule.answer(&captures, dataset);
                }
            }
        }
        tracing::debug!("query matched no intent rule");
        FALLBACK_RESPONSE.to_string()
    }
}

impl Default for IntentTable {
    fn default() -> Self {
        Self::new()
    }
}

//! Built-in intent rules for the dataset chatbot.
//!
//! Rules are registered in declaration order and the first whole-query match
//! wins, so the catch-all [`Fallback`] must stay last.

pub use tablechat_core::{IntentRule, IntentTable};

mod average_age;
mod fallback;
mod head_count;
mod salary_lookup;

pub use average_age::AverageAge;
pub use fallback::Fallback;
pub use head_count::HeadCount;
pub use salary_lookup::SalaryLookup;

use std::sync::Arc;

/// The standard rule table: salary lookup, head count, average age, then the
/// catch-all fallback.
pub fn builtin_table() -> IntentTable {
    let mut table = IntentTable::new();
    table.register(Arc::new(SalaryLookup));
    table.register(Arc::new(HeadCount));
    table.register(Arc::new(AverageAge));
    table.register(Arc::new(Fallback));
    table
}

//! tablechat-core: dataset chatbot core library (shared config, record table,
//! intent rules, and the responder).
//!
//! The responder is a stateless classify-and-respond function: the gateway and
//! any other host hand it one query string plus the immutable dataset and get
//! one answer string back.

mod dataset;
mod responder;
mod shared;

pub use dataset::{Dataset, Record};
pub use responder::{IntentRule, IntentTable, FALLBACK_RESPONSE};
pub use shared::CoreConfig;

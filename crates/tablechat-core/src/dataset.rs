//! Immutable in-memory record table the chatbot answers questions about.
//!
//! The dataset is materialized once at startup (builtin demo table or a JSON
//! file supplied by the host) and never mutated afterwards, so any number of
//! concurrent callers may read it without synchronization.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of the table. Field names serialize PascalCase to match the
/// upstream column headers (`Name`, `Age`, `Salary`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub name: String,
    pub age: u32,
    pub salary: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, age: u32, salary: f64) -> Self {
        Self {
            name: name.into(),
            age,
            salary,
        }
    }
}

/// Ordered collection of records. Name is used as a lookup key but uniqueness
/// is not enforced: lookups return the first match in table order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The static demo table the upstream chatbot ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Record::new("Alice", 25, 50000.0),
            Record::new("Bob", 30, 60000.0),
            Record::new("Charlie", 35, 70000.0),
        ])
    }

    /// Load records from a JSON file (array of PascalCase records). Used by
    /// the dataset-provider boundary at startup; the responder never touches
    /// the filesystem.
    pub fn load_json_path(
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let records: Vec<Record> = serde_json::from_str(&raw)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// First record whose name equals `name` exactly (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Salary of the first record matching `name`; `None` is a normal
    /// not-found outcome, not an error.
    pub fn salary_of(&self, name: &str) -> Option<f64> {
        self.find_by_name(name).map(|r| r.salary)
    }

    /// Arithmetic mean of the Age column, `None` when the table is empty.
    pub fn average_age(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: u64 = self.records.iter().map(|r| u64::from(r.age)).sum();
        Some(sum as f64 / self.records.len() as f64)
    }
}

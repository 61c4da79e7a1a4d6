pub mod loader;

pub use loader::load_table;

use crate::errors::{AppError, Result};
use crate::models::LessonRecord;

/// The loaded question table: immutable after startup, shared by
/// reference into every request.
#[derive(Debug)]
pub struct QuestionTable {
    records: Vec<LessonRecord>,
}

impl QuestionTable {
    pub fn new(records: Vec<LessonRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the record matching `key` by trimmed, case-folded equality.
    ///
    /// Key uniqueness is assumed, not enforced; on duplicates the first
    /// row in table order wins.
    pub fn find(&self, key: &str) -> Result<&LessonRecord> {
        let needle = normalize(key);
        self.records
            .iter()
            .find(|record| normalize(&record.sub_lesson) == needle)
            .ok_or_else(|| AppError::NotFound(key.to_string()))
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

//! Client-side text search over the current page.

use crate::record::TableRecord;

/// Does `record` match `query` on any of `fields`?
///
/// Case-insensitive substring match on the string form of each field; fields
/// absent from the record count as the empty string. An empty query matches
/// everything.
pub fn matches<R: TableRecord>(record: &R, fields: &[String], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    matches_lowercase(record, fields, &needle)
}

fn matches_lowercase<R: TableRecord>(record: &R, fields: &[String], needle: &str) -> bool {
    fields.iter().any(|field| {
        record
            .field(field)
            .map(|value| value.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

/// Filter `data` by `query`, preserving input order. Never mutates `data`.
pub fn filter_records<'a, R: TableRecord>(
    data: &'a [R],
    fields: &[String],
    query: &str,
) -> Vec<&'a R> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return data.iter().collect();
    }
    let filtered: Vec<&R> = data
        .iter()
        .filter(|record| matches_lowercase(*record, fields, &needle))
        .collect();
    log::debug!(
        "search {:?} kept {} of {} records",
        needle,
        filtered.len(),
        data.len()
    );
    filtered
}

/// Component-local search query. Starts empty and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn set(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }
}

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Per-book counts shown when listing books for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub title: String,
    pub highlights: usize,
    pub notes: usize,
}

/// Result of deduplicating one book's entries.
///
/// `duplicates` counts the merges that happened; it is returned rather than
/// printed so callers decide how (and whether) to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupReport {
    pub entries: Vec<Entry>,
    pub duplicates: usize,
}

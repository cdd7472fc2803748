use serde::{Deserialize, Serialize};

use super::entry::Entry;
use super::report::BookSummary;

/// All annotations belonging to one book, in the order they appeared in the
/// export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub entries: Vec<Entry>,
}

/// Parse result for a whole clippings export.
///
/// Books keep their first-seen order so that selection indices shown to the
/// user are stable across runs over the same file. Titles are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub books: Vec<Book>,
    /// Records that were dropped during parsing (too few lines, or a
    /// metadata line with no recognizable annotation kind).
    pub skipped_records: usize,
}

impl Library {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// One summary row per book, in selection order.
    pub fn summaries(&self) -> Vec<BookSummary> {
        self.books
            .iter()
            .map(|book| BookSummary {
                title: book.title.clone(),
                highlights: book.entries.iter().filter(|e| e.is_highlight()).count(),
                notes: book.entries.iter().filter(|e| e.is_note()).count(),
            })
            .collect()
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Annotation kind with its location in the book's internal pagination.
///
/// Locations are 1-based. A highlight covers the inclusive range
/// `start..=end` with `start <= end`; a note sits at a single location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Note { location: u32 },
    Highlight { start: u32, end: u32 },
}

/// One parsed annotation from a clippings export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub content: String,
    /// When the annotation was added on the device. The export carries no
    /// timezone, so this is naive.
    pub added: NaiveDateTime,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_highlight(&self) -> bool {
        matches!(self.kind, EntryKind::Highlight { .. })
    }

    pub fn is_note(&self) -> bool {
        matches!(self.kind, EntryKind::Note { .. })
    }

    /// Sort key for rendering. Highlights sort by their end location; a note
    /// sorts by its location minus one, placing it immediately before the
    /// highlight it annotates when the two are adjacent.
    pub fn sort_location(&self) -> i64 {
        match self.kind {
            EntryKind::Note { location } => i64::from(location) - 1,
            EntryKind::Highlight { end, .. } => i64::from(end),
        }
    }
}

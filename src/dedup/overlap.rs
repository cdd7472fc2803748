use crate::models::{DedupReport, Entry, EntryKind};

/// Reconciled highlight range with the entry currently considered canonical
/// for it. Lives only for the duration of one [`deduplicate`] pass.
struct DedupedRange {
    start: u32,
    end: u32,
    entry: Entry,
}

/// Collapse overlapping highlight ranges to one canonical entry each.
///
/// Re-taking a highlight with a slightly different boundary produces several
/// overlapping records in the export; only the most recently added version is
/// worth keeping. Entries are processed in input order, and each incoming
/// highlight merges with at most the first stored range it collides with, so
/// a highlight bridging two previously disjoint ranges does not collapse
/// them into one.
///
/// Notes are passed through untouched and come after the highlights in the
/// returned entries. The merge count is reported in
/// [`DedupReport::duplicates`].
pub fn deduplicate(entries: Vec<Entry>) -> DedupReport {
    let mut ranges: Vec<DedupedRange> = Vec::new();
    let mut notes: Vec<Entry> = Vec::new();
    let mut duplicates = 0;

    for entry in entries {
        match entry.kind {
            EntryKind::Highlight { start, end } => {
                match ranges.iter().position(|r| collides(r, start, end, &entry.content)) {
                    Some(index) => {
                        duplicates += 1;
                        let range = &mut ranges[index];
                        range.start = range.start.min(start);
                        range.end = range.end.max(end);
                        if entry.added > range.entry.added {
                            range.entry = entry;
                        }
                    }
                    None => ranges.push(DedupedRange { start, end, entry }),
                }
            }
            EntryKind::Note { .. } => notes.push(entry),
        }
    }

    let mut deduped: Vec<Entry> = ranges
        .into_iter()
        .map(|range| Entry {
            kind: EntryKind::Highlight { start: range.start, end: range.end },
            ..range.entry
        })
        .collect();
    deduped.extend(notes);

    DedupReport { entries: deduped, duplicates }
}

/// Whether an incoming highlight counts as a duplicate of a stored range.
fn collides(range: &DedupedRange, start: u32, end: u32, content: &str) -> bool {
    if end < range.start || range.end < start {
        return false;
    }

    // Two neighboring highlights share a single boundary location in the
    // export. Only treat that as the same highlight when one text is a
    // prefix of the other, i.e. the passage was re-taken with an extended
    // boundary.
    if range.end == start || range.start == end {
        return content.starts_with(range.entry.content.as_str())
            || range.entry.content.starts_with(content);
    }

    true
}

use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Book, Entry, EntryKind, Library};
use crate::parsers::timestamps::parse_added_on;

/// Line separating records in a clippings export.
pub const RECORD_DELIMITER: &str = "==========";

/// Marker preceding the date-time portion of a metadata line.
const ADDED_ON_MARKER: &str = "Added on ";

static HIGHLIGHT_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Location (\d+)-(\d+)").unwrap());
static NOTE_LOCATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Location (\d+)").unwrap());

/// Parse a whole clippings export into entries grouped by book.
///
/// Records are separated by a line of ten `=` characters. Each record is
/// expected to carry the book title on its first line, a metadata line
/// (annotation kind, location, and "Added on" date) on its second, a blank
/// third line, and the annotation text on its fourth. Records that do not
/// fit this shape are skipped and counted in [`Library::skipped_records`];
/// so are records whose metadata line names neither a highlight nor a note.
///
/// # Errors
///
/// Returns an error if a record's metadata line has no "Added on " marker or
/// an unparseable date. A broken date means the export itself is damaged, so
/// the whole parse fails rather than producing a partial library.
pub fn parse_clippings(text: &str) -> Result<Library> {
    // Exports written by the device start with a UTF-8 BOM.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut books: Vec<Book> = Vec::new();
    let mut skipped_records = 0;

    for record in text.split(RECORD_DELIMITER) {
        let record = record.trim();
        if record.is_empty() {
            // Leading/trailing delimiter noise, not a real record.
            continue;
        }

        let lines: Vec<&str> = record.lines().collect();
        if lines.len() < 4 {
            skipped_records += 1;
            continue;
        }

        let title = lines[0].trim();
        let metadata = lines[1].trim();
        let content = lines[3].trim();

        let added = parse_metadata_date(metadata)
            .with_context(|| format!("Bad metadata line in record for {:?}", title))?;

        let Some(kind) = parse_metadata_kind(metadata) else {
            skipped_records += 1;
            continue;
        };

        let entry = Entry { content: content.to_string(), added, kind };

        match books.iter_mut().find(|book| book.title == title) {
            Some(book) => book.entries.push(entry),
            None => books.push(Book { title: title.to_string(), entries: vec![entry] }),
        }
    }

    Ok(Library { books, skipped_records })
}

/// Extract the "Added on" date from a metadata line.
fn parse_metadata_date(metadata: &str) -> Result<chrono::NaiveDateTime> {
    match metadata.split_once(ADDED_ON_MARKER) {
        Some((_, date_text)) => parse_added_on(date_text),
        None => bail!("No {:?} marker in metadata line: {:?}", ADDED_ON_MARKER, metadata),
    }
}

/// Determine the annotation kind and its location from a metadata line.
///
/// Returns `None` when the line names neither kind, or names one without a
/// matching location pattern; such records are dropped by the caller.
fn parse_metadata_kind(metadata: &str) -> Option<EntryKind> {
    if metadata.contains("Highlight") {
        let captures = HIGHLIGHT_LOCATION.captures(metadata)?;
        let start = captures[1].parse().ok()?;
        let end = captures[2].parse().ok()?;
        Some(EntryKind::Highlight { start, end })
    } else if metadata.contains("Note") {
        let captures = NOTE_LOCATION.captures(metadata)?;
        let location = captures[1].parse().ok()?;
        Some(EntryKind::Note { location })
    } else {
        None
    }
}

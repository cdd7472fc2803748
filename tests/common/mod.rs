//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Delimiter line between records, as the device writes it.
pub const DELIMITER: &str = "==========";

/// Builder for one clippings record.
pub struct RecordBuilder {
    title: String,
    metadata: String,
    content: String,
}

impl RecordBuilder {
    /// Create a highlight record with a default date
    pub fn highlight(title: &str, start: u32, end: u32, content: &str) -> Self {
        Self {
            title: title.to_string(),
            metadata: format!(
                "- Your Highlight on Location {}-{} | Added on Monday, 14 August 2017 21:46:33",
                start, end
            ),
            content: content.to_string(),
        }
    }

    /// Create a note record with a default date
    pub fn note(title: &str, location: u32, content: &str) -> Self {
        Self {
            title: title.to_string(),
            metadata: format!(
                "- Your Note on Location {} | Added on Monday, 14 August 2017 21:50:02",
                location
            ),
            content: content.to_string(),
        }
    }

    /// Create a record with a raw metadata line (for malformed-input tests)
    pub fn with_metadata(title: &str, metadata: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            metadata: metadata.to_string(),
            content: content.to_string(),
        }
    }

    /// Override the "Added on" date (24-hour international format)
    pub fn added_on(mut self, date: &str) -> Self {
        let prefix = self
            .metadata
            .split_once(" | Added on ")
            .map(|(before, _)| before.to_string())
            .unwrap_or_else(|| self.metadata.clone());
        self.metadata = format!("{} | Added on {}", prefix, date);
        self
    }

    /// Render the record text including the trailing delimiter line
    pub fn to_record(&self) -> String {
        format!("{}\n{}\n\n{}\n{}\n", self.title, self.metadata, self.content, DELIMITER)
    }
}

/// Builder assembling a whole clippings export from records.
pub struct ClippingsBuilder {
    records: Vec<RecordBuilder>,
    raw_prefix: String,
}

impl ClippingsBuilder {
    pub fn new() -> Self {
        Self { records: Vec::new(), raw_prefix: String::new() }
    }

    /// Prepend raw text before the first record (BOM tests)
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.raw_prefix = prefix.to_string();
        self
    }

    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.records.push(record);
        self
    }

    /// Render the full export text
    pub fn to_text(&self) -> String {
        let body: String = self.records.iter().map(|r| r.to_record()).collect();
        format!("{}{}", self.raw_prefix, body)
    }

    /// Write the export to a temp file and return its handle
    pub fn to_file(&self) -> NamedTempFile {
        write_clippings_file(&self.to_text())
    }
}

impl Default for ClippingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw export text to a temp file
pub fn write_clippings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Write export text into `dir` under a fixed name, returning the path
pub fn write_clippings_in(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("My Clippings.txt");
    fs::write(&path, content).expect("Failed to write clippings file");
    path
}

/// A small realistic two-book export with a duplicated highlight
pub fn realistic_export() -> String {
    ClippingsBuilder::new()
        .with_record(
            RecordBuilder::highlight("Walden (Henry David Thoreau)", 100, 120, "to live deliberately")
                .added_on("Friday, 3 November 2017 17:45:14"),
        )
        .with_record(
            RecordBuilder::highlight(
                "Walden (Henry David Thoreau)",
                100,
                125,
                "to live deliberately, to front only the essential facts",
            )
            .added_on("Friday, 3 November 2017 17:46:02"),
        )
        .with_record(RecordBuilder::note("Walden (Henry David Thoreau)", 125, "##"))
        .with_record(RecordBuilder::highlight("The Art of War (Sun Tzu)", 10, 15, "know your enemy"))
        .to_text()
}

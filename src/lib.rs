//! Kindle Notes - Convert Kindle clippings exports into Markdown notes
//!
//! This library turns the flat `My Clippings.txt` log a Kindle writes into a
//! per-book Markdown document. It supports:
//!
//! - Parsing delimiter-separated clippings records into typed entries
//!   grouped by book
//! - Collapsing overlapping highlight ranges to the most recently added
//!   version
//! - Rendering notes and highlights as Markdown, promoting a bare-marker
//!   note into the heading of the highlight that follows it
//!
//! # Example
//!
//! ```no_run
//! use kindle_notes::{RenderOptions, deduplicate, parse_clippings, render_markdown};
//!
//! let raw = std::fs::read_to_string("My Clippings.txt")?;
//! let library = parse_clippings(&raw)?;
//! let book = &library.books[0];
//! let report = deduplicate(book.entries.clone());
//! let markdown = render_markdown(&report.entries, &book.title, &RenderOptions::default());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod dedup;
pub mod models;
pub mod parsers;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use dedup::deduplicate;
pub use models::{Book, BookSummary, DedupReport, Entry, EntryKind, Library};
pub use parsers::parse_clippings;
pub use render::{RenderOptions, render_markdown};

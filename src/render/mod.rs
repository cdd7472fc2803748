//! Markdown rendering for deduplicated book entries.
//!
//! Entries are sorted by location and written as a single document: a
//! level-1 title heading, block quotes for highlights, list items for notes,
//! and the heading-promotion rule that turns a bare-marker note into the
//! Markdown prefix of the highlight right after it.

pub mod markdown;

pub use markdown::{RenderOptions, render_markdown};

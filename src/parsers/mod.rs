//! Parser for Kindle clippings exports.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI
//! tools:
//!
//! - **Malformed records**: Records with too few lines, or whose metadata
//!   line names no recognizable annotation kind, are skipped and counted in
//!   [`Library::skipped_records`](crate::models::Library). One stray record
//!   (a bookmark, a foreign-locale line) does not kill the export.
//!
//! - **Broken dates**: A metadata line with no "Added on " marker or an
//!   unparseable date fails the whole parse. Dates drive deduplication, so a
//!   file that cannot produce them is treated as damaged rather than
//!   silently losing entries.
//!
//! - **Error propagation**: Uses `anyhow::Result` with context naming the
//!   offending record's book title. Since this is a binary/CLI tool (not a
//!   library with typed errors), consumers don't match on error types.

pub mod clippings;
pub mod timestamps;

pub use clippings::parse_clippings;
pub use timestamps::parse_added_on;

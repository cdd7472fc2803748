//! Deduplication of overlapping highlight ranges.
//!
//! Re-highlighting a passage leaves every earlier attempt in the export, so
//! one passage can appear as several records with slightly different
//! location ranges. This module collapses each group of overlapping ranges
//! to its most recently added version, widening the surviving range to cover
//! every variant. Notes have no dedup policy and pass through untouched.
//!
//! The pass is deliberately first-match-only: each incoming highlight merges
//! with at most one stored range, so a chain of overlaps is not collapsed
//! transitively. That mirrors how duplicates actually occur (the same
//! passage re-taken) and keeps the scan a simple single pass.

pub mod overlap;

pub use overlap::deduplicate;

//! # Stat page scraping
//!
//! `table` knows how to read a hero stat table out of raw HTML; `stats` pairs
//! it with a `DocumentSource` and the statistic source table.
//!
//! ```text
//! runner → stats::fetch_stat(source, date) → DocumentSource::fetch
//!                                          ↘ table::parse → TableExtraction
//! ```
//!
//! Parsing is pure and testable offline against captured pages. Network,
//! caching and presentation live elsewhere.
pub mod stats;
pub mod table;

pub use stats::fetch_stat;
pub use table::{StatCell, StatRequest, StatRow, TableExtraction};

//! Segments free-form model output into [`Record`]s.
//!
//! Parsing runs in two stages:
//!
//! 1. [`segment`] scans for line-start markers such as `1)` or `12)` and
//!    yields the text between consecutive markers.
//! 2. [`extract_record`] turns one block into a title and an optional detail
//!    taken from an "Acceptance Criteria:" section.
//!
//! The parser is total. Unstructured input produces no records, and a block
//! without any recognised structure keeps its first line verbatim as the title.

mod fields;
mod segment;

pub use fields::{clean_title, extract_detail, extract_record};
pub use segment::segment;

use crate::models::Record;

/// Parse model output into records, in the order their blocks appear.
pub fn parse(raw: &str) -> Vec<Record> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let records: Vec<Record> = segment(raw).into_iter().map(extract_record).collect();
    tracing::debug!(count = records.len(), "Parsed records from model output");
    records
}

//! Pulls the cyclomatic complexity figure out of a free-text analyzer message.
//!
//! Input rows come from tools with no stable schema; the message column moves
//! around and is sometimes the whole row. Extraction is therefore a
//! best-effort scan over the row shape, never an error.

use crate::config::MAX_POSITIONAL_FIELDS;
use crate::core::{Field, Row};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMPLEXITY_RE: Regex =
        Regex::new(r"cyclomatic complexity of (\d+)").expect("valid regex");
}

const COMPLEXITY_MARKER: &str = "cyclomatic complexity";

/// Find the complexity value embedded in a row, if any field carries one.
///
/// Named fields are scanned in column order, positional rows only through the
/// first ten fields, and a raw row is treated as the message itself. `None`
/// means no complexity message was found; callers that need the reference
/// zero-fallback fold it with `unwrap_or(0)`.
pub fn extract_complexity(row: &Row) -> Option<u32> {
    let message = find_message(row)?;
    parse_complexity(message)
}

fn find_message(row: &Row) -> Option<&str> {
    match row {
        Row::Named(fields) => fields
            .iter()
            .filter_map(|(_, field)| field.as_text())
            .find(|text| text.contains(COMPLEXITY_MARKER)),
        Row::Positional(fields) => fields
            .iter()
            .take(MAX_POSITIONAL_FIELDS)
            .filter_map(Field::as_text)
            .find(|text| text.contains(COMPLEXITY_MARKER)),
        Row::Raw(message) => Some(message.as_str()),
    }
}

fn parse_complexity(message: &str) -> Option<u32> {
    COMPLEXITY_RE
        .captures(message)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

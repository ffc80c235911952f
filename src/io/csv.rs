//! Delimited-text loader for per-defect measurement files.
//!
//! The first non-empty line is the header; subsequent lines become
//! `Row::Named` records pairing header names with dynamically typed fields.
//! Missing files are an expected state (a defect with no data) and load as an
//! empty row set rather than an error.

use crate::core::{DefectmapError, DefectmapResult, Field, Row};
use std::fs;
use std::path::Path;

/// Load every data row from a headered CSV file.
///
/// Returns an empty vector when the file does not exist. Any other I/O
/// failure is fatal to the run.
pub fn load_rows(path: &Path) -> DefectmapResult<Vec<Row>> {
    if !path.exists() {
        log::info!("file not found: {}", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| DefectmapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_rows(&content))
}

/// Parse headered CSV text into named rows. Empty lines are skipped.
pub fn parse_rows(content: &str) -> Vec<Row> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let headers: Vec<String> = match lines.next() {
        Some(header) => split_record(header),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let fields = split_record(line);
            Row::Named(
                headers
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let field = fields.get(i).map(|raw| type_field(raw)).unwrap_or(Field::Empty);
                        (name.clone(), field)
                    })
                    .collect(),
            )
        })
        .collect()
}

/// Split one CSV record, honoring double-quoted fields with doubled-quote
/// escapes. Quoted fields do not span lines in any of our inputs.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn type_field(raw: &str) -> Field {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Field::Empty
    } else if let Ok(n) = trimmed.parse::<f64>() {
        Field::Number(n)
    } else {
        Field::Text(raw.to_string())
    }
}

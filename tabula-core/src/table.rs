//! Markdown table extraction
//!
//! Only the first pipe-delimited table with a `|---|` header separator is
//! recognized. Cells are split verbatim on `|`; escaped pipes and multi-line
//! cells are not supported.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Substring that marks the header separator row
const SEPARATOR_MARKER: &str = "---";

/// Cell delimiter
const DELIMITER: char = '|';

/// A table extracted from a markdown document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Header cells, one per rendered column
    pub headers: Vec<String>,
    /// Data rows (may be ragged)
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of rendered columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get a data cell, `None` when the row is too short
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(|s| s.as_str())
    }
}

/// Extract the first table from a markdown document
///
/// Returns `None` when the document has no header separator row or the line
/// above it carries no cells. That is an expected outcome, not an error.
pub fn parse_table(document: &str) -> Option<Table> {
    let lines: Vec<&str> = document.split('\n').collect();

    let separator = lines.iter().position(|line| is_separator(line))?;

    // A separator on the very first line has no header row above it
    let header_line = lines.get(separator.checked_sub(1)?)?;
    let headers = split_cells(header_line);
    if headers.is_empty() {
        return None;
    }

    let rows = lines[separator + 1..]
        .iter()
        .take_while(|line| is_table_line(line))
        .map(|line| split_cells(line))
        .collect();

    Some(Table { headers, rows })
}

/// Check if a line belongs to a table
fn is_table_line(line: &str) -> bool {
    line.trim().starts_with(DELIMITER)
}

/// Check if a line is a header separator row
fn is_separator(line: &str) -> bool {
    is_table_line(line) && line.contains(SEPARATOR_MARKER)
}

/// Split a row into trimmed cells, dropping the segments outside the
/// outermost delimiters
fn split_cells(line: &str) -> Vec<String> {
    let segments: Vec<&str> = line.split(DELIMITER).collect();
    if segments.len() < 2 {
        return Vec::new();
    }

    segments[1..segments.len() - 1]
        .iter()
        .map(|segment| segment.trim().to_string())
        .collect()
}

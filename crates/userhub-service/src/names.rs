//! Embedded name corpus for synthetic user generation.
//!
//! The corpus ships inside the binary and is warm-loaded into the shared
//! cache list at startup; it only gets read directly again when the cache
//! is disabled or empty.

use std::sync::OnceLock;

const NAMES_CSV: &str = include_str!("../resources/names.csv");

static CORPUS: OnceLock<Vec<(String, String)>> = OnceLock::new();

/// Returns the parsed `(first, last)` corpus.
pub fn corpus() -> &'static [(String, String)] {
    CORPUS.get_or_init(|| NAMES_CSV.lines().filter_map(parse_line).collect())
}

/// Returns the raw corpus lines as cached in the shared list.
pub fn raw_lines() -> Vec<String> {
    NAMES_CSV
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parses a `first,last` corpus line.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let (first, last) = line.split_once(',')?;
    let first = first.trim();
    let last = last.trim();
    if first.is_empty() || last.is_empty() {
        return None;
    }
    Some((first.to_string(), last.to_string()))
}

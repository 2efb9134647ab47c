//! Parsing utilities for matrix format strings
//!
//! This module provides pure parsing functions for the individual fields
//! and lines of the matrix text format, with no I/O dependencies. Callers
//! attach line numbers when reporting failures.

/// Parse an unsigned coordinate or dimension field
///
/// Whitespace around the digits is tolerated. Values that do not fit in a
/// `usize` are rejected.
pub fn parse_index(field: &str) -> Option<usize> {
    field.trim().parse().ok()
}

/// Parse a signed entry value field
///
/// Accepts an optional leading `+` or `-`. Values that do not fit in an
/// `i64` are rejected.
pub fn parse_value(field: &str) -> Option<i64> {
    field.trim().parse().ok()
}

/// Parse an entry line in the format `(row, col, value)`
///
/// The parentheses are required; whitespace around the commas and inside
/// the parentheses is tolerated. Returns `None` unless the line carries
/// exactly three integer fields.
pub fn parse_entry(line: &str) -> Option<(usize, usize, i64)> {
    let inner = line.strip_prefix('(')?.strip_suffix(')')?;
    let mut fields = inner.split(',');
    let row = parse_index(fields.next()?)?;
    let col = parse_index(fields.next()?)?;
    let value = parse_value(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    Some((row, col, value))
}

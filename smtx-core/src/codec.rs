//! Plain-text matrix format
//!
//! A matrix file declares its dimensions and lists one stored entry per
//! line:
//!
//! ```text
//! # optional comment
//! rows=3
//! cols=4
//! (0, 1, 5)
//! (2, 3, -7)
//! ```
//!
//! Dimension lines may appear in either order (the last occurrence of a
//! repeated key wins), blank lines and `#` comments are ignored, and any
//! other line must be an entry in the `(row, col, value)` shape. Entry
//! coordinates are stored as written; they are not checked against the
//! declared dimensions.

use alloc::string::{String, ToString};
use core::fmt;

use hashbrown::HashMap;

use crate::error::{Result, SmtxError};
use crate::matrix::CooMatrix;
use crate::validation::parsing::{parse_entry, parse_index};

/// Key prefix of the row-count line
pub const ROWS_KEY: &str = "rows=";
/// Key prefix of the column-count line
pub const COLS_KEY: &str = "cols=";
/// Leading character of comment lines
pub const COMMENT: char = '#';

/// Parse the text form of a matrix
///
/// Fails with a `Format`-category error when a line violates the grammar
/// or when the text leaves `rows` or `cols` unset or zero.
///
/// # Examples
///
/// ```
/// use smtx_core::parse_matrix;
///
/// let matrix = parse_matrix("rows=2\ncols=2\n(0, 0, 7)\n").unwrap();
/// assert_eq!(matrix.dimensions(), (2, 2));
/// assert_eq!(matrix.get(0, 0), 7);
/// ```
pub fn parse_matrix(text: &str) -> Result<CooMatrix> {
    let mut nrows = 0;
    let mut ncols = 0;
    let mut entries = HashMap::new();

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }
        if let Some(field) = line.strip_prefix(ROWS_KEY) {
            nrows = parse_index(field).ok_or(SmtxError::MalformedDimension { line: number + 1 })?;
        } else if let Some(field) = line.strip_prefix(COLS_KEY) {
            ncols = parse_index(field).ok_or(SmtxError::MalformedDimension { line: number + 1 })?;
        } else {
            let (row, col, value) =
                parse_entry(line).ok_or(SmtxError::MalformedEntry { line: number + 1 })?;
            entries.insert((row, col), value);
        }
    }

    if nrows == 0 || ncols == 0 {
        return Err(SmtxError::MissingDimensions);
    }

    Ok(CooMatrix::from_parts(nrows, ncols, entries))
}

/// Render a matrix in the canonical text form
///
/// Dimensions come first, then every stored entry in ascending coordinate
/// order (row first, then column). Two serializations of the same logical
/// matrix are byte-identical regardless of insertion order.
pub fn serialize_matrix(matrix: &CooMatrix) -> String {
    matrix.to_string()
}

impl fmt::Display for CooMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ROWS_KEY}{}", self.nrows())?;
        writeln!(f, "{COLS_KEY}{}", self.ncols())?;
        for (row, col, value) in self.sorted_entries() {
            writeln!(f, "({row}, {col}, {value})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_matrix() {
        let text = "rows=3\ncols=4\n(0, 1, 5)\n(2, 3, -7)\n";
        let matrix = parse_matrix(text).unwrap();
        assert_eq!(matrix.dimensions(), (3, 4));
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get(0, 1), 5);
        assert_eq!(matrix.get(2, 3), -7);
        assert_eq!(matrix.get(1, 1), 0);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "# a comment\n\nrows=2\n   \ncols=2\n# another\n(1, 0, 9)\n";
        let matrix = parse_matrix(text).unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(1, 0), 9);
    }

    #[test]
    fn test_parse_dimensions_in_any_order() {
        let matrix = parse_matrix("cols=5\n(0, 4, 1)\nrows=2\n").unwrap();
        assert_eq!(matrix.dimensions(), (2, 5));
    }

    #[test]
    fn test_parse_repeated_dimension_last_wins() {
        let matrix = parse_matrix("rows=2\nrows=6\ncols=3\n").unwrap();
        assert_eq!(matrix.dimensions(), (6, 3));
    }

    #[test]
    fn test_parse_accepts_out_of_range_coordinates() {
        let matrix = parse_matrix("rows=2\ncols=2\n(5, 9, 1)\n").unwrap();
        assert_eq!(matrix.get(5, 9), 1);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_entry() {
        assert_eq!(
            parse_matrix("rows=2\ncols=2\n(1, 2)\n"),
            Err(SmtxError::MalformedEntry { line: 3 })
        );
        assert_eq!(
            parse_matrix("rows=2\ncols=2\nsize=3\n"),
            Err(SmtxError::MalformedEntry { line: 3 })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_dimension() {
        assert_eq!(
            parse_matrix("rows=two\ncols=2\n"),
            Err(SmtxError::MalformedDimension { line: 1 })
        );
    }

    #[test]
    fn test_parse_requires_both_dimensions() {
        assert_eq!(
            parse_matrix("rows=2\n(0, 0, 1)\n"),
            Err(SmtxError::MissingDimensions)
        );
        assert_eq!(
            parse_matrix("rows=2\ncols=0\n"),
            Err(SmtxError::MissingDimensions)
        );
        assert_eq!(parse_matrix(""), Err(SmtxError::MissingDimensions));
    }

    #[test]
    fn test_serialize_orders_entries() {
        let mut matrix = CooMatrix::new(3, 3);
        matrix.insert(2, 0, 30);
        matrix.insert(0, 2, 12);
        matrix.insert(0, 1, 11);
        assert_eq!(
            serialize_matrix(&matrix),
            "rows=3\ncols=3\n(0, 1, 11)\n(0, 2, 12)\n(2, 0, 30)\n"
        );
    }

    #[test]
    fn test_serialize_keeps_explicit_zeros() {
        let mut matrix = CooMatrix::new(2, 2);
        matrix.insert(1, 1, 0);
        assert_eq!(serialize_matrix(&matrix), "rows=2\ncols=2\n(1, 1, 0)\n");
    }

    #[test]
    fn test_round_trip_preserves_matrix() {
        let mut matrix = CooMatrix::new(4, 2);
        matrix.insert(0, 0, -3);
        matrix.insert(3, 1, 17);
        matrix.insert(1, 0, 0);
        let parsed = parse_matrix(&serialize_matrix(&matrix)).unwrap();
        assert_eq!(parsed, matrix);
    }
}

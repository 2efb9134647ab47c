//! Error types for smtx operations

use crate::ops::Op;

/// Errors that can occur while loading, validating, or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtxError {
    /// Input file does not exist or could not be opened
    NotFound,
    /// Entry line does not parse as `(row, col, value)`
    MalformedEntry { line: usize },
    /// Dimension line does not carry an unsigned integer
    MalformedDimension { line: usize },
    /// `rows=` or `cols=` missing or zero after reading all lines
    MissingDimensions,
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        op: Op,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

/// The three failure kinds a caller can report separately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input resource is missing or unreadable
    NotFound,
    /// Content violates the text grammar
    Format,
    /// Operands are dimensionally incompatible
    Dimension,
}

impl SmtxError {
    /// Collapse an error onto its reportable category
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SmtxError::NotFound => ErrorCategory::NotFound,
            SmtxError::MalformedEntry { .. }
            | SmtxError::MalformedDimension { .. }
            | SmtxError::MissingDimensions => ErrorCategory::Format,
            SmtxError::DimensionMismatch { .. } => ErrorCategory::Dimension,
        }
    }
}

impl core::fmt::Display for SmtxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SmtxError::NotFound => write!(f, "matrix file not found"),
            SmtxError::MalformedEntry { line } => {
                write!(f, "malformed entry on line {line}")
            }
            SmtxError::MalformedDimension { line } => {
                write!(f, "malformed dimension on line {line}")
            }
            SmtxError::MissingDimensions => write!(f, "matrix dimensions must be specified"),
            SmtxError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "incompatible dimensions for {op}: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
        }
    }
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorCategory::NotFound => "resource not found",
            ErrorCategory::Format => "malformed content",
            ErrorCategory::Dimension => "dimension mismatch",
        };
        write!(f, "{msg}")
    }
}

/// Result type for smtx operations
pub type Result<T> = core::result::Result<T, SmtxError>;

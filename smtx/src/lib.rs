//! smtx - Sparse integer matrices with a plain-text format
//!
//! This library provides sparse matrix loading, arithmetic, and saving on
//! top of a simple line-oriented text format.
//!
//! ## Architecture
//!
//! smtx follows a clean specification/implementation separation:
//!
//! - **smtx-core**: store, algebra, and text format definitions (no I/O)
//! - **smtx**: file loading and saving, plus the interactive driver example
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{ops, read_matrix};
//!
//! fn example() -> smtx::Result<()> {
//!     let a = read_matrix("a.txt")?;
//!     let b = read_matrix("b.txt")?;
//!
//!     let sum = ops::add(&a, &b)?;
//!     print!("{sum}");
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use smtx_core::{
    // Store and traits
    CooMatrix, SparseMatrix,
    // Algebra
    ops, Op,
    // Codec
    parse_matrix, serialize_matrix,
    // Error handling
    ErrorCategory, Result, SmtxError,
};

// Implementation modules
pub mod file_io;

pub use file_io::{read_matrix, write_matrix};

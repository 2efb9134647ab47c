//! Pure validation utilities for the matrix format
//!
//! This module contains pure functions with no I/O dependencies: the line
//! grammar for matrix text files and the dimension law for the algebra.

pub mod parsing;
pub mod shape;

pub use parsing::parse_entry;

#![no_std]

//! smtx core - Sparse Matrix Text Format Definitions
//!
//! This crate provides the coordinate-keyed sparse matrix store, the
//! stateless algebra over it, and the plain-text matrix format, with no
//! I/O dependencies.

extern crate alloc;

pub mod codec;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use codec::*;
pub use error::*;
pub use matrix::*;
pub use ops::*;
pub use traits::*;
pub use validation::*;

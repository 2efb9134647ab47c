//! File-backed loading and saving of matrix text files

use smtx_core::{parse_matrix, serialize_matrix, CooMatrix, Result, SmtxError};
use std::fs;
use std::path::Path;

/// Load a matrix from a text file
///
/// Any failure to open or read the file reports as
/// [`SmtxError::NotFound`]; content failures propagate from
/// [`parse_matrix`]. The file handle is scoped to this call and released
/// on every exit path.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<CooMatrix> {
    let text = fs::read_to_string(path).map_err(|_| SmtxError::NotFound)?;
    parse_matrix(&text)
}

/// Save a matrix in the canonical text form
///
/// Writes the same byte-stable rendering as
/// [`serialize_matrix`], so saving and reloading yields an equal matrix.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &CooMatrix) -> Result<()> {
    fs::write(path, serialize_matrix(matrix)).map_err(|_| SmtxError::NotFound)
}

//! Core matrix abstraction traits
//!
//! The minimal read interface every matrix representation provides,
//! independent of how the entries are stored.

/// Format-agnostic access to a sparse matrix
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element;

    /// Stored element at the specified position
    ///
    /// Returns `None` when nothing is stored at the position or the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of stored entries
    fn nnz(&self) -> usize;
}

//! COO (coordinate) sparse matrix store
//!
//! A matrix is its declared dimensions plus a map from `(row, col)`
//! coordinates to integer values. Coordinates that are not stored read as
//! zero. Arithmetic never prunes entries, so a stored value may be an
//! explicit zero; such entries survive serialization and count toward
//! equality.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::traits::SparseMatrix;

/// Coordinate-keyed sparse matrix of `i64` values
///
/// # Examples
///
/// ```
/// use smtx_core::CooMatrix;
///
/// let mut matrix = CooMatrix::new(3, 4);
/// matrix.insert(0, 1, 5);
/// matrix.insert(2, 3, -7);
/// assert_eq!(matrix.get(0, 1), 5);
/// assert_eq!(matrix.get(1, 1), 0);
/// assert_eq!(matrix.nnz(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooMatrix {
    nrows: usize,
    ncols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl CooMatrix {
    /// Create an empty matrix with the given dimensions
    ///
    /// Constructors do not validate the dimensions; only the text codec
    /// enforces that a loaded matrix declares both as non-zero.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    pub(crate) fn from_parts(
        nrows: usize,
        ncols: usize,
        entries: HashMap<(usize, usize), i64>,
    ) -> Self {
        Self {
            nrows,
            ncols,
            entries,
        }
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored entries, explicit zeros included
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Assign a value to a coordinate, overwriting any existing entry
    pub fn insert(&mut self, row: usize, col: usize, value: i64) {
        self.entries.insert((row, col), value);
    }

    /// Value at a coordinate; coordinates without a stored entry read as zero
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Iterate over stored entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), i64)> + '_ {
        self.entries.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Stored entries sorted by coordinate, row first then column
    pub fn sorted_entries(&self) -> Vec<(usize, usize, i64)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
            .collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }
}

impl SparseMatrix for CooMatrix {
    type Element = i64;

    /// Stored element at the given position
    ///
    /// Returns `None` when no entry is stored there or the position is out
    /// of bounds. An explicitly stored zero returns `Some(0)`.
    fn get_element(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

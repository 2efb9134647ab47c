//! Stateless algebra over [`CooMatrix`] operands
//!
//! Every operation validates dimension compatibility, leaves its operands
//! untouched, and allocates a fresh result store. Entries whose combined
//! value works out to zero stay in the result as explicit zeros.

use crate::error::Result;
use crate::matrix::CooMatrix;
use crate::validation::shape;

/// Matrix operations a caller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Element-wise addition
    Add,
    /// Element-wise subtraction
    Subtract,
    /// Matrix multiplication
    Multiply,
}

impl Op {
    /// Look up an operation by its console spelling, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("add") {
            Some(Op::Add)
        } else if name.eq_ignore_ascii_case("subtract") {
            Some(Op::Subtract)
        } else if name.eq_ignore_ascii_case("multiply") {
            Some(Op::Multiply)
        } else {
            None
        }
    }
}

impl core::fmt::Display for Op {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
        };
        write!(f, "{msg}")
    }
}

/// Check that two operands are dimensionally compatible for `op`
pub fn validate_compatible(a: &CooMatrix, b: &CooMatrix, op: Op) -> Result<()> {
    shape::compatible(a.dimensions(), b.dimensions(), op)
}

/// Element-wise sum of two equal-shaped matrices
pub fn add(a: &CooMatrix, b: &CooMatrix) -> Result<CooMatrix> {
    validate_compatible(a, b, Op::Add)?;
    Ok(combine(a, b, |acc, value| acc + value))
}

/// Element-wise difference of two equal-shaped matrices
pub fn subtract(a: &CooMatrix, b: &CooMatrix) -> Result<CooMatrix> {
    validate_compatible(a, b, Op::Subtract)?;
    Ok(combine(a, b, |acc, value| acc - value))
}

/// Copy `a`'s entries, then fold each entry of `b` into the result.
fn combine(a: &CooMatrix, b: &CooMatrix, apply: fn(i64, i64) -> i64) -> CooMatrix {
    let mut result = a.clone();
    for ((row, col), value) in b.iter() {
        result.insert(row, col, apply(result.get(row, col), value));
    }
    result
}

/// Matrix product of `a` and `b`
///
/// Accumulates over every pair of stored entries whose inner coordinates
/// match, so the cost is O(nnz(a) * nnz(b)) rather than proportional to
/// the dense dimensions.
pub fn multiply(a: &CooMatrix, b: &CooMatrix) -> Result<CooMatrix> {
    validate_compatible(a, b, Op::Multiply)?;
    let mut result = CooMatrix::new(a.nrows(), b.ncols());
    for ((row, inner), left) in a.iter() {
        for ((other, col), right) in b.iter() {
            if inner == other {
                result.insert(row, col, result.get(row, col) + left * right);
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmtxError;

    fn matrix(nrows: usize, ncols: usize, entries: &[(usize, usize, i64)]) -> CooMatrix {
        let mut matrix = CooMatrix::new(nrows, ncols);
        for &(row, col, value) in entries {
            matrix.insert(row, col, value);
        }
        matrix
    }

    #[test]
    fn test_op_from_name() {
        assert_eq!(Op::from_name("add"), Some(Op::Add));
        assert_eq!(Op::from_name("Subtract"), Some(Op::Subtract));
        assert_eq!(Op::from_name(" MULTIPLY "), Some(Op::Multiply));
        assert_eq!(Op::from_name("divide"), None);
        assert_eq!(Op::from_name(""), None);
    }

    #[test]
    fn test_add_combines_overlapping_entries() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = matrix(2, 2, &[(0, 0, 3), (0, 1, 4)]);
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.dimensions(), (2, 2));
        assert_eq!(sum.sorted_entries(), [(0, 0, 4), (0, 1, 4), (1, 1, 2)]);
    }

    #[test]
    fn test_subtract_keeps_cancelled_entries() {
        let a = matrix(2, 2, &[(0, 0, 5), (1, 0, -2)]);
        let difference = subtract(&a, &a).unwrap();
        assert_eq!(difference.sorted_entries(), [(0, 0, 0), (1, 0, 0)]);
    }

    #[test]
    fn test_operations_do_not_mutate_operands() {
        let a = matrix(2, 2, &[(0, 0, 1)]);
        let b = matrix(2, 2, &[(0, 0, 2)]);
        add(&a, &b).unwrap();
        assert_eq!(a.get(0, 0), 1);
        assert_eq!(b.get(0, 0), 2);
    }

    #[test]
    fn test_multiply_accumulates_matching_inner_coordinates() {
        let a = matrix(2, 3, &[(0, 0, 2), (0, 2, 3), (1, 1, 4)]);
        let b = matrix(3, 2, &[(0, 0, 5), (2, 0, 7), (1, 1, -1)]);
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        // (0,0) = 2*5 + 3*7, (1,1) = 4*-1
        assert_eq!(product.sorted_entries(), [(0, 0, 31), (1, 1, -4)]);
    }

    #[test]
    fn test_mismatched_shapes_are_rejected() {
        let a = matrix(2, 3, &[]);
        let b = matrix(3, 2, &[]);
        assert_eq!(
            add(&a, &b),
            Err(SmtxError::DimensionMismatch {
                op: Op::Add,
                lhs: (2, 3),
                rhs: (3, 2),
            })
        );
        assert_eq!(
            multiply(&a, &a).unwrap_err(),
            SmtxError::DimensionMismatch {
                op: Op::Multiply,
                lhs: (2, 3),
                rhs: (2, 3),
            }
        );
    }
}

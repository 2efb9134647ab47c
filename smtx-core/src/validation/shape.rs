//! Dimension compatibility checks for matrix operations

use crate::error::{Result, SmtxError};
use crate::ops::Op;

/// Check the dimension law for a pair of operand shapes
///
/// Addition and subtraction require equal shapes; multiplication requires
/// the left operand's column count to match the right operand's row count.
pub const fn compatible(lhs: (usize, usize), rhs: (usize, usize), op: Op) -> Result<()> {
    let ok = match op {
        Op::Add | Op::Subtract => lhs.0 == rhs.0 && lhs.1 == rhs.1,
        Op::Multiply => lhs.1 == rhs.0,
    };
    if ok {
        Ok(())
    } else {
        Err(SmtxError::DimensionMismatch { op, lhs, rhs })
    }
}

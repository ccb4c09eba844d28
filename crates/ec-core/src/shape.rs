//! Matrix shapes and the compatibility checks run before every operation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A `(rows, cols)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of elements, or `None` if `rows * cols` overflows `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        (shape.rows, shape.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Succeeds iff `a` and `b` have identical row and column counts.
pub fn ensure_same_shape(a: Shape, b: Shape) -> Result<()> {
    if a == b {
        Ok(())
    } else {
        log::debug!("rejecting operands with shapes {} and {}", a, b);
        Err(EngineError::dimension_mismatch(a, b))
    }
}

/// Succeeds iff an output target of shape `actual` can receive a result of
/// shape `expected`.
pub fn ensure_output_shape(expected: Shape, actual: Shape) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        log::debug!("rejecting output of shape {} for result {}", actual, expected);
        Err(EngineError::OutputShapeMismatch { expected, actual })
    }
}

/// Checks the container invariant `len == rows * cols`.
pub(crate) fn ensure_buffer_len(shape: Shape, len: usize) -> Result<()> {
    match shape.checked_len() {
        Some(expected) if expected == len => Ok(()),
        _ => Err(EngineError::InvalidBuffer {
            rows: shape.rows,
            cols: shape.cols,
            len,
        }),
    }
}

use thiserror::Error;

use crate::shape::Shape;

/// Failures surfaced by the matrix engine.
///
/// Every variant is raised before any element of an output buffer is
/// written, so a failed call never leaves partial results behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The two operands of an element-wise operation have different shapes.
    #[error("dimension mismatch: ({a_rows}, {a_cols}) vs ({b_rows}, {b_cols})")]
    DimensionMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },

    /// A buffer does not hold exactly `rows * cols` elements.
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    InvalidBuffer { rows: usize, cols: usize, len: usize },

    /// The caller-supplied output target is not shaped like the operands.
    #[error("output shape {actual} does not match operand shape {expected}")]
    OutputShapeMismatch { expected: Shape, actual: Shape },

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("unknown precision: {0}")]
    UnknownPrecision(String),
}

impl EngineError {
    pub(crate) fn dimension_mismatch(a: Shape, b: Shape) -> Self {
        EngineError::DimensionMismatch {
            a_rows: a.rows,
            a_cols: a.cols,
            b_rows: b.rows,
            b_cols: b.cols,
        }
    }

    /// Both operand shapes carried by a `DimensionMismatch`, if this is one.
    pub fn operand_shapes(&self) -> Option<(Shape, Shape)> {
        match *self {
            EngineError::DimensionMismatch {
                a_rows,
                a_cols,
                b_rows,
                b_cols,
            } => Some((Shape::new(a_rows, a_cols), Shape::new(b_rows, b_cols))),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

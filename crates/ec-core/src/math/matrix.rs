use std::fmt;
use std::ops::Index;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::shape::{ensure_buffer_len, Shape};

/// Dense row-major matrix that owns its buffer.
///
/// `data.len() == rows * cols` holds for every value of this type; element
/// `(r, c)` lives at offset `r * cols + c`. The shape never changes after
/// construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawMatrix<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        ensure_buffer_len(Shape::new(rows, cols), data.len())?;
        Ok(Self { rows, cols, data })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// The 0x0 matrix.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.checked_len(), Some(data.len()));
        Self {
            rows: shape.rows,
            cols: shape.cols,
            data,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(self.offset(row, col))
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
    }

    /// Mutable access to the elements; the shape stays fixed.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut {
            rows: self.rows,
            cols: self.cols,
            data: &mut self.data,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Result<Self> {
        let shape = Shape::new(rows, cols);
        let len = shape.checked_len().ok_or(EngineError::InvalidBuffer {
            rows,
            cols,
            len: 0,
        })?;
        Ok(Self::from_parts(shape, vec![value; len]))
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_elem(rows, cols, T::zero())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Wire form used by serde; converted into a `Matrix` only after the
/// buffer length is checked.
#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = EngineError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Matrix::new(raw.rows, raw.cols, raw.data)
    }
}

/// Borrowed read-only matrix over a caller-owned buffer.
#[derive(Debug, PartialEq)]
pub struct MatrixView<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T],
}

impl<'a, T> Clone for MatrixView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for MatrixView<'a, T> {}

impl<'a, T> MatrixView<'a, T> {
    pub fn new(rows: usize, cols: usize, data: &'a [T]) -> Result<Self> {
        ensure_buffer_len(Shape::new(rows, cols), data.len())?;
        Ok(Self { rows, cols, data })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn to_matrix(&self) -> Matrix<T>
    where
        T: Clone,
    {
        Matrix::from_parts(self.shape(), self.data.to_vec())
    }
}

impl<'a, T> From<&'a Matrix<T>> for MatrixView<'a, T> {
    fn from(matrix: &'a Matrix<T>) -> Self {
        matrix.view()
    }
}

/// Borrowed matrix over a caller-owned buffer that receives results.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a mut [T],
}

impl<'a, T> MatrixViewMut<'a, T> {
    pub fn new(rows: usize, cols: usize, data: &'a mut [T]) -> Result<Self> {
        ensure_buffer_len(Shape::new(rows, cols), data.len())?;
        Ok(Self { rows, cols, data })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub(crate) fn into_mut_slice(self) -> &'a mut [T] {
        self.data
    }
}

impl<'a, T> From<&'a mut Matrix<T>> for MatrixViewMut<'a, T> {
    fn from(matrix: &'a mut Matrix<T>) -> Self {
        matrix.view_mut()
    }
}

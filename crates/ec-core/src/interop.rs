//! Conversions between [`Matrix`] and `ndarray::Array2`.
//!
//! Elements are taken in logical row-major order, so non-contiguous or
//! column-major arrays convert correctly.

use ndarray::{Array2, ArrayView2};

use crate::math::Matrix;
use crate::shape::Shape;

impl<T: Clone> From<ArrayView2<'_, T>> for Matrix<T> {
    fn from(view: ArrayView2<'_, T>) -> Self {
        let (rows, cols) = view.dim();
        let data: Vec<T> = view.iter().cloned().collect();
        Matrix::from_parts(Shape::new(rows, cols), data)
    }
}

impl<T: Clone> From<Array2<T>> for Matrix<T> {
    fn from(array: Array2<T>) -> Self {
        Matrix::from(array.view())
    }
}

impl<T: Clone> From<&Matrix<T>> for Array2<T> {
    fn from(matrix: &Matrix<T>) -> Self {
        Array2::from_shape_vec((matrix.nrows(), matrix.ncols()), matrix.to_vec())
            .expect("row-major buffer matches its shape")
    }
}

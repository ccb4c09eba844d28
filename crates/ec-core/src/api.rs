//! Public entry points.
//!
//! Each operation comes in two forms: one that allocates and returns a new
//! [`Matrix`], and an `_into` form that writes into a caller-owned
//! [`MatrixViewMut`]. Operands must share a shape; mixing `f32` and `f64`
//! does not type-check.
//!
//! ```
//! use ec_core::{api, Matrix};
//!
//! let a = Matrix::new(2, 2, vec![1.0f64, 2.0, 3.0, 4.0])?;
//! let b = Matrix::new(2, 2, vec![5.0f64, 6.0, 7.0, 8.0])?;
//! let c = api::add(&a, &b)?;
//! assert_eq!(c.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
//! # Ok::<(), ec_core::EngineError>(())
//! ```

use crate::config::OpKind;
use crate::error::Result;
use crate::math::{Element, Matrix, MatrixView, MatrixViewMut};
use crate::ops::binary::{Add, Max, Min, Mul, Sub};
use crate::ops::engine;

pub fn add<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    engine::apply::<T, Add>(a.view(), b.view())
}

pub fn add_into<T: Element>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: MatrixViewMut<'_, T>,
) -> Result<()> {
    engine::apply_into::<T, Add>(a, b, out)
}

/// `acc += rhs`, element-wise.
pub fn add_assign<T: Element>(acc: &mut Matrix<T>, rhs: &Matrix<T>) -> Result<()> {
    engine::apply_assign::<T, Add>(acc.view_mut(), rhs.view())
}

/// Single-precision addition.
pub fn add_f32(a: &Matrix<f32>, b: &Matrix<f32>) -> Result<Matrix<f32>> {
    add(a, b)
}

/// Double-precision addition.
pub fn add_f64(a: &Matrix<f64>, b: &Matrix<f64>) -> Result<Matrix<f64>> {
    add(a, b)
}

pub fn sub<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    engine::apply::<T, Sub>(a.view(), b.view())
}

pub fn sub_into<T: Element>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: MatrixViewMut<'_, T>,
) -> Result<()> {
    engine::apply_into::<T, Sub>(a, b, out)
}

/// Element-wise (Hadamard) product; not a matrix product.
pub fn mul<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    engine::apply::<T, Mul>(a.view(), b.view())
}

pub fn mul_into<T: Element>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: MatrixViewMut<'_, T>,
) -> Result<()> {
    engine::apply_into::<T, Mul>(a, b, out)
}

pub fn min<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    engine::apply::<T, Min>(a.view(), b.view())
}

pub fn min_into<T: Element>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: MatrixViewMut<'_, T>,
) -> Result<()> {
    engine::apply_into::<T, Min>(a, b, out)
}

pub fn max<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    engine::apply::<T, Max>(a.view(), b.view())
}

pub fn max_into<T: Element>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: MatrixViewMut<'_, T>,
) -> Result<()> {
    engine::apply_into::<T, Max>(a, b, out)
}

/// Runs the operator named by `op`.
pub fn apply<T: Element>(op: OpKind, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    match op {
        OpKind::Add => add(a, b),
        OpKind::Sub => sub(a, b),
        OpKind::Mul => mul(a, b),
        OpKind::Min => min(a, b),
        OpKind::Max => max(a, b),
    }
}

pub fn apply_into<T: Element>(
    op: OpKind,
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: MatrixViewMut<'_, T>,
) -> Result<()> {
    match op {
        OpKind::Add => add_into(a, b, out),
        OpKind::Sub => sub_into(a, b, out),
        OpKind::Mul => mul_into(a, b, out),
        OpKind::Min => min_into(a, b, out),
        OpKind::Max => max_into(a, b, out),
    }
}

//! Element-wise traversal shared by every operator and both precisions.
//!
//! The public entry points validate shapes first and only then touch the
//! output, so a rejected call leaves every buffer as it was. Traversal is
//! linear over the flat buffer (`0..rows*cols`), which for row-major storage
//! is row-then-column order.

use crate::error::Result;
use crate::math::{Element, Matrix, MatrixView, MatrixViewMut};
use crate::ops::binary::BinaryOp;
use crate::shape::{ensure_output_shape, ensure_same_shape};

#[inline]
fn zip_map<'a, T, Op>(a: &'a [T], b: &'a [T]) -> impl Iterator<Item = T> + 'a
where
    T: Element,
    Op: BinaryOp<T>,
{
    a.iter().zip(b.iter()).map(|(&x, &y)| Op::apply(x, y))
}

/// Writes `op(a[i], b[i])` into `out[i]`. Lengths must already be equal.
pub(crate) fn zip_into<T, Op>(a: &[T], b: &[T], out: &mut [T])
where
    T: Element,
    Op: BinaryOp<T>,
{
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    for (slot, value) in out.iter_mut().zip(zip_map::<T, Op>(a, b)) {
        *slot = value;
    }
}

/// Computes `acc[i] = op(acc[i], rhs[i])`, reading each element before it is
/// overwritten.
pub(crate) fn zip_assign<T, Op>(acc: &mut [T], rhs: &[T])
where
    T: Element,
    Op: BinaryOp<T>,
{
    debug_assert_eq!(acc.len(), rhs.len());
    for (slot, &y) in acc.iter_mut().zip(rhs.iter()) {
        *slot = Op::apply(*slot, y);
    }
}

/// Raw-pointer form of [`zip_into`] for buffers that arrive over the C ABI.
///
/// `out` may be the same pointer as `a` and/or `b`: every element is read
/// through the pointers before the slot at that index is written, and no
/// references are formed.
///
/// # Safety
///
/// `a` and `b` must be valid for `len` reads and `out` for `len` writes. If
/// `out` overlaps an input it must start at the same address.
pub(crate) unsafe fn zip_raw<T, Op>(a: *const T, b: *const T, out: *mut T, len: usize)
where
    T: Element,
    Op: BinaryOp<T>,
{
    for i in 0..len {
        let x = a.add(i).read();
        let y = b.add(i).read();
        out.add(i).write(Op::apply(x, y));
    }
}

/// `op(a, b)` into a freshly allocated matrix.
pub fn apply<T, Op>(a: MatrixView<'_, T>, b: MatrixView<'_, T>) -> Result<Matrix<T>>
where
    T: Element,
    Op: BinaryOp<T>,
{
    ensure_same_shape(a.shape(), b.shape())?;
    log::trace!("{}<{}> on {}", Op::NAME, T::NAME, a.shape());

    let data: Vec<T> = zip_map::<T, Op>(a.as_slice(), b.as_slice()).collect();
    Ok(Matrix::from_parts(a.shape(), data))
}

/// `op(a, b)` into a caller-supplied output of the same shape.
pub fn apply_into<T, Op>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: MatrixViewMut<'_, T>,
) -> Result<()>
where
    T: Element,
    Op: BinaryOp<T>,
{
    ensure_same_shape(a.shape(), b.shape())?;
    ensure_output_shape(a.shape(), out.shape())?;
    log::trace!("{}<{}> into {}", Op::NAME, T::NAME, out.shape());

    zip_into::<T, Op>(a.as_slice(), b.as_slice(), out.into_mut_slice());
    Ok(())
}

/// `acc = op(acc, rhs)` in place.
pub fn apply_assign<T, Op>(acc: MatrixViewMut<'_, T>, rhs: MatrixView<'_, T>) -> Result<()>
where
    T: Element,
    Op: BinaryOp<T>,
{
    ensure_same_shape(acc.shape(), rhs.shape())?;
    log::trace!("{}<{}> in place on {}", Op::NAME, T::NAME, acc.shape());

    zip_assign::<T, Op>(acc.into_mut_slice(), rhs.as_slice());
    Ok(())
}

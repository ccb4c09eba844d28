//! C ABI entry points.
//!
//! The descriptor layout is `{ size_t rows; size_t cols; T *data; }`, one
//! struct per precision, and there is one entry point per precision:
//!
//! ```c
//! typedef struct { size_t rows; size_t cols; float  *data; } ec_Matrixf32;
//! typedef struct { size_t rows; size_t cols; double *data; } ec_Matrixf64;
//! typedef struct { size_t a_rows, a_cols, b_rows, b_cols; } ec_ShapeMismatch;
//!
//! int32_t ec_addf32(const ec_Matrixf32 *a, const ec_Matrixf32 *b,
//!                   const ec_Matrixf32 *out, ec_ShapeMismatch *err);
//! int32_t ec_addf64(const ec_Matrixf64 *a, const ec_Matrixf64 *b,
//!                   const ec_Matrixf64 *out, ec_ShapeMismatch *err);
//! uint32_t ec_abi_version(void);
//! ```
//!
//! All buffers belong to the caller and are only touched for the duration of
//! the call. The output buffer may be the very same buffer as either input;
//! any other overlap between output and inputs is refused before writing.

use std::mem;
use std::ptr;

use crate::math::Element;
use crate::ops::binary::{Add, BinaryOp};
use crate::ops::engine::zip_raw;
use crate::shape::{ensure_output_shape, ensure_same_shape, Shape};

/// Bumped whenever a descriptor layout or status code changes.
pub const ABI_VERSION: u32 = 1;

/// Matrix descriptor shared with C callers.
#[repr(C)]
#[derive(Debug)]
pub struct EcMatrix<T> {
    pub rows: usize,
    pub cols: usize,
    pub data: *mut T,
}

impl<T> EcMatrix<T> {
    /// Descriptor over a mutable slice; `rows * cols` must equal its length.
    pub fn from_slice_mut(rows: usize, cols: usize, data: &mut [T]) -> Option<Self> {
        if Shape::new(rows, cols).checked_len() != Some(data.len()) {
            return None;
        }
        let data = if data.is_empty() {
            ptr::null_mut()
        } else {
            data.as_mut_ptr()
        };
        Some(Self { rows, cols, data })
    }

    fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }
}

pub type EcMatrixF32 = EcMatrix<f32>;
pub type EcMatrixF64 = EcMatrix<f64>;

/// Both operand shapes of a rejected call.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EcShapeMismatch {
    pub a_rows: usize,
    pub a_cols: usize,
    pub b_rows: usize,
    pub b_cols: usize,
}

/// Status codes returned across the C ABI. `Ok` is zero.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcStatus {
    Ok = 0,
    DimensionMismatch = 1,
    NullPointer = 2,
    OutputShapeMismatch = 3,
    OverlappingBuffers = 4,
    InvalidShape = 5,
}

/// True when `[x, x+len)` and `[y, y+len)` share memory without starting at
/// the same address.
fn partially_overlaps<T>(x: *const T, y: *const T, len: usize) -> bool {
    let bytes = len * mem::size_of::<T>();
    let (x, y) = (x as usize, y as usize);
    x != y && x < y + bytes && y < x + bytes
}

unsafe fn binary_op_raw<T, Op>(
    a: *const EcMatrix<T>,
    b: *const EcMatrix<T>,
    out: *const EcMatrix<T>,
    err: *mut EcShapeMismatch,
) -> EcStatus
where
    T: Element,
    Op: BinaryOp<T>,
{
    let (Some(a), Some(b), Some(out)) = (a.as_ref(), b.as_ref(), out.as_ref()) else {
        log::debug!("ec_{}<{}>: null descriptor", Op::NAME, T::NAME);
        return EcStatus::NullPointer;
    };

    if ensure_same_shape(a.shape(), b.shape()).is_err() {
        if let Some(slot) = err.as_mut() {
            *slot = EcShapeMismatch {
                a_rows: a.rows,
                a_cols: a.cols,
                b_rows: b.rows,
                b_cols: b.cols,
            };
        }
        return EcStatus::DimensionMismatch;
    }
    if ensure_output_shape(a.shape(), out.shape()).is_err() {
        return EcStatus::OutputShapeMismatch;
    }

    let len = match a.shape().checked_len() {
        Some(0) => return EcStatus::Ok,
        Some(len) if len.checked_mul(mem::size_of::<T>()).is_some() => len,
        _ => return EcStatus::InvalidShape,
    };

    if a.data.is_null() || b.data.is_null() || out.data.is_null() {
        log::debug!("ec_{}<{}>: null data pointer", Op::NAME, T::NAME);
        return EcStatus::NullPointer;
    }

    let dst = out.data as *const T;
    if partially_overlaps(dst, a.data, len) || partially_overlaps(dst, b.data, len) {
        log::debug!("ec_{}<{}>: output partially overlaps an input", Op::NAME, T::NAME);
        return EcStatus::OverlappingBuffers;
    }

    log::trace!("ec_{}<{}> on {}", Op::NAME, T::NAME, a.shape());
    zip_raw::<T, Op>(a.data, b.data, out.data, len);
    EcStatus::Ok
}

/// Adds two `f32` matrices into `out`.
///
/// On `DimensionMismatch` both shapes are written to `err` when it is not
/// null. Nothing is written to `out` unless the result is `Ok`.
///
/// # Safety
///
/// Non-null descriptors must point to valid `EcMatrixF32` values whose `data`
/// is valid for `rows * cols` elements (or null when that product is zero).
#[no_mangle]
pub unsafe extern "C" fn ec_addf32(
    a: *const EcMatrixF32,
    b: *const EcMatrixF32,
    out: *const EcMatrixF32,
    err: *mut EcShapeMismatch,
) -> EcStatus {
    binary_op_raw::<f32, Add>(a, b, out, err)
}

/// Adds two `f64` matrices into `out`.
///
/// # Safety
///
/// Same contract as [`ec_addf32`].
#[no_mangle]
pub unsafe extern "C" fn ec_addf64(
    a: *const EcMatrixF64,
    b: *const EcMatrixF64,
    out: *const EcMatrixF64,
    err: *mut EcShapeMismatch,
) -> EcStatus {
    binary_op_raw::<f64, Add>(a, b, out, err)
}

#[no_mangle]
pub extern "C" fn ec_abi_version() -> u32 {
    ABI_VERSION
}

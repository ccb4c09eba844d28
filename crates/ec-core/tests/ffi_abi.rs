//! C ABI entry points exercised from Rust with raw descriptors.

use std::ptr;

use ec_core::ffi::{
    ec_abi_version, ec_addf32, ec_addf64, EcMatrix, EcMatrixF32, EcMatrixF64, EcShapeMismatch,
    EcStatus, ABI_VERSION,
};

#[test]
fn addf32_writes_output() {
    let mut a = [1.0f32, 2.0, 3.0, 4.0];
    let mut b = [5.0f32, 6.0, 7.0, 8.0];
    let mut out = [0.0f32; 4];
    let da = EcMatrix::from_slice_mut(2, 2, &mut a).unwrap();
    let db = EcMatrix::from_slice_mut(2, 2, &mut b).unwrap();
    let dout = EcMatrix::from_slice_mut(2, 2, &mut out).unwrap();

    let status = unsafe { ec_addf32(&da, &db, &dout, ptr::null_mut()) };
    assert_eq!(status, EcStatus::Ok);
    assert_eq!(out, [6.0, 8.0, 10.0, 12.0]);
}

#[test]
fn addf64_overflow_is_not_an_error() {
    let mut a = [1e308f64];
    let mut out = [0.0f64];
    let da: EcMatrixF64 = EcMatrix::from_slice_mut(1, 1, &mut a).unwrap();
    let dout = EcMatrix::from_slice_mut(1, 1, &mut out).unwrap();

    let status = unsafe { ec_addf64(&da, &da, &dout, ptr::null_mut()) };
    assert_eq!(status, EcStatus::Ok);
    assert_eq!(out[0], f64::INFINITY);
}

#[test]
fn mismatch_reports_both_shapes_and_writes_nothing() {
    let mut a = [1.0f64; 6];
    let mut b = [2.0f64; 6];
    let mut out = [-7.0f64; 6];
    let da = EcMatrix::from_slice_mut(2, 3, &mut a).unwrap();
    let db = EcMatrix::from_slice_mut(3, 2, &mut b).unwrap();
    let dout = EcMatrix::from_slice_mut(2, 3, &mut out).unwrap();
    let mut err = EcShapeMismatch::default();

    let status = unsafe { ec_addf64(&da, &db, &dout, &mut err) };
    assert_eq!(status, EcStatus::DimensionMismatch);
    assert_eq!(
        err,
        EcShapeMismatch {
            a_rows: 2,
            a_cols: 3,
            b_rows: 3,
            b_cols: 2
        }
    );
    assert!(out.iter().all(|v| *v == -7.0));
}

#[test]
fn output_shape_must_match() {
    let mut a = [1.0f32; 6];
    let mut out = [0.0f32; 6];
    let da = EcMatrix::from_slice_mut(2, 3, &mut a).unwrap();
    let dout = EcMatrix::from_slice_mut(6, 1, &mut out).unwrap();

    let status = unsafe { ec_addf32(&da, &da, &dout, ptr::null_mut()) };
    assert_eq!(status, EcStatus::OutputShapeMismatch);
}

#[test]
fn null_pointers_are_rejected() {
    let mut a = [1.0f32; 2];
    let da = EcMatrix::from_slice_mut(1, 2, &mut a).unwrap();
    let status = unsafe { ec_addf32(&da, ptr::null(), &da, ptr::null_mut()) };
    assert_eq!(status, EcStatus::NullPointer);

    let null_data = EcMatrixF32 {
        rows: 1,
        cols: 2,
        data: ptr::null_mut(),
    };
    let status = unsafe { ec_addf32(&da, &null_data, &da, ptr::null_mut()) };
    assert_eq!(status, EcStatus::NullPointer);
    assert_eq!(a, [1.0, 1.0]);
}

#[test]
fn empty_matrices_accept_null_data() {
    let empty = EcMatrixF64 {
        rows: 0,
        cols: 0,
        data: ptr::null_mut(),
    };
    let status = unsafe { ec_addf64(&empty, &empty, &empty, ptr::null_mut()) };
    assert_eq!(status, EcStatus::Ok);
}

#[test]
fn output_may_alias_an_input() {
    let mut a = [1.0f64, 2.0, 3.0];
    let mut b = [10.0f64, 20.0, 30.0];
    let da = EcMatrix::from_slice_mut(1, 3, &mut a).unwrap();
    let db = EcMatrix::from_slice_mut(1, 3, &mut b).unwrap();

    let first = unsafe { ec_addf64(&da, &db, &da, ptr::null_mut()) };
    let second = unsafe { ec_addf64(&da, &db, &db, ptr::null_mut()) };
    assert_eq!(first, EcStatus::Ok);
    assert_eq!(second, EcStatus::Ok);
    assert_eq!(a, [11.0, 22.0, 33.0]);
    assert_eq!(b, [21.0, 42.0, 63.0]);
}

#[test]
fn partially_overlapping_output_is_refused() {
    let mut buf = [1.0f32, 2.0, 3.0, 4.0];
    let base = buf.as_mut_ptr();
    let a = EcMatrixF32 {
        rows: 1,
        cols: 3,
        data: base,
    };
    let shifted = EcMatrixF32 {
        rows: 1,
        cols: 3,
        data: unsafe { base.add(1) },
    };

    let status = unsafe { ec_addf32(&a, &a, &shifted, ptr::null_mut()) };
    assert_eq!(status, EcStatus::OverlappingBuffers);
    assert_eq!(buf, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn abi_version_matches_constant() {
    assert_eq!(ec_abi_version(), ABI_VERSION);
    assert_eq!(EcStatus::Ok as i32, 0);
}

#[test]
fn descriptor_requires_exact_length() {
    let mut buf = [0.0f32; 5];
    assert!(EcMatrix::from_slice_mut(2, 3, &mut buf).is_none());
}

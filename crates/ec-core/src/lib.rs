//! ec-core: dense matrices and element-wise arithmetic for `f32` and `f64`.
//!
//! The crate provides a row-major `Matrix` container with borrowed views, a
//! shape validator, and a generic element-wise engine (add, sub, mul, min,
//! max) written once and instantiated for both precisions. The same addition
//! kernel is exported over a C ABI (`ec_addf32` / `ec_addf64`) for hosts that
//! marshal their own buffers.
//!
//! Calls are synchronous and stateless: no global buffers, no caches, nothing
//! retained between calls. Shape mismatches come back as
//! [`EngineError::DimensionMismatch`] before any output is written.
pub mod api;
pub mod config;
pub mod error;
pub mod ffi;
pub mod interop;
pub mod logging;
pub mod math;
pub mod ops;
pub mod shape;

pub use config::{OpConfig, OpKind, Precision};
pub use error::{EngineError, Result};
pub use math::{Element, Matrix, MatrixView, MatrixViewMut};
pub use shape::Shape;

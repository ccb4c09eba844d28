//! Dense matrix containers and the scalar types they hold.
//!
//! `Matrix` owns a row-major buffer; `MatrixView` and `MatrixViewMut` borrow
//! one from the caller. All three enforce `len == rows * cols` on
//! construction.
pub mod element;
pub mod matrix;

pub use element::Element;
pub use matrix::{Matrix, MatrixView, MatrixViewMut};

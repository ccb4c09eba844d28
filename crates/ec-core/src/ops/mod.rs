//! Element-wise binary operators and the engine that applies them.
pub mod binary;
pub mod engine;

pub use binary::{Add, BinaryOp, Max, Min, Mul, Sub};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Element-wise operators the engine can apply.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    #[default]
    Add,
    Sub,
    Mul,
    Min,
    Max,
}

impl OpKind {
    pub const ALL: [OpKind; 5] = [
        OpKind::Add,
        OpKind::Sub,
        OpKind::Mul,
        OpKind::Min,
        OpKind::Max,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Sub => "sub",
            OpKind::Mul => "mul",
            OpKind::Min => "min",
            OpKind::Max => "max",
        }
    }

    /// Whether `op(a, b)` and `op(b, a)` are bitwise identical for every pair
    /// of operands, NaN payloads aside.
    pub fn is_commutative(&self) -> bool {
        !matches!(self, OpKind::Sub)
    }
}

impl FromStr for OpKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(OpKind::Add),
            "sub" | "-" => Ok(OpKind::Sub),
            "mul" | "*" => Ok(OpKind::Mul),
            "min" => Ok(OpKind::Min),
            "max" => Ok(OpKind::Max),
            _ => Err(EngineError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Floating-point width of a matrix.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    F32,
    #[default]
    F64,
}

impl Precision {
    pub fn size_of(&self) -> usize {
        match self {
            Precision::F32 => std::mem::size_of::<f32>(),
            Precision::F64 => std::mem::size_of::<f64>(),
        }
    }
}

impl FromStr for Precision {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f32" | "float" | "single" => Ok(Precision::F32),
            "f64" | "double" => Ok(Precision::F64),
            _ => Err(EngineError::UnknownPrecision(s.to_string())),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::F32 => f.write_str("f32"),
            Precision::F64 => f.write_str("f64"),
        }
    }
}

/// Which operation to run and at which width.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpConfig {
    #[serde(default)]
    pub op: OpKind,

    #[serde(default)]
    pub precision: Precision,
}

impl OpConfig {
    pub fn new(op: OpKind, precision: Precision) -> Self {
        Self { op, precision }
    }
}

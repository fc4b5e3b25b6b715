//! Node Operations
//!
//! Defines the arithmetic and comparison variants the node factory
//! understands, and the source-level comparison kinds that select them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticOp {
    // Arithmetic
    Add, Sub, Mul,
    SDiv, UDiv,    // Signed/unsigned division
    SRem, URem,    // Signed/unsigned remainder

    // Bitwise
    And, Or, Xor,
    Shl, LShr, AShr, // Logical/arithmetic shift right
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            ArithmeticOp::Add => "add",
            ArithmeticOp::Sub => "sub",
            ArithmeticOp::Mul => "mul",
            ArithmeticOp::SDiv => "sdiv",
            ArithmeticOp::UDiv => "udiv",
            ArithmeticOp::SRem => "srem",
            ArithmeticOp::URem => "urem",
            ArithmeticOp::And => "and",
            ArithmeticOp::Or => "or",
            ArithmeticOp::Xor => "xor",
            ArithmeticOp::Shl => "shl",
            ArithmeticOp::LShr => "lshr",
            ArithmeticOp::AShr => "ashr",
        };
        write!(f, "{op_str}")
    }
}

/// Comparison operations (all produce a boolean)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    Eq, Ne,
    Slt, Sle, Sgt, Sge, // Signed comparisons
    Ult, Ule, Ugt, Uge, // Unsigned comparisons

    // Ordered floating point comparisons
    FpOrderedEq, FpOrderedNe,
    FpOrderedLt, FpOrderedLe, FpOrderedGt, FpOrderedGe,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            CompareOp::Eq => "eq",
            CompareOp::Ne => "ne",
            CompareOp::Slt => "slt",
            CompareOp::Sle => "sle",
            CompareOp::Sgt => "sgt",
            CompareOp::Sge => "sge",
            CompareOp::Ult => "ult",
            CompareOp::Ule => "ule",
            CompareOp::Ugt => "ugt",
            CompareOp::Uge => "uge",
            CompareOp::FpOrderedEq => "oeq",
            CompareOp::FpOrderedNe => "one",
            CompareOp::FpOrderedLt => "olt",
            CompareOp::FpOrderedLe => "ole",
            CompareOp::FpOrderedGt => "ogt",
            CompareOp::FpOrderedGe => "oge",
        };
        write!(f, "{op_str}")
    }
}

/// Comparison as written in the expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareKind {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareKind {
    pub fn signed(self) -> CompareOp {
        match self {
            CompareKind::Eq => CompareOp::Eq,
            CompareKind::Ne => CompareOp::Ne,
            CompareKind::Lt => CompareOp::Slt,
            CompareKind::Le => CompareOp::Sle,
            CompareKind::Gt => CompareOp::Sgt,
            CompareKind::Ge => CompareOp::Sge,
        }
    }

    pub fn unsigned(self) -> CompareOp {
        match self {
            CompareKind::Eq => CompareOp::Eq,
            CompareKind::Ne => CompareOp::Ne,
            CompareKind::Lt => CompareOp::Ult,
            CompareKind::Le => CompareOp::Ule,
            CompareKind::Gt => CompareOp::Ugt,
            CompareKind::Ge => CompareOp::Uge,
        }
    }

    pub fn floating(self) -> CompareOp {
        match self {
            CompareKind::Eq => CompareOp::FpOrderedEq,
            CompareKind::Ne => CompareOp::FpOrderedNe,
            CompareKind::Lt => CompareOp::FpOrderedLt,
            CompareKind::Le => CompareOp::FpOrderedLe,
            CompareKind::Gt => CompareOp::FpOrderedGt,
            CompareKind::Ge => CompareOp::FpOrderedGe,
        }
    }
}

impl fmt::Display for CompareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            CompareKind::Eq => "==",
            CompareKind::Ne => "!=",
            CompareKind::Lt => "<",
            CompareKind::Le => "<=",
            CompareKind::Gt => ">",
            CompareKind::Ge => ">=",
        };
        write!(f, "{op_str}")
    }
}

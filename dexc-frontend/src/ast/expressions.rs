//! Expression syntax nodes

use super::ops::{BinaryOp, UnaryOp};
use dexc_common::Type;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal; `unsigned` is set by a `u` suffix
    IntLiteral {
        value: i32,
        #[serde(default)]
        unsigned: bool,
    },

    FloatLiteral(f32),

    DoubleLiteral(f64),

    /// Character literal as written, quotes included
    CharLiteral(String),

    Identifier(String),

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    /// condition ? then_expr : else_expr
    Conditional {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },

    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },

    Member {
        object: Box<Expr>,
        member: String,
        is_pointer: bool, // true for ->, false for .
    },

    Index {
        array: Box<Expr>,
        index: Box<Expr>,
    },

    /// Implicit-style conversion to a spelled-out type
    Cast {
        target_type: Type,
        operand: Box<Expr>,
    },

    /// `(typeof(name)) operand`
    PointerCast {
        target: String,
        operand: Box<Expr>,
    },

    SizeofType(Type),

    /// A sub-expression the parser could not produce
    Invalid,
}

impl Expr {
    pub fn int(value: i32) -> Self {
        Expr::IntLiteral { value, unsigned: false }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}

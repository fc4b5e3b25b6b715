//! Evaluation Tree Nodes
//!
//! A plain owned tree mirroring every request the compiler can make of a
//! node factory. Each node is owned by exactly one parent.

use dexc_common::{Identifier, Type, TypeofRef};
use serde::Serialize;
use crate::ir::{ArithmeticOp, CompareOp, Constant, RuntimeType};

/// Evaluation tree node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// Constant: value of type ty
    Constant {
        value: Constant,
        ty: RuntimeType,
    },

    /// Binary arithmetic: op lhs, rhs
    Arithmetic {
        op: ArithmeticOp,
        ty: RuntimeType,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    /// Comparison: op lhs, rhs (yields i1)
    Compare {
        op: CompareOp,
        ty: RuntimeType,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    /// Sign-extend, truncate or float conversion
    SignedCast {
        value: Box<Node>,
        to: RuntimeType,
    },

    /// Zero-extend or truncate
    UnsignedCast {
        value: Box<Node>,
        to: RuntimeType,
    },

    /// Bit reinterpretation
    Bitcast {
        value: Box<Node>,
        from: RuntimeType,
        to: RuntimeType,
    },

    /// Lazily bound variable read
    Variable(Identifier),

    /// Lazily bound call of a named function
    Call {
        callee: Identifier,
        args: Vec<Node>,
    },

    /// Field read: base.field
    Member {
        base: Box<Node>,
        field: String,
    },

    /// Element read: array[index]
    Index {
        array: Box<Node>,
        index: Box<Node>,
    },

    /// Load through a pointer
    Dereference(Box<Node>),

    /// condition ? then_node : else_node
    Ternary {
        condition: Box<Node>,
        then_node: Box<Node>,
        else_node: Box<Node>,
    },

    LogicalAnd {
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    LogicalOr {
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    /// Logical negation
    Not(Box<Node>),

    /// Bitwise complement
    BitFlip(Box<Node>),

    /// Size of a type in bytes, `None` when only the runtime knows it
    Sizeof {
        ty: Type,
        size: Option<u64>,
    },

    /// Unchecked cast to the type the target resolves to
    PointerCast {
        value: Box<Node>,
        target: TypeofRef,
    },
}

impl Node {
    /// Integer constant shorthand
    pub fn int_constant(value: i64, ty: RuntimeType) -> Self {
        Node::Constant {
            value: Constant::Integer(value),
            ty,
        }
    }

    /// Number of nodes in this tree
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|child| child.node_count()).sum::<usize>()
    }

    /// Direct children, left to right
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Constant { .. } | Node::Variable(_) | Node::Sizeof { .. } => Vec::new(),
            Node::Arithmetic { lhs, rhs, .. }
            | Node::Compare { lhs, rhs, .. }
            | Node::LogicalAnd { lhs, rhs }
            | Node::LogicalOr { lhs, rhs } => vec![&**lhs, &**rhs],
            Node::SignedCast { value, .. }
            | Node::UnsignedCast { value, .. }
            | Node::Bitcast { value, .. }
            | Node::PointerCast { value, .. }
            | Node::Not(value)
            | Node::BitFlip(value)
            | Node::Dereference(value)
            | Node::Member { base: value, .. } => vec![&**value],
            Node::Call { args, .. } => args.iter().collect(),
            Node::Index { array, index } => vec![&**array, &**index],
            Node::Ternary { condition, then_node, else_node } => {
                vec![&**condition, &**then_node, &**else_node]
            }
        }
    }
}

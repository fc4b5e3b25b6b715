//! Tree Builder
//!
//! `NodeFactory` implementation that produces the plain `Node` tree.
//! Used by the driver and by tests to inspect what the compiler asked for.

use dexc_common::{Identifier, Type, TypeofRef};
use crate::factory::NodeFactory;
use crate::ir::{ArithmeticOp, CompareOp, Constant, Node, RuntimeType};

/// Builder for `Node` trees
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl NodeFactory for TreeBuilder {
    type Node = Node;

    fn arithmetic(&self, op: ArithmeticOp, ty: RuntimeType, lhs: Node, rhs: Node) -> Node {
        Node::Arithmetic { op, ty, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    fn comparison(&self, op: CompareOp, ty: RuntimeType, lhs: Node, rhs: Node) -> Node {
        Node::Compare { op, ty, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    fn signed_cast(&self, value: Node, to: RuntimeType) -> Node {
        Node::SignedCast { value: Box::new(value), to }
    }

    fn unsigned_cast(&self, value: Node, to: RuntimeType) -> Node {
        Node::UnsignedCast { value: Box::new(value), to }
    }

    fn bitcast(&self, value: Node, to: RuntimeType, from: RuntimeType) -> Node {
        Node::Bitcast { value: Box::new(value), from, to }
    }

    fn constant(&self, value: Constant, ty: RuntimeType) -> Node {
        Node::Constant { value, ty }
    }

    fn variable(&self, ident: &Identifier) -> Node {
        Node::Variable(ident.clone())
    }

    fn call(&self, callee: &Identifier, args: Vec<Node>) -> Node {
        Node::Call { callee: callee.clone(), args }
    }

    fn member(&self, base: Node, field: &str) -> Node {
        Node::Member { base: Box::new(base), field: field.to_string() }
    }

    fn index(&self, array: Node, index: Node) -> Node {
        Node::Index { array: Box::new(array), index: Box::new(index) }
    }

    fn dereference(&self, pointer: Node) -> Node {
        Node::Dereference(Box::new(pointer))
    }

    fn ternary(&self, condition: Node, then_node: Node, else_node: Node) -> Node {
        Node::Ternary {
            condition: Box::new(condition),
            then_node: Box::new(then_node),
            else_node: Box::new(else_node),
        }
    }

    fn logical_and(&self, lhs: Node, rhs: Node) -> Node {
        Node::LogicalAnd { lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    fn logical_or(&self, lhs: Node, rhs: Node) -> Node {
        Node::LogicalOr { lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    fn logical_not(&self, value: Node) -> Node {
        Node::Not(Box::new(value))
    }

    fn bit_flip(&self, value: Node) -> Node {
        Node::BitFlip(Box::new(value))
    }

    fn sizeof(&self, ty: &Type) -> Node {
        Node::Sizeof { ty: ty.clone(), size: ty.size_in_bytes() }
    }

    fn pointer_cast(&self, value: Node, target: &TypeofRef) -> Node {
        Node::PointerCast { value: Box::new(value), target: target.clone() }
    }
}

//! Typed expression handles
//!
//! The unit of composition of the compiler: an executable node paired with
//! the static type of the value it produces. Handles are never changed in
//! place; every operation consumes its operands and returns a new handle.

use crate::factory::NodeFactory;
use dexc_common::{Identifier, Type};

/// The node behind a handle
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode<N> {
    /// A bare name. It stays unresolved so a call can still use it as its
    /// target; any other consumer turns it into a variable node.
    UnresolvedIdentifier(Identifier),

    /// A node built by the factory
    Built(N),
}

impl<N> ExprNode<N> {
    /// Turn this into a factory node
    pub fn materialize<F>(self, factory: &F) -> N
    where
        F: NodeFactory<Node = N> + ?Sized,
    {
        match self {
            ExprNode::UnresolvedIdentifier(ident) => factory.variable(&ident),
            ExprNode::Built(node) => node,
        }
    }
}

/// Typed expression handle
#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr<N> {
    node: ExprNode<N>,
    expr_type: Type,
}

impl<N> TypedExpr<N> {
    pub fn new(node: N, expr_type: Type) -> Self {
        Self {
            node: ExprNode::Built(node),
            expr_type,
        }
    }

    pub fn identifier(ident: Identifier, expr_type: Type) -> Self {
        Self {
            node: ExprNode::UnresolvedIdentifier(ident),
            expr_type,
        }
    }

    pub fn node(&self) -> &ExprNode<N> {
        &self.node
    }

    pub fn get_type(&self) -> &Type {
        &self.expr_type
    }

    pub fn is_unresolved_identifier(&self) -> bool {
        matches!(self.node, ExprNode::UnresolvedIdentifier(_))
    }

    pub fn into_parts(self) -> (ExprNode<N>, Type) {
        (self.node, self.expr_type)
    }

    /// Hand the finished expression over to the runtime
    pub fn into_node<F>(self, factory: &F) -> N
    where
        F: NodeFactory<Node = N> + ?Sized,
    {
        self.node.materialize(factory)
    }
}

/// An operand as the parser hands it over; `None` when the sub-expression
/// could not be produced.
pub type Operand<N> = Option<TypedExpr<N>>;

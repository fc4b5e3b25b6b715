//! Debug expression compiler
//!
//! Turns parser output into a typed evaluation tree. The caller drives the
//! operations in the order the expression's grammar dictates; each one
//! validates its operands eagerly, inserts the implicit conversions the
//! operand types need, and picks the signed, unsigned or floating variant
//! of the operator.
//!
//! - `conversion` - implicit casts
//! - `operators` - binary operators, ternary, sizeof
//! - `unary` - unary operators
//! - `navigation` - member, element and pointer access, explicit casts
//! - `literals` - constants
//! - `references` - variables, calls and typeof

mod conversion;
mod literals;
mod navigation;
mod operators;
mod references;
mod unary;

use crate::factory::NodeFactory;
use crate::typed_expr::{ExprNode, Operand, TypedExpr};
use dexc_common::{DebugExprError, ScopeChain};

/// One compilation of one expression.
///
/// Holds nothing but the node factory and the two scope chains, so each
/// evaluation request builds its own instance.
pub struct DebugExprCompiler<'f, F: NodeFactory + ?Sized> {
    factory: &'f F,
    scopes: ScopeChain,
    global_scopes: ScopeChain,
}

impl<'f, F: NodeFactory + ?Sized> DebugExprCompiler<'f, F> {
    pub fn new(factory: &'f F, scopes: ScopeChain, global_scopes: ScopeChain) -> Self {
        Self {
            factory,
            scopes,
            global_scopes,
        }
    }

    pub fn factory(&self) -> &'f F {
        self.factory
    }

    /// Lexical scopes, innermost first
    pub fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    pub fn global_scopes(&self) -> &ScopeChain {
        &self.global_scopes
    }

    fn materialize(&self, node: ExprNode<F::Node>) -> F::Node {
        node.materialize(self.factory)
    }

    /// Consume a handle and return its factory node
    fn into_node(&self, expr: TypedExpr<F::Node>) -> F::Node {
        expr.into_node(self.factory)
    }
}

/// Check that an operand is present
fn require<N>(operand: impl Into<Operand<N>>, operation: &str) -> Result<TypedExpr<N>, DebugExprError> {
    operand
        .into()
        .ok_or_else(|| DebugExprError::null_operand(operation))
}

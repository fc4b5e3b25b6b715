//! Node construction service
//!
//! The runtime that will evaluate the tree owns the node representation.
//! The compiler only asks it for nodes, one request per primitive
//! operation, and never looks inside the nodes it gets back.

use crate::ir::{ArithmeticOp, CompareOp, Constant, RuntimeType};
use dexc_common::{Identifier, Type, TypeofRef};
use std::fmt;

/// Builds executable nodes for the expression compiler.
///
/// Implementations must be usable from several compilations at once if
/// the debugger evaluates expressions concurrently, hence `&self`.
pub trait NodeFactory {
    /// Opaque executable node
    type Node: Clone + fmt::Debug;

    /// `lhs op rhs`, both operands already of type `ty`
    fn arithmetic(&self, op: ArithmeticOp, ty: RuntimeType, lhs: Self::Node, rhs: Self::Node) -> Self::Node;

    /// Comparison of two operands of type `ty`
    fn comparison(&self, op: CompareOp, ty: RuntimeType, lhs: Self::Node, rhs: Self::Node) -> Self::Node;

    /// Sign-extending, truncating or float conversion
    fn signed_cast(&self, value: Self::Node, to: RuntimeType) -> Self::Node;

    /// Zero-extending or truncating conversion
    fn unsigned_cast(&self, value: Self::Node, to: RuntimeType) -> Self::Node;

    /// Reinterpret the bits of `value`
    fn bitcast(&self, value: Self::Node, to: RuntimeType, from: RuntimeType) -> Self::Node;

    fn constant(&self, value: Constant, ty: RuntimeType) -> Self::Node;

    /// Variable read, bound against the captured scopes at evaluation time
    fn variable(&self, ident: &Identifier) -> Self::Node;

    /// Call of a named function, bound at evaluation time
    fn call(&self, callee: &Identifier, args: Vec<Self::Node>) -> Self::Node;

    fn member(&self, base: Self::Node, field: &str) -> Self::Node;

    fn index(&self, array: Self::Node, index: Self::Node) -> Self::Node;

    fn dereference(&self, pointer: Self::Node) -> Self::Node;

    fn ternary(&self, condition: Self::Node, then_node: Self::Node, else_node: Self::Node) -> Self::Node;

    /// Short-circuit `&&`
    fn logical_and(&self, lhs: Self::Node, rhs: Self::Node) -> Self::Node;

    /// Short-circuit `||`
    fn logical_or(&self, lhs: Self::Node, rhs: Self::Node) -> Self::Node;

    fn logical_not(&self, value: Self::Node) -> Self::Node;

    fn bit_flip(&self, value: Self::Node) -> Self::Node;

    fn sizeof(&self, ty: &Type) -> Self::Node;

    /// Unchecked reinterpretation to the type `target` resolves to
    fn pointer_cast(&self, value: Self::Node, target: &TypeofRef) -> Self::Node;
}

//! Variables, function calls and typeof

use super::{require, DebugExprCompiler};
use crate::factory::NodeFactory;
use crate::typed_expr::{ExprNode, Operand, TypedExpr};
use dexc_common::{DebugExprError, Identifier, Type, TypeofRef};
use log::debug;

impl<F: NodeFactory + ?Sized> DebugExprCompiler<'_, F> {
    /// A reference to `name`.
    ///
    /// The handle keeps the bare identifier so it can still become a call
    /// target. Binding happens when the runtime visits the node, against the
    /// lexical scopes followed by the globals. An unknown name is not an error
    /// here; its type is `Type::Unknown`.
    pub fn create_var(&self, name: &str) -> TypedExpr<F::Node> {
        let ty = self
            .scopes
            .lookup(name)
            .or_else(|| self.global_scopes.lookup(name))
            .map(|symbol| symbol.symbol_type)
            .unwrap_or(Type::Unknown);
        debug!("'{name}' resolves to {ty}");

        let ident = Identifier::new(name, self.scopes.chained(&self.global_scopes));
        TypedExpr::identifier(ident, ty)
    }

    /// `callee(args...)`, where `callee` must be a bare identifier.
    ///
    /// The target is looked up among the globals only. Its return type is
    /// the function's declared one, or `Type::Unknown`.
    pub fn create_function_call(
        &self,
        callee: impl Into<Operand<F::Node>>,
        args: Vec<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let callee = require(callee, "call(...)")?;
        let (node, callee_type) = callee.into_parts();
        let ExprNode::UnresolvedIdentifier(ident) = node else {
            return Err(DebugExprError::type_mismatch(
                "call(...)",
                format!("a value of type {callee_type} is not callable"),
            ));
        };

        let args = args
            .into_iter()
            .map(|arg| require(arg, "call(...)").map(|arg| self.into_node(arg)))
            .collect::<Result<Vec<_>, _>>()?;

        let target = Identifier::new(ident.name(), self.global_scopes.clone());
        let return_type = target
            .resolve()
            .and_then(|symbol| symbol.return_type().cloned())
            .unwrap_or(Type::Unknown);
        debug!("call {target}/{} returns {return_type}", args.len());

        let node = self.factory.call(&target, args);
        Ok(TypedExpr::new(node, return_type))
    }

    /// Deferred type of `name`, looked up in the lexical scopes
    pub fn typeof_node(&self, name: &str) -> TypeofRef {
        TypeofRef::new(name, self.scopes.clone())
    }
}

//! Implicit conversions
//!
//! Every operator that unifies its operands pushes both through
//! `cast_if_necessary`, so operands always share one type when combined.

use super::{require, DebugExprCompiler};
use crate::factory::NodeFactory;
use crate::ir::RuntimeType;
use crate::typed_expr::{Operand, TypedExpr};
use dexc_common::{DebugExprError, Type};
use log::trace;

impl<F: NodeFactory + ?Sized> DebugExprCompiler<'_, F> {
    /// Convert `expr` to `target`, returning it untouched if it already has
    /// that type.
    pub fn cast_if_necessary(
        &self,
        expr: impl Into<Operand<F::Node>>,
        target: &Type,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let expr = require(expr, "cast")?;
        if expr.get_type().equals_type(target) {
            return Ok(expr);
        }
        if !expr.get_type().can_be_cast_to(target) {
            return Err(DebugExprError::invalid_cast(expr.get_type(), target));
        }

        let (node, from) = expr.into_parts();
        let value = self.materialize(node);
        let to = RuntimeType::from(target);

        let converted = if target.is_arithmetic() {
            if target.is_unsigned() {
                trace!("unsigned cast {from} -> {target}");
                self.factory.unsigned_cast(value, to)
            } else {
                trace!("signed cast {from} -> {target}");
                self.factory.signed_cast(value, to)
            }
        } else {
            trace!("bitcast {from} -> {target}");
            self.factory.bitcast(value, to, RuntimeType::from(&from))
        };

        Ok(TypedExpr::new(converted, target.clone()))
    }
}

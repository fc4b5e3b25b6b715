//! Unary operators

use super::{require, DebugExprCompiler};
use crate::factory::NodeFactory;
use crate::ir::ArithmeticOp;
use crate::typed_expr::{Operand, TypedExpr};
use dexc_common::DebugExprError;

impl<F: NodeFactory + ?Sized> DebugExprCompiler<'_, F> {
    /// Apply the unary operator written as `op` (`* + - ~ !`)
    pub fn create_unary_op(
        &self,
        operand: impl Into<Operand<F::Node>>,
        op: char,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let operand = require(operand, &op.to_string())?;
        match op {
            '*' => self.create_dereference(operand),
            '+' => Ok(operand),
            // -x is 0 - x with the usual promotion
            '-' => self.create_arithmetic_op(ArithmeticOp::Sub, self.create_integer_constant(0), operand),
            '~' => {
                let (node, ty) = operand.into_parts();
                let flipped = self.factory.bit_flip(self.materialize(node));
                Ok(TypedExpr::new(flipped, ty))
            }
            '!' => {
                let (node, ty) = operand.into_parts();
                let negated = self.factory.logical_not(self.materialize(node));
                Ok(TypedExpr::new(negated, ty))
            }
            symbol => Err(DebugExprError::UnknownUnaryOperator { symbol }),
        }
    }
}

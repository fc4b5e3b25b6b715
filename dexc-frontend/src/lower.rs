//! Syntax tree lowering
//!
//! Walks an `ast::Expr` bottom-up and drives the compiler operations in the
//! order a parser would. `Expr::Invalid` lowers to a missing operand, so the
//! operation consuming it reports which operator was left without one.

use crate::ast::{BinaryOp, Expr};
use crate::compiler::DebugExprCompiler;
use crate::factory::NodeFactory;
use crate::ir::{ArithmeticOp, CompareKind};
use crate::typed_expr::{Operand, TypedExpr};
use dexc_common::DebugExprError;
use log::trace;

pub struct ExprLowering<'c, 'f, F: NodeFactory + ?Sized> {
    compiler: &'c DebugExprCompiler<'f, F>,
}

impl<'c, 'f, F: NodeFactory + ?Sized> ExprLowering<'c, 'f, F> {
    pub fn new(compiler: &'c DebugExprCompiler<'f, F>) -> Self {
        Self { compiler }
    }

    /// Lower a whole expression; a missing root is reported like any other
    /// missing operand
    pub fn lower_root(&self, expr: &Expr) -> Result<TypedExpr<F::Node>, DebugExprError> {
        self.lower(expr)?
            .ok_or_else(|| DebugExprError::null_operand("expression"))
    }

    pub fn lower(&self, expr: &Expr) -> Result<Operand<F::Node>, DebugExprError> {
        let c = self.compiler;
        trace!("lowering {expr:?}");

        let lowered = match expr {
            Expr::Invalid => return Ok(None),

            Expr::IntLiteral { value, unsigned } => c.create_integer_constant_with_sign(*value, !unsigned),
            Expr::FloatLiteral(value) => c.create_float_constant(*value),
            Expr::DoubleLiteral(value) => c.create_double_constant(*value),
            Expr::CharLiteral(text) => c.create_character_constant(text)?,
            Expr::Identifier(name) => c.create_var(name),

            Expr::Binary { op, left, right } => {
                let left = self.lower(left)?;
                let right = self.lower(right)?;
                self.lower_binary(*op, left, right)?
            }

            Expr::Unary { op, operand } => c.create_unary_op(self.lower(operand)?, op.symbol())?,

            Expr::Conditional { condition, then_expr, else_expr } => c.create_ternary(
                self.lower(condition)?,
                self.lower(then_expr)?,
                self.lower(else_expr)?,
            )?,

            Expr::Call { function, arguments } => {
                let callee = self.lower(function)?;
                let args = arguments
                    .iter()
                    .map(|arg| self.lower(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                c.create_function_call(callee, args)?
            }

            Expr::Member { object, member, is_pointer } => {
                let object = self.lower(object)?;
                if *is_pointer {
                    c.create_object_pointer_member(object, member)?
                } else {
                    c.create_object_member(object, member)?
                }
            }

            Expr::Index { array, index } => {
                c.create_array_element(self.lower(array)?, self.lower(index)?)?
            }

            Expr::Cast { target_type, operand } => c.cast_if_necessary(self.lower(operand)?, target_type)?,

            Expr::PointerCast { target, operand } => {
                let operand = self.lower(operand)?;
                c.create_pointer_cast(operand, &c.typeof_node(target))?
            }

            Expr::SizeofType(ty) => c.create_sizeof(ty),
        };

        Ok(Some(lowered))
    }

    fn lower_binary(
        &self,
        op: BinaryOp,
        left: Operand<F::Node>,
        right: Operand<F::Node>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let c = self.compiler;
        match op {
            BinaryOp::Add => c.create_arithmetic_op(ArithmeticOp::Add, left, right),
            BinaryOp::Sub => c.create_arithmetic_op(ArithmeticOp::Sub, left, right),
            BinaryOp::Mul => c.create_arithmetic_op(ArithmeticOp::Mul, left, right),
            BinaryOp::BitAnd => c.create_arithmetic_op(ArithmeticOp::And, left, right),
            BinaryOp::BitOr => c.create_arithmetic_op(ArithmeticOp::Or, left, right),
            BinaryOp::BitXor => c.create_arithmetic_op(ArithmeticOp::Xor, left, right),
            BinaryOp::Div => c.create_div(left, right),
            BinaryOp::Mod => c.create_rem(left, right),
            BinaryOp::LeftShift => c.create_shift_left(left, right),
            BinaryOp::RightShift => c.create_shift_right(left, right),
            BinaryOp::LogicalAnd => c.create_logical_and(left, right),
            BinaryOp::LogicalOr => c.create_logical_or(left, right),
            BinaryOp::Equal => c.create_compare(left, CompareKind::Eq, right),
            BinaryOp::NotEqual => c.create_compare(left, CompareKind::Ne, right),
            BinaryOp::Less => c.create_compare(left, CompareKind::Lt, right),
            BinaryOp::Greater => c.create_compare(left, CompareKind::Gt, right),
            BinaryOp::LessEqual => c.create_compare(left, CompareKind::Le, right),
            BinaryOp::GreaterEqual => c.create_compare(left, CompareKind::Ge, right),
        }
    }
}

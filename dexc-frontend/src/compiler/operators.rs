//! Binary operators, ternary and sizeof

use super::{require, DebugExprCompiler};
use crate::factory::NodeFactory;
use crate::ir::{ArithmeticOp, CompareKind, RuntimeType};
use crate::typed_expr::{Operand, TypedExpr};
use dexc_common::{common_type, DebugExprError, Type};
use log::debug;

impl<F: NodeFactory + ?Sized> DebugExprCompiler<'_, F> {
    /// Cast both operands to their common type
    fn unify(
        &self,
        left: TypedExpr<F::Node>,
        right: TypedExpr<F::Node>,
    ) -> Result<(F::Node, F::Node, Type), DebugExprError> {
        let common = common_type(left.get_type(), right.get_type());
        let left = self.cast_if_necessary(left, &common)?;
        let right = self.cast_if_necessary(right, &common)?;
        Ok((self.into_node(left), self.into_node(right), common))
    }

    /// Generic arithmetic (`+ - * & | ^`) on the common type
    pub fn create_arithmetic_op(
        &self,
        op: ArithmeticOp,
        left: impl Into<Operand<F::Node>>,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let name = op.to_string();
        let left = require(left, &name)?;
        let right = require(right, &name)?;

        let (lhs, rhs, common) = self.unify(left, right)?;
        let node = self.factory.arithmetic(op, RuntimeType::from(&common), lhs, rhs);
        Ok(TypedExpr::new(node, common))
    }

    pub fn create_div(
        &self,
        left: impl Into<Operand<F::Node>>,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let left = require(left, "/")?;
        let right = require(right, "/")?;

        let (lhs, rhs, common) = self.unify(left, right)?;
        let op = if common.is_unsigned() { ArithmeticOp::UDiv } else { ArithmeticOp::SDiv };
        debug!("'/' on {common} selects {op}");

        let node = self.factory.arithmetic(op, RuntimeType::from(&common), lhs, rhs);
        Ok(TypedExpr::new(node, common))
    }

    /// Remainder.
    ///
    /// The variant and the reported type follow the common type, but the
    /// operands are passed through without conversion.
    pub fn create_rem(
        &self,
        left: impl Into<Operand<F::Node>>,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let left = require(left, "%")?;
        let right = require(right, "%")?;

        let common = common_type(left.get_type(), right.get_type());
        let op = if common.is_unsigned() { ArithmeticOp::URem } else { ArithmeticOp::SRem };
        debug!("'%' on {common} selects {op}");

        let lhs = self.into_node(left);
        let rhs = self.into_node(right);
        let node = self.factory.arithmetic(op, RuntimeType::from(&common), lhs, rhs);
        Ok(TypedExpr::new(node, common))
    }

    pub fn create_shift_left(
        &self,
        left: impl Into<Operand<F::Node>>,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        self.create_shift("<<", ArithmeticOp::Shl, left, right)
    }

    /// `>>` is a logical shift for unsigned left operands, arithmetic otherwise
    pub fn create_shift_right(
        &self,
        left: impl Into<Operand<F::Node>>,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let left = require(left, ">>")?;
        let op = if left.get_type().is_unsigned() { ArithmeticOp::LShr } else { ArithmeticOp::AShr };
        self.create_shift(">>", op, left, right)
    }

    /// Shifts keep the left operand's type; nothing is unified.
    fn create_shift(
        &self,
        name: &str,
        op: ArithmeticOp,
        left: impl Into<Operand<F::Node>>,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let left = require(left, name)?;
        let right = require(right, name)?;

        if !left.get_type().is_integer_type() || !right.get_type().is_integer_type() {
            return Err(DebugExprError::type_mismatch(
                name,
                format!(
                    "shift operands must be integers, found {} and {}",
                    left.get_type(),
                    right.get_type()
                ),
            ));
        }

        let result_type = left.get_type().clone();
        let lhs = self.into_node(left);
        let rhs = self.into_node(right);
        let node = self.factory.arithmetic(op, RuntimeType::from(&result_type), lhs, rhs);
        Ok(TypedExpr::new(node, result_type))
    }

    /// Comparisons always produce `bool`
    pub fn create_compare(
        &self,
        left: impl Into<Operand<F::Node>>,
        kind: CompareKind,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let name = kind.to_string();
        let left = require(left, &name)?;
        let right = require(right, &name)?;

        let (lhs, rhs, common) = self.unify(left, right)?;
        let op = if common.is_floating_type() {
            kind.floating()
        } else if common.is_unsigned() {
            kind.unsigned()
        } else {
            kind.signed()
        };
        debug!("'{kind}' on {common} selects {op}");

        let node = self.factory.comparison(op, RuntimeType::from(&common), lhs, rhs);
        Ok(TypedExpr::new(node, Type::Bool))
    }

    pub fn create_logical_and(
        &self,
        left: impl Into<Operand<F::Node>>,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let left = require(left, "&&")?;
        let right = require(right, "&&")?;
        let node = self.factory.logical_and(self.into_node(left), self.into_node(right));
        Ok(TypedExpr::new(node, Type::Bool))
    }

    pub fn create_logical_or(
        &self,
        left: impl Into<Operand<F::Node>>,
        right: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let left = require(left, "||")?;
        let right = require(right, "||")?;
        let node = self.factory.logical_or(self.into_node(left), self.into_node(right));
        Ok(TypedExpr::new(node, Type::Bool))
    }

    /// `condition ? then : else`
    ///
    /// The branches are not converted; the common type is only what the
    /// handle reports.
    pub fn create_ternary(
        &self,
        condition: impl Into<Operand<F::Node>>,
        then_expr: impl Into<Operand<F::Node>>,
        else_expr: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let condition = require(condition, "? :")?;
        let then_expr = require(then_expr, "? :")?;
        let else_expr = require(else_expr, "? :")?;

        let result_type = common_type(then_expr.get_type(), else_expr.get_type());
        let node = self.factory.ternary(
            self.into_node(condition),
            self.into_node(then_expr),
            self.into_node(else_expr),
        );
        Ok(TypedExpr::new(node, result_type))
    }

    /// `sizeof(T)` is always a 32-bit signed integer
    pub fn create_sizeof(&self, ty: &Type) -> TypedExpr<F::Node> {
        TypedExpr::new(self.factory.sizeof(ty), Type::int32())
    }
}

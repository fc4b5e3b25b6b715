//! Member, element and pointer navigation, and explicit pointer casts

use super::{require, DebugExprCompiler};
use crate::factory::NodeFactory;
use crate::typed_expr::{Operand, TypedExpr};
use dexc_common::{DebugExprError, Type, TypeofRef};
use log::debug;

impl<F: NodeFactory + ?Sized> DebugExprCompiler<'_, F> {
    /// `receiver.field`
    pub fn create_object_member(
        &self,
        receiver: impl Into<Operand<F::Node>>,
        field: &str,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let receiver = require(receiver, ".")?;
        let Some(field_type) = receiver.get_type().field(field).cloned() else {
            return Err(DebugExprError::type_mismatch(
                ".",
                format!("{} has no member '{field}'", receiver.get_type()),
            ));
        };

        let node = self.factory.member(self.into_node(receiver), field);
        Ok(TypedExpr::new(node, field_type))
    }

    /// `*pointer`, typed as the pointee
    pub fn create_dereference(
        &self,
        pointer: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let pointer = require(pointer, "*")?;
        let Some(inner) = pointer.get_type().inner_type().cloned() else {
            return Err(DebugExprError::type_mismatch(
                "*",
                format!("cannot dereference {}", pointer.get_type()),
            ));
        };

        let node = self.factory.dereference(self.into_node(pointer));
        Ok(TypedExpr::new(node, inner))
    }

    /// `receiver->field`
    pub fn create_object_pointer_member(
        &self,
        receiver: impl Into<Operand<F::Node>>,
        field: &str,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let receiver = require(receiver, "->")?;
        let dereferenced = self.create_dereference(receiver)?;
        self.create_object_member(dereferenced, field)
    }

    /// `array[index]`, typed as the element
    pub fn create_array_element(
        &self,
        array: impl Into<Operand<F::Node>>,
        index: impl Into<Operand<F::Node>>,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let array = require(array, "[]")?;
        let index = require(index, "[]")?;

        let element = match array.get_type() {
            Type::Unknown => None,
            ty => ty.inner_type().cloned(),
        };
        let Some(element) = element else {
            return Err(DebugExprError::type_mismatch(
                "[]",
                format!("cannot index into {}", array.get_type()),
            ));
        };

        let node = self.factory.index(self.into_node(array), self.into_node(index));
        Ok(TypedExpr::new(node, element))
    }

    /// Explicit cast to the type `target` resolves to.
    ///
    /// Explicit casts are unchecked: no eligibility test, always a
    /// reinterpretation.
    pub fn create_pointer_cast(
        &self,
        expr: impl Into<Operand<F::Node>>,
        target: &TypeofRef,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let expr = require(expr, "pointer cast")?;
        let target_type = target.resolve().unwrap_or(Type::Unknown);
        debug!("pointer cast {} -> {target_type} ({})", expr.get_type(), target.name());

        let node = self.factory.pointer_cast(self.into_node(expr), target);
        Ok(TypedExpr::new(node, target_type))
    }
}

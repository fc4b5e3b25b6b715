//! Error handling for the debug expression compiler
//!
//! Every error is raised while the tree is being built and aborts the
//! expression being compiled. None of them are fatal to the debugger.

use crate::types::Type;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DebugExprError {
    #[error("Missing operand for '{operation}'")]
    NullOperand { operation: String },

    #[error("Type error in '{operation}': {details}")]
    TypeMismatch { operation: String, details: String },

    #[error("Cast from {from} to {to} not possible")]
    InvalidCast { from: Type, to: Type },

    /// `value` is the byte the constant node was built over, if the
    /// literal got far enough to have one
    #[error("Invalid character literal {text}")]
    InvalidLiteral { text: String, value: Option<u8> },

    #[error("Unknown unary operator '{symbol}'")]
    UnknownUnaryOperator { symbol: char },
}

impl DebugExprError {
    /// Create a missing operand error
    pub fn null_operand(operation: impl Into<String>) -> Self {
        DebugExprError::NullOperand {
            operation: operation.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(operation: impl Into<String>, details: impl Into<String>) -> Self {
        DebugExprError::TypeMismatch {
            operation: operation.into(),
            details: details.into(),
        }
    }

    /// Create an invalid cast error
    pub fn invalid_cast(from: &Type, to: &Type) -> Self {
        DebugExprError::InvalidCast {
            from: from.clone(),
            to: to.clone(),
        }
    }
}

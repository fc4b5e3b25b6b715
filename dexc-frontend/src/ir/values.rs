//! Constant Values
//!
//! Literal payloads handed to the node factory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Constant payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    /// Integer of any width, sign-extended
    Integer(i64),

    /// Single precision float
    Float(f32),

    /// Double precision float
    Double(f64),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Integer(val) => write!(f, "{val}"),
            Constant::Float(val) => write!(f, "{val:?}"),
            Constant::Double(val) => write!(f, "{val:?}"),
        }
    }
}

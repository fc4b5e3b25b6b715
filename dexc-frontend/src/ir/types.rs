//! Runtime Type Tags
//!
//! The node factory does not see full type descriptors; every primitive
//! node is tagged with the machine-level type it operates on.

use dexc_common::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-level type tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeType {
    /// Void type
    Void,

    /// Integer types with bit width
    I1,   // Boolean
    I8,
    I16,
    I32,
    I64,
    /// Integer width without a dedicated tag
    IntN(u32),

    /// Floating point types
    Float,
    Double,
    X86Fp80,
    FloatN(u32),

    /// Any pointer
    Ptr,

    /// Array of elements
    Array(Box<RuntimeType>),

    /// Named aggregate
    Struct(String),

    /// Type of an unresolved symbol, bound by the runtime
    Opaque,
}

impl RuntimeType {
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            RuntimeType::I1 | RuntimeType::I8 | RuntimeType::I16 | RuntimeType::I32 | RuntimeType::I64 | RuntimeType::IntN(_)
        )
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, RuntimeType::Float | RuntimeType::Double | RuntimeType::X86Fp80 | RuntimeType::FloatN(_))
    }
}

impl From<&Type> for RuntimeType {
    fn from(ty: &Type) -> Self {
        match ty {
            Type::Void => RuntimeType::Void,
            Type::Bool => RuntimeType::I1,
            Type::Int { width, .. } => match width {
                1 => RuntimeType::I1,
                8 => RuntimeType::I8,
                16 => RuntimeType::I16,
                32 => RuntimeType::I32,
                64 => RuntimeType::I64,
                other => RuntimeType::IntN(*other),
            },
            Type::Float { width } => match width {
                32 => RuntimeType::Float,
                64 => RuntimeType::Double,
                80 => RuntimeType::X86Fp80,
                other => RuntimeType::FloatN(*other),
            },
            Type::Pointer(_) => RuntimeType::Ptr,
            Type::Array(inner) => RuntimeType::Array(Box::new(RuntimeType::from(&**inner))),
            Type::Aggregate { name, .. } => RuntimeType::Struct(name.clone()),
            Type::Unknown => RuntimeType::Opaque,
        }
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeType::Void => write!(f, "void"),
            RuntimeType::I1 => write!(f, "i1"),
            RuntimeType::I8 => write!(f, "i8"),
            RuntimeType::I16 => write!(f, "i16"),
            RuntimeType::I32 => write!(f, "i32"),
            RuntimeType::I64 => write!(f, "i64"),
            RuntimeType::IntN(bits) => write!(f, "i{bits}"),
            RuntimeType::Float => write!(f, "float"),
            RuntimeType::Double => write!(f, "double"),
            RuntimeType::X86Fp80 => write!(f, "x86_fp80"),
            RuntimeType::FloatN(bits) => write!(f, "f{bits}"),
            RuntimeType::Ptr => write!(f, "ptr"),
            RuntimeType::Array(element) => write!(f, "[{element}]"),
            RuntimeType::Struct(name) => write!(f, "%{name}"),
            RuntimeType::Opaque => write!(f, "opaque"),
        }
    }
}

//! Type descriptors for debug expressions
//!
//! Every value flowing through the expression compiler carries one of
//! these descriptors. Descriptors compare structurally: two `int`
//! descriptors built in different places are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub field_type: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: Type) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Static type of a debug expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Void type
    Void,

    /// Boolean type (_Bool)
    Bool,

    /// Integer of the given bit width
    Int { width: u32, signed: bool },

    /// IEEE floating point of the given bit width
    Float { width: u32 },

    /// Pointer to another type
    Pointer(Box<Type>),

    /// Array of elements
    Array(Box<Type>),

    /// Struct or union with its members
    Aggregate {
        name: String,
        #[serde(default)]
        fields: Vec<Field>,
    },

    /// Type of a symbol the scope provider could not resolve
    Unknown,
}

impl Type {
    pub fn int(width: u32, signed: bool) -> Self {
        Type::Int { width, signed }
    }

    /// 32-bit signed integer, the type of integer literals and `sizeof`
    pub fn int32() -> Self {
        Type::int(32, true)
    }

    pub fn uint32() -> Self {
        Type::int(32, false)
    }

    pub fn float(width: u32) -> Self {
        Type::Float { width }
    }

    pub fn pointer_to(inner: Type) -> Self {
        Type::Pointer(Box::new(inner))
    }

    pub fn array_of(inner: Type) -> Self {
        Type::Array(Box::new(inner))
    }

    pub fn aggregate(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Type::Aggregate {
            name: name.into(),
            fields,
        }
    }

    pub fn is_integer_type(&self) -> bool {
        matches!(self, Type::Int { .. })
    }

    pub fn is_floating_type(&self) -> bool {
        matches!(self, Type::Float { .. })
    }

    /// True only for unsigned integers
    pub fn is_unsigned(&self) -> bool {
        matches!(self, Type::Int { signed: false, .. })
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    /// Bool, integer or floating point
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Type::Bool | Type::Int { .. } | Type::Float { .. })
    }

    /// Bit width of integers and floats
    pub fn width(&self) -> Option<u32> {
        match self {
            Type::Bool => Some(1),
            Type::Int { width, .. } | Type::Float { width } => Some(*width),
            _ => None,
        }
    }

    /// Get the pointee or element type, one level deep
    pub fn inner_type(&self) -> Option<&Type> {
        match self {
            Type::Pointer(inner) | Type::Array(inner) => Some(inner),
            _ => None,
        }
    }

    /// Look up a member of an aggregate
    pub fn field(&self, name: &str) -> Option<&Type> {
        match self {
            Type::Aggregate { fields, .. } => fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| &field.field_type),
            _ => None,
        }
    }

    /// Structural equality
    pub fn equals_type(&self, other: &Type) -> bool {
        self == other
    }

    /// Size in bytes, when it is statically known
    pub fn size_in_bytes(&self) -> Option<u64> {
        match self {
            Type::Void | Type::Unknown => None,
            Type::Bool => Some(1),
            Type::Int { width, .. } | Type::Float { width } => Some(u64::from(width.div_ceil(8))),
            Type::Pointer(_) => Some(8),
            // Element count is not part of the descriptor
            Type::Array(_) => None,
            Type::Aggregate { fields, .. } => {
                // Fields in declaration order, each at its natural alignment
                let mut offset = 0u64;
                for field in fields {
                    let align = field.field_type.align_in_bytes()?;
                    offset = offset.next_multiple_of(align);
                    offset = offset.checked_add(field.field_type.size_in_bytes()?)?;
                }
                Some(offset.next_multiple_of(self.align_in_bytes()?))
            }
        }
    }

    /// Alignment in bytes, when the size is statically known
    pub fn align_in_bytes(&self) -> Option<u64> {
        match self {
            Type::Void | Type::Unknown | Type::Array(_) => None,
            Type::Bool | Type::Int { .. } | Type::Float { .. } | Type::Pointer(_) => {
                self.size_in_bytes().map(|size| size.next_power_of_two().min(8))
            }
            Type::Aggregate { fields, .. } => {
                let mut align = 1;
                for field in fields {
                    align = align.max(field.field_type.align_in_bytes()?);
                }
                Some(align)
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Bool => write!(f, "bool"),
            Type::Int { width: 8, signed: true } => write!(f, "signed char"),
            Type::Int { width: 8, signed: false } => write!(f, "unsigned char"),
            Type::Int { width: 16, signed: true } => write!(f, "short"),
            Type::Int { width: 16, signed: false } => write!(f, "unsigned short"),
            Type::Int { width: 32, signed: true } => write!(f, "int"),
            Type::Int { width: 32, signed: false } => write!(f, "unsigned int"),
            Type::Int { width: 64, signed: true } => write!(f, "long"),
            Type::Int { width: 64, signed: false } => write!(f, "unsigned long"),
            Type::Int { width, signed: true } => write!(f, "i{width}"),
            Type::Int { width, signed: false } => write!(f, "u{width}"),
            Type::Float { width: 32 } => write!(f, "float"),
            Type::Float { width: 64 } => write!(f, "double"),
            Type::Float { width: 80 } => write!(f, "long double"),
            Type::Float { width } => write!(f, "f{width}"),
            Type::Pointer(inner) => write!(f, "{inner}*"),
            Type::Array(inner) => write!(f, "{inner}[]"),
            Type::Aggregate { name, .. } => write!(f, "struct {name}"),
            Type::Unknown => write!(f, "<unknown>"),
        }
    }
}

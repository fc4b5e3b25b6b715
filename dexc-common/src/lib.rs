//! Debug Expression Compiler - Common Types and Utilities
//! 
//! This crate contains the type descriptors, promotion rules, scope
//! contracts and error definitions shared by the expression compiler
//! and its driver.

pub mod error;
pub mod types;
pub mod promotion;
pub mod scope;

pub use error::DebugExprError;
pub use types::{Field, Type};
pub use promotion::common_type;
pub use scope::{Identifier, MapScope, Scope, ScopeChain, Symbol, SymbolKind, TypeofRef};

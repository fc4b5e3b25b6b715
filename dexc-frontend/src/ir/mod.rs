//! Evaluation tree representation
//! 
//! The node factory contract speaks in terms of these operations, type
//! tags and constants. `Node` and `TreeBuilder` are a concrete factory
//! that builds an inspectable, serializable tree.
//! 
//! ## Architecture
//! 
//! - `types` - Runtime type tags (RuntimeType)
//! - `values` - Constant payloads
//! - `ops` - Arithmetic and comparison variants
//! - `node` - Evaluation tree nodes
//! - `builder` - Tree construction through `NodeFactory`

// Public exports - clean API surface
pub use self::types::RuntimeType;
pub use self::values::Constant;
pub use self::ops::{ArithmeticOp, CompareKind, CompareOp};
pub use self::node::Node;
pub use self::builder::TreeBuilder;

// Internal modules
mod types;
mod values;
mod ops;
mod node;
mod builder;

#[cfg(test)]
mod tests;

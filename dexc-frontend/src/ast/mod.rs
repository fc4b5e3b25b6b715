//! Syntax tree for debug expressions
//!
//! The shape a parser hands over before any typing happens. Nodes carry
//! names and literal text only; types come from the scopes during lowering.
//! The tree is serde-enabled so it can be read from JSON.

pub mod ops;
pub mod expressions;

pub use ops::{BinaryOp, UnaryOp};
pub use expressions::Expr;

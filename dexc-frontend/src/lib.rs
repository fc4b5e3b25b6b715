//! Debug Expression Compiler - Frontend
//!
//! This crate turns debug watch expressions into typed evaluation trees:
//! - AST: the syntax tree a parser hands over
//! - Compiler: typed tree construction with implicit conversions
//! - Factory: the node-construction contract the runtime implements
//! - IR: a plain node tree implementing that contract

pub mod ast;
pub mod compiler;
pub mod factory;
pub mod ir;
pub mod lower;
pub mod typed_expr;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use compiler::DebugExprCompiler;
pub use factory::NodeFactory;
pub use ir::{Node, TreeBuilder};
pub use lower::ExprLowering;
pub use typed_expr::{ExprNode, Operand, TypedExpr};

use dexc_common::{DebugExprError, ScopeChain, Type};
use serde::Serialize;

/// A finished expression as the CLI reports it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledExpr {
    pub expr_type: Type,
    pub tree: Node,
}

/// High-level frontend interface
pub struct DebugExprFrontend;

impl DebugExprFrontend {
    /// Compile a syntax tree with the given factory
    pub fn compile<F: NodeFactory + ?Sized>(
        factory: &F,
        expr: &Expr,
        scopes: ScopeChain,
        global_scopes: ScopeChain,
    ) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let compiler = DebugExprCompiler::new(factory, scopes, global_scopes);
        ExprLowering::new(&compiler).lower_root(expr)
    }

    /// Compile into the plain node tree
    pub fn compile_to_tree(
        expr: &Expr,
        scopes: ScopeChain,
        global_scopes: ScopeChain,
    ) -> Result<CompiledExpr, DebugExprError> {
        let builder = TreeBuilder::new();
        let compiled = Self::compile(&builder, expr, scopes, global_scopes)?;
        let (node, expr_type) = compiled.into_parts();
        Ok(CompiledExpr {
            expr_type,
            tree: node.materialize(&builder),
        })
    }
}

//! Compiling JSON syntax trees against JSON scope descriptions

use dexc_common::{DebugExprError, Identifier, MapScope, ScopeChain, Type, TypeofRef};
use dexc_frontend::ir::{ArithmeticOp, CompareOp, Constant, RuntimeType};
use dexc_frontend::{DebugExprFrontend, Expr, Node, NodeFactory};
use pretty_assertions::assert_eq;

/// Renders every node as an s-expression, standing in for a runtime with
/// its own node representation
struct SexprFactory;

impl NodeFactory for SexprFactory {
    type Node = String;

    fn arithmetic(&self, op: ArithmeticOp, ty: RuntimeType, lhs: String, rhs: String) -> String {
        format!("({op}:{ty} {lhs} {rhs})")
    }

    fn comparison(&self, op: CompareOp, ty: RuntimeType, lhs: String, rhs: String) -> String {
        format!("({op}:{ty} {lhs} {rhs})")
    }

    fn signed_cast(&self, value: String, to: RuntimeType) -> String {
        format!("(sext:{to} {value})")
    }

    fn unsigned_cast(&self, value: String, to: RuntimeType) -> String {
        format!("(zext:{to} {value})")
    }

    fn bitcast(&self, value: String, to: RuntimeType, from: RuntimeType) -> String {
        format!("(bitcast:{from}->{to} {value})")
    }

    fn constant(&self, value: Constant, _ty: RuntimeType) -> String {
        value.to_string()
    }

    fn variable(&self, ident: &Identifier) -> String {
        ident.name().to_string()
    }

    fn call(&self, callee: &Identifier, args: Vec<String>) -> String {
        format!("({callee} {})", args.join(" "))
    }

    fn member(&self, base: String, field: &str) -> String {
        format!("(. {base} {field})")
    }

    fn index(&self, array: String, index: String) -> String {
        format!("([] {array} {index})")
    }

    fn dereference(&self, pointer: String) -> String {
        format!("(* {pointer})")
    }

    fn ternary(&self, condition: String, then_node: String, else_node: String) -> String {
        format!("(? {condition} {then_node} {else_node})")
    }

    fn logical_and(&self, lhs: String, rhs: String) -> String {
        format!("(&& {lhs} {rhs})")
    }

    fn logical_or(&self, lhs: String, rhs: String) -> String {
        format!("(|| {lhs} {rhs})")
    }

    fn logical_not(&self, value: String) -> String {
        format!("(! {value})")
    }

    fn bit_flip(&self, value: String) -> String {
        format!("(~ {value})")
    }

    fn sizeof(&self, ty: &Type) -> String {
        format!("(sizeof {ty})")
    }

    fn pointer_cast(&self, value: String, target: &TypeofRef) -> String {
        format!("(cast typeof({}) {value})", target.name())
    }
}

const LOCALS: &str = r#"[
    { "name": "count", "symbol_type": { "int": { "width": 16, "signed": false } } },
    { "name": "ratio", "symbol_type": { "float": { "width": 64 } } },
    { "name": "items", "symbol_type": { "pointer": { "aggregate": {
        "name": "item",
        "fields": [
            { "name": "id", "field_type": { "int": { "width": 32, "signed": true } } },
            { "name": "next", "field_type": { "pointer": "void" } }
        ]
    } } } }
]"#;

const GLOBALS: &str = r#"[
    { "name": "lookup", "symbol_type": { "int": { "width": 8, "signed": true } }, "kind": "function" }
]"#;

fn scopes() -> (ScopeChain, ScopeChain) {
    let locals: MapScope = serde_json::from_str(LOCALS).unwrap();
    let globals: MapScope = serde_json::from_str(GLOBALS).unwrap();
    (ScopeChain::single(locals), ScopeChain::single(globals))
}

fn parse(json: &str) -> Expr {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_mixed_arithmetic_renders_casts() {
    let (locals, globals) = scopes();
    let expr = parse(
        r#"{ "Binary": {
            "op": "Mul",
            "left": { "Identifier": "count" },
            "right": { "Identifier": "ratio" }
        } }"#,
    );

    let compiled = DebugExprFrontend::compile(&SexprFactory, &expr, locals, globals).unwrap();
    assert_eq!(compiled.get_type(), &Type::float(64));
    assert_eq!(
        compiled.into_node(&SexprFactory),
        "(mul:double (sext:double count) ratio)"
    );
}

#[test]
fn test_pointer_member_and_call() {
    let (locals, globals) = scopes();
    let expr = parse(
        r#"{ "Call": {
            "function": { "Identifier": "lookup" },
            "arguments": [
                { "Member": { "object": { "Identifier": "items" }, "member": "id", "is_pointer": true } },
                { "CharLiteral": "'\\n'" }
            ]
        } }"#,
    );

    let compiled = DebugExprFrontend::compile(&SexprFactory, &expr, locals, globals).unwrap();
    assert_eq!(compiled.get_type(), &Type::int(8, true));
    assert_eq!(compiled.into_node(&SexprFactory), "(lookup (. (* items) id) 10)");
}

#[test]
fn test_tree_output_is_serializable() {
    let (locals, globals) = scopes();
    let expr = parse(r#"{ "Unary": { "op": "LogicalNot", "operand": { "IntLiteral": { "value": 0 } } } }"#);

    let compiled = DebugExprFrontend::compile_to_tree(&expr, locals, globals).unwrap();
    assert_eq!(compiled.tree, Node::Not(Box::new(Node::int_constant(0, RuntimeType::I32))));
    assert_eq!(
        serde_json::to_value(&compiled).unwrap(),
        serde_json::json!({
            "expr_type": { "int": { "width": 32, "signed": true } },
            "tree": { "Not": { "Constant": { "value": { "Integer": 0 }, "ty": "I32" } } }
        })
    );
}

#[test]
fn test_errors_surface_from_nested_operands() {
    let (locals, globals) = scopes();

    let bad_escape = parse(
        r#"{ "Binary": { "op": "Add", "left": { "IntLiteral": { "value": 1 } }, "right": { "CharLiteral": "'\\t'" } } }"#,
    );
    assert_eq!(
        DebugExprFrontend::compile_to_tree(&bad_escape, locals.clone(), globals.clone()),
        Err(DebugExprError::InvalidLiteral { text: r"'\t'".to_string(), value: Some(b'\\') })
    );

    let hole = parse(r#"{ "Binary": { "op": "Sub", "left": "Invalid", "right": { "Identifier": "count" } } }"#);
    assert_eq!(
        DebugExprFrontend::compile_to_tree(&hole, locals.clone(), globals.clone()),
        Err(DebugExprError::null_operand("sub"))
    );

    let not_callable = parse(
        r#"{ "Call": { "function": { "Binary": { "op": "Add",
            "left": { "IntLiteral": { "value": 1 } }, "right": { "IntLiteral": { "value": 2 } } } },
            "arguments": [ { "IntLiteral": { "value": 3 } } ] } }"#,
    );
    assert!(matches!(
        DebugExprFrontend::compile_to_tree(&not_callable, locals, globals),
        Err(DebugExprError::TypeMismatch { .. })
    ));
}

//! Unit tests for the IR module

use super::*;
use crate::factory::NodeFactory;
use dexc_common::{Field, Identifier, ScopeChain, Type};

#[test]
fn test_runtime_type_tags() {
    assert_eq!(RuntimeType::from(&Type::Bool), RuntimeType::I1);
    assert_eq!(RuntimeType::from(&Type::int(8, false)), RuntimeType::I8);
    assert_eq!(RuntimeType::from(&Type::int32()), RuntimeType::I32);
    assert_eq!(RuntimeType::from(&Type::int(24, true)), RuntimeType::IntN(24));
    assert_eq!(RuntimeType::from(&Type::float(32)), RuntimeType::Float);
    assert_eq!(RuntimeType::from(&Type::float(80)), RuntimeType::X86Fp80);
    assert_eq!(RuntimeType::from(&Type::pointer_to(Type::Void)), RuntimeType::Ptr);
    assert_eq!(
        RuntimeType::from(&Type::array_of(Type::int(16, true))),
        RuntimeType::Array(Box::new(RuntimeType::I16))
    );
    assert_eq!(
        RuntimeType::from(&Type::aggregate("pair", vec![Field::new("a", Type::Bool)])),
        RuntimeType::Struct("pair".to_string())
    );
    assert_eq!(RuntimeType::from(&Type::Unknown), RuntimeType::Opaque);

    assert!(RuntimeType::IntN(24).is_integer());
    assert!(RuntimeType::Double.is_floating());
    assert!(!RuntimeType::Ptr.is_integer());
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", ArithmeticOp::UDiv), "udiv");
    assert_eq!(format!("{}", CompareOp::FpOrderedNe), "one");
    assert_eq!(format!("{}", CompareKind::Le), "<=");
    assert_eq!(format!("{}", RuntimeType::Array(Box::new(RuntimeType::I8))), "[i8]");
    assert_eq!(format!("{}", Constant::Integer(42)), "42");
    assert_eq!(format!("{}", Constant::Float(1.5)), "1.5");
}

#[test]
fn test_compare_kind_variants() {
    assert_eq!(CompareKind::Lt.signed(), CompareOp::Slt);
    assert_eq!(CompareKind::Lt.unsigned(), CompareOp::Ult);
    assert_eq!(CompareKind::Lt.floating(), CompareOp::FpOrderedLt);

    // Equality does not depend on signedness
    assert_eq!(CompareKind::Eq.signed(), CompareKind::Eq.unsigned());
    assert_eq!(CompareKind::Ne.unsigned(), CompareOp::Ne);
    assert_eq!(CompareKind::Ne.floating(), CompareOp::FpOrderedNe);
}

#[test]
fn test_tree_builder() {
    let builder = TreeBuilder::new();

    let lhs = builder.constant(Constant::Integer(3), RuntimeType::I32);
    let rhs = builder.constant(Constant::Integer(4), RuntimeType::I32);
    let sum = builder.arithmetic(ArithmeticOp::Add, RuntimeType::I32, lhs, rhs);

    assert_eq!(
        sum,
        Node::Arithmetic {
            op: ArithmeticOp::Add,
            ty: RuntimeType::I32,
            lhs: Box::new(Node::int_constant(3, RuntimeType::I32)),
            rhs: Box::new(Node::int_constant(4, RuntimeType::I32)),
        }
    );
    assert_eq!(sum.node_count(), 3);
    assert_eq!(sum.children().len(), 2);
}

#[test]
fn test_tree_builder_sizeof() {
    let builder = TreeBuilder::new();
    assert_eq!(
        builder.sizeof(&Type::int(64, true)),
        Node::Sizeof { ty: Type::int(64, true), size: Some(8) }
    );
    assert_eq!(
        builder.sizeof(&Type::Void),
        Node::Sizeof { ty: Type::Void, size: None }
    );
}

#[test]
fn test_call_children_are_arguments() {
    let builder = TreeBuilder::new();
    let callee = Identifier::new("foo", ScopeChain::empty());
    let call = builder.call(
        &callee,
        vec![
            Node::int_constant(1, RuntimeType::I32),
            builder.variable(&Identifier::new("x", ScopeChain::empty())),
        ],
    );

    assert_eq!(call.children().len(), 2);
    assert_eq!(call.node_count(), 3);
}

#[test]
fn test_node_serialization() {
    let node = TreeBuilder::new().logical_not(Node::int_constant(0, RuntimeType::I1));
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Not": { "Constant": { "value": { "Integer": 0 }, "ty": "I1" } }
        })
    );

    let var = TreeBuilder::new().variable(&Identifier::new("x", ScopeChain::empty()));
    let json = serde_json::to_value(&var).unwrap();
    assert_eq!(json, serde_json::json!({ "Variable": { "name": "x" } }));
}

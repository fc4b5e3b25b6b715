//! Literal constants

use super::DebugExprCompiler;
use crate::factory::NodeFactory;
use crate::ir::{Constant, RuntimeType};
use crate::typed_expr::TypedExpr;
use dexc_common::{DebugExprError, Type};
use log::trace;

impl<F: NodeFactory + ?Sized> DebugExprCompiler<'_, F> {
    /// Integer literal, `int` unless a suffix says otherwise
    pub fn create_integer_constant(&self, value: i32) -> TypedExpr<F::Node> {
        self.create_integer_constant_with_sign(value, true)
    }

    pub fn create_integer_constant_with_sign(&self, value: i32, signed: bool) -> TypedExpr<F::Node> {
        let ty = Type::int(32, signed);
        let node = self.factory.constant(Constant::Integer(i64::from(value)), RuntimeType::I32);
        TypedExpr::new(node, ty)
    }

    pub fn create_float_constant(&self, value: f32) -> TypedExpr<F::Node> {
        let node = self.factory.constant(Constant::Float(value), RuntimeType::Float);
        TypedExpr::new(node, Type::float(32))
    }

    pub fn create_double_constant(&self, value: f64) -> TypedExpr<F::Node> {
        let node = self.factory.constant(Constant::Double(value), RuntimeType::Double);
        TypedExpr::new(node, Type::float(64))
    }

    /// Character literal as written, quotes included (`'a'`, `'\n'`).
    ///
    /// Recognized escapes are `\n \r \' \\ \"`. For any other escape the
    /// constant is still built over the backslash byte and the error carries
    /// that byte. Characters outside one byte keep the low byte of their
    /// code point.
    pub fn create_character_constant(&self, text: &str) -> Result<TypedExpr<F::Node>, DebugExprError> {
        let malformed = || DebugExprError::InvalidLiteral {
            text: text.to_string(),
            value: None,
        };

        let mut chars = text.chars();
        if text.chars().count() < 3 || chars.next() != Some('\'') {
            return Err(malformed());
        }
        let Some(first) = chars.next() else {
            return Err(malformed());
        };

        let mut valid = true;
        let mut value = low_byte(first);
        if first == '\\' {
            match chars.next() {
                Some('n') => value = b'\n',
                Some('r') => value = b'\r',
                Some('\'') => value = b'\'',
                Some('\\') => value = b'\\',
                Some('"') => value = b'"',
                Some(_) => valid = false,
                None => return Err(malformed()),
            }
        }

        let node = self.factory.constant(Constant::Integer(i64::from(value)), RuntimeType::I8);
        if !valid {
            trace!("unrecognized escape in {text}");
            return Err(DebugExprError::InvalidLiteral {
                text: text.to_string(),
                value: Some(value),
            });
        }
        Ok(TypedExpr::new(node, Type::int(8, false)))
    }
}

fn low_byte(c: char) -> u8 {
    (u32::from(c) & 0xff) as u8
}

#[cfg(test)]
mod tests {
    use crate::compiler::DebugExprCompiler;
    use crate::ir::{Constant, Node, RuntimeType, TreeBuilder};
    use dexc_common::{DebugExprError, ScopeChain, Type};
    use pretty_assertions::assert_eq;

    fn compiler(builder: &TreeBuilder) -> DebugExprCompiler<'_, TreeBuilder> {
        DebugExprCompiler::new(builder, ScopeChain::empty(), ScopeChain::empty())
    }

    #[test]
    fn test_integer_constants() {
        let builder = TreeBuilder::new();
        let c = compiler(&builder);

        let signed = c.create_integer_constant(-3);
        assert_eq!(signed.get_type(), &Type::int32());
        assert_eq!(signed.into_node(&builder), Node::int_constant(-3, RuntimeType::I32));

        let unsigned = c.create_integer_constant_with_sign(3, false);
        assert_eq!(unsigned.get_type(), &Type::uint32());
    }

    #[test]
    fn test_floating_constants() {
        let builder = TreeBuilder::new();
        let c = compiler(&builder);

        let float = c.create_float_constant(1.5);
        assert_eq!(float.get_type(), &Type::float(32));
        assert_eq!(
            float.into_node(&builder),
            Node::Constant { value: Constant::Float(1.5), ty: RuntimeType::Float }
        );

        let double = c.create_double_constant(0.25);
        assert_eq!(double.get_type(), &Type::float(64));
    }

    #[test]
    fn test_plain_character() {
        let builder = TreeBuilder::new();
        let c = compiler(&builder);
        let a = c.create_character_constant("'a'").unwrap();

        assert_eq!(a.get_type(), &Type::int(8, false));
        assert_eq!(a.into_node(&builder), Node::int_constant(97, RuntimeType::I8));
    }

    #[test]
    fn test_wide_character_keeps_low_byte() {
        let builder = TreeBuilder::new();
        let c = compiler(&builder);

        let e_acute = c.create_character_constant("'é'").unwrap();
        assert_eq!(e_acute.get_type(), &Type::int(8, false));
        assert_eq!(e_acute.into_node(&builder), Node::int_constant(233, RuntimeType::I8));

        let euro = c.create_character_constant("'€'").unwrap();
        assert_eq!(euro.into_node(&builder), Node::int_constant(0xAC, RuntimeType::I8));

        // Two characters, however many bytes
        assert_eq!(
            c.create_character_constant("'é"),
            Err(DebugExprError::InvalidLiteral { text: "'é".to_string(), value: None })
        );
    }

    #[test]
    fn test_recognized_escapes() {
        let builder = TreeBuilder::new();
        let c = compiler(&builder);
        let cases = [
            (r"'\n'", 10),
            (r"'\r'", 13),
            (r"'\''", 39),
            (r"'\\'", 92),
            (r#"'\"'"#, 34),
        ];

        for (text, expected) in cases {
            let ch = c.create_character_constant(text).unwrap();
            assert_eq!(ch.into_node(&builder), Node::int_constant(expected, RuntimeType::I8), "{text}");
        }
    }

    #[test]
    fn test_unknown_escape_reports_backslash() {
        let builder = TreeBuilder::new();
        let c = compiler(&builder);
        assert_eq!(
            c.create_character_constant(r"'\q'"),
            Err(DebugExprError::InvalidLiteral {
                text: r"'\q'".to_string(),
                value: Some(b'\\'),
            })
        );
    }

    #[test]
    fn test_malformed_literal() {
        let builder = TreeBuilder::new();
        let c = compiler(&builder);
        for text in ["", "'", "a", r"'\"] {
            assert_eq!(
                c.create_character_constant(text),
                Err(DebugExprError::InvalidLiteral { text: text.to_string(), value: None })
            );
        }
    }
}

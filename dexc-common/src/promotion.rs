//! Type promotion and cast eligibility
//!
//! These are the C "usual arithmetic conversions" as the expression
//! compiler applies them before combining two operands.

use crate::types::Type;

/// Get the type two operands must be converted to before they are combined.
///
/// Floating point wins over everything, then pointers, then the wider
/// integer. At equal width the unsigned integer wins. Combinations the
/// rules do not cover (aggregates, void, unresolved symbols) promote to
/// `void`, which nothing can be implicitly cast to.
///
/// The result does not depend on operand order.
pub fn common_type(left: &Type, right: &Type) -> Type {
    if left == right {
        return left.clone();
    }

    match (left, right) {
        (Type::Float { width: l }, Type::Float { width: r }) => Type::float(*l.max(r)),
        (Type::Float { .. }, _) => left.clone(),
        (_, Type::Float { .. }) => right.clone(),

        // Distinct pointers only share void*
        (Type::Pointer(_), Type::Pointer(_)) => Type::pointer_to(Type::Void),
        (Type::Pointer(_), _) => left.clone(),
        (_, Type::Pointer(_)) => right.clone(),

        (
            Type::Int { width: lw, signed: ls },
            Type::Int { width: rw, signed: rs },
        ) => {
            let width = (*lw).max(*rw);
            let unsigned = (*lw == width && !ls) || (*rw == width && !rs);
            Type::int(width, !unsigned)
        }

        (Type::Bool, Type::Int { .. }) => right.clone(),
        (Type::Int { .. }, Type::Bool) => left.clone(),

        _ => Type::Void,
    }
}

impl Type {
    /// Check whether a value of this type may be implicitly converted to `to`.
    ///
    /// Numeric conversions are always allowed. Pointers and arrays only
    /// convert among themselves, as a reinterpretation of the bits.
    pub fn can_be_cast_to(&self, to: &Type) -> bool {
        match (self, to) {
            (from, to) if from.is_arithmetic() && to.is_arithmetic() => true,
            (Type::Pointer(_) | Type::Array(_), Type::Pointer(_) | Type::Array(_)) => true,
            (Type::Aggregate { .. }, Type::Aggregate { .. }) => self == to,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;
    use pretty_assertions::assert_eq;

    fn sample_types() -> Vec<Type> {
        vec![
            Type::Bool,
            Type::int(8, true),
            Type::int(8, false),
            Type::int(16, true),
            Type::int32(),
            Type::uint32(),
            Type::int(64, true),
            Type::int(64, false),
            Type::float(32),
            Type::float(64),
            Type::pointer_to(Type::int32()),
            Type::pointer_to(Type::Void),
            Type::array_of(Type::int(8, true)),
            Type::aggregate("node", vec![Field::new("next", Type::pointer_to(Type::Void))]),
            Type::Void,
            Type::Unknown,
        ]
    }

    #[test]
    fn test_common_type_is_commutative() {
        let types = sample_types();
        for a in &types {
            for b in &types {
                assert_eq!(common_type(a, b), common_type(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_common_type_is_idempotent() {
        for t in sample_types() {
            assert_eq!(common_type(&t, &t), t);
        }
    }

    #[test]
    fn test_integer_promotion() {
        let ints: Vec<Type> = sample_types()
            .into_iter()
            .filter(Type::is_integer_type)
            .collect();

        for a in &ints {
            for b in &ints {
                let common = common_type(a, b);
                let (Some(aw), Some(bw), Some(cw)) = (a.width(), b.width(), common.width()) else {
                    panic!("integer without width");
                };
                let width = aw.max(bw);
                assert_eq!(cw, width, "{a} vs {b}");

                let expect_unsigned =
                    (aw == width && a.is_unsigned()) || (bw == width && b.is_unsigned());
                assert_eq!(common.is_unsigned(), expect_unsigned, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_usual_arithmetic_conversions() {
        assert_eq!(common_type(&Type::int32(), &Type::uint32()), Type::uint32());
        assert_eq!(common_type(&Type::int(8, false), &Type::int32()), Type::int32());
        assert_eq!(common_type(&Type::uint32(), &Type::int(64, true)), Type::int(64, true));
        assert_eq!(common_type(&Type::Bool, &Type::int(16, true)), Type::int(16, true));
    }

    #[test]
    fn test_floating_wins() {
        assert_eq!(common_type(&Type::int(64, false), &Type::float(32)), Type::float(32));
        assert_eq!(common_type(&Type::float(32), &Type::float(64)), Type::float(64));
        assert_eq!(
            common_type(&Type::pointer_to(Type::int32()), &Type::float(32)),
            Type::float(32)
        );
    }

    #[test]
    fn test_pointer_wins_over_integers() {
        let ptr = Type::pointer_to(Type::int32());
        assert_eq!(common_type(&ptr, &Type::int32()), ptr);
        assert_eq!(common_type(&Type::int(64, false), &ptr), ptr);
        assert_eq!(
            common_type(&ptr, &Type::pointer_to(Type::Bool)),
            Type::pointer_to(Type::Void)
        );
    }

    #[test]
    fn test_uncovered_combinations_promote_to_void() {
        let node = Type::aggregate("node", vec![]);
        assert_eq!(common_type(&node, &Type::int32()), Type::Void);
        assert_eq!(common_type(&Type::Unknown, &Type::int32()), Type::Void);
        assert_eq!(common_type(&Type::Void, &Type::Bool), Type::Void);
    }

    #[test]
    fn test_numeric_casts() {
        assert!(Type::int32().can_be_cast_to(&Type::int(64, false)));
        assert!(Type::float(64).can_be_cast_to(&Type::float(32)));
        assert!(Type::int(8, true).can_be_cast_to(&Type::float(64)));
        assert!(Type::float(32).can_be_cast_to(&Type::uint32()));
        assert!(Type::Bool.can_be_cast_to(&Type::int32()));
    }

    #[test]
    fn test_pointer_casts() {
        let int_ptr = Type::pointer_to(Type::int32());
        assert!(int_ptr.can_be_cast_to(&Type::pointer_to(Type::Void)));
        assert!(Type::array_of(Type::int32()).can_be_cast_to(&int_ptr));

        // No implicit pointer <-> integer conversions
        assert!(!int_ptr.can_be_cast_to(&Type::int(64, false)));
        assert!(!Type::int(64, false).can_be_cast_to(&int_ptr));
        assert!(!int_ptr.can_be_cast_to(&Type::float(64)));
    }

    #[test]
    fn test_aggregates_never_cast_to_primitives() {
        let node = Type::aggregate("node", vec![]);
        assert!(!node.can_be_cast_to(&Type::int32()));
        assert!(!node.can_be_cast_to(&Type::Bool));
        assert!(!Type::int32().can_be_cast_to(&node));
        assert!(!node.can_be_cast_to(&Type::aggregate("other", vec![])));
        assert!(!Type::Unknown.can_be_cast_to(&Type::int32()));
        assert!(!Type::int32().can_be_cast_to(&Type::Void));
    }
}

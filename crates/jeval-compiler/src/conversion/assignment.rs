//! Assignment conversion.

use jeval_core::Type;

use super::Operand;

/// Convert `source` for storage into a location of type `target`.
///
/// - primitive into wrapper: cast to the wrapper's kind if it differs, then box
/// - primitive into any other reference (`Object o = 1`): box as its own kind
/// - wrapper into primitive: unbox, then cast if the kinds differ
/// - primitive into a different primitive: cast
///
/// Reference widening needs no node and leaves the operand alone.
pub fn assignment_conversion(target: Type, source: Operand) -> Operand {
    if source.ty == target {
        return source;
    }

    match (target, source.ty) {
        (Type::Class(_), Type::Primitive(kind)) => {
            let boxed_kind = target.unboxed().unwrap_or(kind);
            let operand = source.cast_to(Type::Primitive(boxed_kind));
            tracing::trace!(kind = %boxed_kind, "insert box");
            Operand::new(operand.eval.boxed(boxed_kind), Type::boxed(boxed_kind))
        }
        (Type::Primitive(kind), Type::Class(_)) => match source.ty.unboxed() {
            Some(unboxed) => {
                tracing::trace!(kind = %unboxed, "insert unbox");
                let operand = Operand::new(source.eval.unboxed(unboxed), Type::Primitive(unboxed));
                operand.cast_to(Type::Primitive(kind))
            }
            None => source,
        },
        (Type::Primitive(_), Type::Primitive(_)) => source.cast_to(target),
        _ => source,
    }
}

#[cfg(test)]
mod tests {
    use jeval_core::PrimitiveKind;

    use super::*;
    use crate::evaluator::{Evaluator, LiteralValue, LocalSlot};

    fn literal_int(value: i32) -> Operand {
        Operand::new(Evaluator::literal(LiteralValue::Int(value), Type::INT), Type::INT)
    }

    fn count(eval: &Evaluator, pred: impl Fn(&Evaluator) -> bool) -> usize {
        let mut n = 0;
        eval.walk(&mut |e| {
            if pred(e) {
                n += 1;
            }
        });
        n
    }

    #[test]
    fn identity_adds_nothing() {
        let x = Operand::new(Evaluator::local("x", LocalSlot::Frame), Type::INT);
        let converted = assignment_conversion(Type::INT, x.clone());
        assert_eq!(converted, x);
    }

    #[test]
    fn int_into_integer_boxes_once() {
        let converted = assignment_conversion(Type::boxed(PrimitiveKind::Int), literal_int(1));
        assert_eq!(count(&converted.eval, |e| matches!(e, Evaluator::Box { .. })), 1);
        assert_eq!(count(&converted.eval, |e| matches!(e, Evaluator::Cast { .. })), 0);
        assert_eq!(converted.ty, Type::boxed(PrimitiveKind::Int));
    }

    #[test]
    fn int_into_long_wrapper_casts_then_boxes() {
        let converted = assignment_conversion(Type::boxed(PrimitiveKind::Long), literal_int(1));
        let Evaluator::Box { operand, kind } = converted.eval else {
            panic!("expected box");
        };
        assert_eq!(kind, PrimitiveKind::Long);
        assert!(matches!(*operand, Evaluator::Cast { ty: Type::LONG, .. }));
    }

    #[test]
    fn primitive_into_object_boxes_own_kind() {
        let converted = assignment_conversion(Type::OBJECT, literal_int(3));
        assert!(matches!(
            converted.eval,
            Evaluator::Box {
                kind: PrimitiveKind::Int,
                ..
            }
        ));
    }

    #[test]
    fn integer_into_long_unboxes_then_widens() {
        let i = Operand::new(
            Evaluator::local("i", LocalSlot::Frame),
            Type::boxed(PrimitiveKind::Int),
        );
        let converted = assignment_conversion(Type::LONG, i);
        assert_eq!(converted.ty, Type::LONG);
        let Evaluator::Cast { operand, ty } = converted.eval else {
            panic!("expected cast");
        };
        assert_eq!(ty, Type::LONG);
        assert!(matches!(
            *operand,
            Evaluator::Unbox {
                kind: PrimitiveKind::Int,
                ..
            }
        ));
    }

    #[test]
    fn reference_widening_is_silent() {
        let s = Operand::new(Evaluator::local("s", LocalSlot::Frame), Type::STRING);
        assert_eq!(assignment_conversion(Type::OBJECT, s.clone()), s);
    }
}

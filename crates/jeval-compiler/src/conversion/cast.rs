//! Explicit cast conversion.

use jeval_core::Type;

use super::Operand;

/// Conversion for `(target) source`.
///
/// Wrapper to primitive unboxes first; primitive to wrapper casts to the
/// wrapper's kind and boxes. A cast from a non-wrapper reference to a
/// primitive goes through the wrapper class. Anything else is a plain
/// `Cast`, omitted when the types already match.
pub fn cast_conversion(target: Type, source: Operand) -> Operand {
    if source.ty == target {
        return source;
    }

    match (target, source.ty) {
        (Type::Primitive(kind), Type::Class(_)) => {
            let (operand, unboxed) = match source.ty.unboxed() {
                Some(unboxed) => (source, unboxed),
                None => (source.cast_to(Type::boxed(kind)), kind),
            };
            let operand = Operand::new(operand.eval.unboxed(unboxed), Type::Primitive(unboxed));
            operand.cast_to(target)
        }
        (Type::Class(_), Type::Primitive(kind)) => match target.unboxed() {
            Some(wrapped) => {
                let operand = source.cast_to(Type::Primitive(wrapped));
                Operand::new(operand.eval.boxed(wrapped), target)
            }
            None => {
                let boxed = Operand::new(source.eval.boxed(kind), Type::boxed(kind));
                boxed.cast_to(target)
            }
        },
        _ => source.cast_to(target),
    }
}

//! Unary numeric promotion and single-operand unboxing.

use jeval_core::{PrimitiveKind, Type};

use super::Operand;

/// Unbox a wrapper-typed operand. Any other operand is returned as is.
pub fn unbox_if_wrapper(operand: Operand) -> Operand {
    match operand.ty.unboxed() {
        Some(kind) => {
            tracing::trace!(%kind, "insert unbox");
            Operand::new(operand.eval.unboxed(kind), Type::Primitive(kind))
        }
        None => operand,
    }
}

/// Unary numeric promotion.
///
/// Unboxes any non-boolean wrapper, then widens `byte`, `short` and `char`
/// to `int`. Booleans and non-numeric references pass through unchanged.
pub fn unary_numeric_promotion(operand: Operand) -> Operand {
    if operand.ty.is_boolean() || !operand.ty.is_numeric() {
        return operand;
    }
    let operand = unbox_if_wrapper(operand);
    match operand.ty.primitive().and_then(PrimitiveKind::unary_promotion) {
        Some(promoted) => operand.cast_to(Type::Primitive(promoted)),
        None => operand,
    }
}

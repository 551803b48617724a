//! Binary operand conversions and result types.

use jeval_core::ast::BinaryOp;
use jeval_core::{PrimitiveKind, Type};

use super::Operand;
use super::unary::{unary_numeric_promotion, unbox_if_wrapper};

/// Whether the operands of `left op right` are unboxed.
///
/// - never when either side is the null type
/// - never for `+` with a `String` side (concatenation keeps the boxes)
/// - for `==`/`!=` only when one side is primitive and the other a class type
/// - otherwise whenever either side is a class type
pub fn unboxes_operands(left: Type, right: Type, op: BinaryOp) -> bool {
    if left.is_null() || right.is_null() {
        return false;
    }
    if op == BinaryOp::Add && (left.is_string() || right.is_string()) {
        return false;
    }
    if op.is_equality() {
        return (left.is_primitive() && right.is_class())
            || (left.is_class() && right.is_primitive());
    }
    left.is_class() || right.is_class()
}

/// Convert both operands of a binary operator.
///
/// Unboxes per [`unboxes_operands`], then applies binary numeric promotion
/// to numeric pairs under the promoting operators. Shift operands are
/// promoted independently with unary numeric promotion. Each side is cast
/// only if it does not already have the promoted type.
pub fn binary_conversions(left: Operand, right: Operand, op: BinaryOp) -> (Operand, Operand) {
    let (left, right) = if unboxes_operands(left.ty, right.ty, op) {
        (unbox_if_wrapper(left), unbox_if_wrapper(right))
    } else {
        (left, right)
    };

    if op.is_shift() {
        return (unary_numeric_promotion(left), unary_numeric_promotion(right));
    }

    if op.promotes_operands()
        && let (Type::Primitive(l), Type::Primitive(r)) = (left.ty, right.ty)
        && l.is_numeric()
        && r.is_numeric()
    {
        let promoted = Type::Primitive(PrimitiveKind::binary_promotion(l, r));
        return (left.cast_to(promoted), right.cast_to(promoted));
    }

    (left, right)
}

/// Static type of `left op right` for already converted operand types.
///
/// Returns `None` when no operator rule applies.
pub fn binary_result_type(left: Type, right: Type, op: BinaryOp) -> Option<Type> {
    if op == BinaryOp::Add && (left.is_string() || right.is_string()) {
        return Some(Type::STRING);
    }

    let numeric_pair = match (left.primitive(), right.primitive()) {
        (Some(l), Some(r)) if l.is_numeric() && r.is_numeric() => Some((l, r)),
        _ => None,
    };
    let boolean_pair = left == Type::BOOLEAN && right == Type::BOOLEAN;

    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => {
            numeric_pair.map(|(l, r)| Type::Primitive(PrimitiveKind::binary_promotion(l, r)))
        }
        BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr => match numeric_pair {
            Some((l, r)) if l.is_integral() && r.is_integral() => {
                Some(Type::Primitive(l.unary_promotion().unwrap_or(l)))
            }
            _ => None,
        },
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
            numeric_pair.map(|_| Type::BOOLEAN)
        }
        BinaryOp::Eq | BinaryOp::Ne => {
            let references = left.is_reference() && right.is_reference();
            (numeric_pair.is_some() || boolean_pair || references).then_some(Type::BOOLEAN)
        }
        BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => {
            if boolean_pair {
                return Some(Type::BOOLEAN);
            }
            match numeric_pair {
                Some((l, r)) if l.is_integral() && r.is_integral() => {
                    Some(Type::Primitive(PrimitiveKind::binary_promotion(l, r)))
                }
                _ => None,
            }
        }
        BinaryOp::And | BinaryOp::Or => boolean_pair.then_some(Type::BOOLEAN),
    }
}

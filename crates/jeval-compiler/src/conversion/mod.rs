//! Conversion engine.
//!
//! Pure functions deciding where `Box`, `Unbox` and `Cast` nodes go. They take
//! an evaluator together with its static type and return the converted
//! evaluator with its new static type. None of them fails: an operand that
//! needs no conversion comes back untouched.
//!
//! ## Rules
//!
//! - [`assignment_conversion`]: storing a value into a variable, parameter or
//!   array element
//! - [`cast_conversion`]: explicit `(T) e`
//! - [`binary_conversions`]: unboxing and numeric promotion of both operands
//!   of a binary operator, with [`binary_result_type`] for the result
//! - [`unary_numeric_promotion`]: array indices, dimensions, unary `+ - ~`

mod assignment;
mod binary;
mod cast;
mod unary;

pub use assignment::assignment_conversion;
pub use binary::{binary_conversions, binary_result_type, unboxes_operands};
pub use cast::cast_conversion;
pub use unary::{unary_numeric_promotion, unbox_if_wrapper};

use jeval_core::Type;

use crate::evaluator::Evaluator;

/// An evaluator paired with the static type of the value it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub eval: Evaluator,
    pub ty: Type,
}

impl Operand {
    pub fn new(eval: Evaluator, ty: Type) -> Self {
        Self { eval, ty }
    }

    /// Cast to `target` unless the operand already has that type.
    pub(crate) fn cast_to(self, target: Type) -> Operand {
        if self.ty == target {
            return self;
        }
        tracing::trace!(from = %self.ty, to = %target, "insert cast");
        Operand::new(self.eval.cast(target), target)
    }
}

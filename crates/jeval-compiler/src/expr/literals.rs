//! Literal expression compilation.

use jeval_core::ast::LiteralKind;

use crate::evaluator::{Evaluator, LiteralValue};

/// Compile a literal value. The type follows the literal's own kind.
pub fn compile_literal(kind: LiteralKind<'_>) -> Evaluator {
    Evaluator::literal(LiteralValue::from(kind), kind.ty())
}

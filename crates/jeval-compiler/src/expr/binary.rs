//! Binary and polyadic operators.

use jeval_core::{CompilationError, Span};
use jeval_core::ast::{BinaryOp, Expr, PolyadicExpr};

use super::{ExprCompiler, Result};
use crate::conversion::{Operand, binary_conversions, binary_result_type};
use crate::evaluator::Evaluator;

/// Compile `a op1 b op2 c ...` as a left-leaning chain of binary nodes.
///
/// Each step is type-checked against the result type of the step before it,
/// so `"a" + 1 + 2` concatenates twice and `1 + 2 + "a"` adds first.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_polyadic(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    poly: &PolyadicExpr<'_>,
) -> Result<Evaluator> {
    let Some((first, rest)) = poly.operands.split_first() else {
        return Err(super::unsupported("empty operator chain", expr));
    };
    if rest.len() != poly.ops.len() {
        return Err(super::unsupported("malformed operator chain", expr));
    }

    let start = if first.span.is_empty() { expr.span } else { first.span };
    let mut acc = compiler.compile_operand(first)?;
    for (&op, operand) in poly.ops.iter().zip(rest) {
        let right = compiler.compile_operand(operand)?;
        acc = combine(compiler, start, op, acc, right, operand)?;
    }
    Ok(acc.eval)
}

/// Combine the chain so far with its next operand.
///
/// A type error names the right operand that failed and spans the chain up
/// to and including it.
fn combine(
    compiler: &ExprCompiler<'_, '_>,
    start: Span,
    op: BinaryOp,
    left: Operand,
    right: Operand,
    operand: &Expr<'_>,
) -> Result<Operand> {
    let (left, right) = binary_conversions(left, right, op);
    let Some(ty) = binary_result_type(left.ty, right.ty, op) else {
        let ctx = compiler.ctx();
        return Err(CompilationError::IncompatibleOperands {
            op: op.symbol().to_string(),
            left: ctx.type_name(left.ty),
            right: ctx.type_name(right.ty),
            text: operand.text.to_string(),
            span: start.to(operand.span),
        });
    };

    let eval = Evaluator::Binary {
        op,
        left: Box::new(left.eval),
        right: Box::new(right.eval),
        ty,
    };
    Ok(Operand::new(eval, ty))
}

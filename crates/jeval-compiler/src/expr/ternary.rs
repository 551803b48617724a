//! Conditional expressions.

use jeval_core::ast::{ConditionalExpr, Expr};
use jeval_core::{CompilationError, Type};

use super::{ExprCompiler, Result, type_of};
use crate::conversion::{Operand, assignment_conversion, unbox_if_wrapper};
use crate::evaluator::Evaluator;

/// Compile `c ? a : b`.
///
/// Both branches are converted to the expression's resolved type, so
/// `flag ? 1 : boxed` unboxes the wrapper branch when the result is `int`.
pub fn compile_conditional(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    cond: &ConditionalExpr<'_>,
) -> Result<Evaluator> {
    let result_ty = type_of(expr)?;
    let condition = compile_condition(compiler, cond.condition)?;
    let then_branch = assignment_conversion(result_ty, compiler.compile_operand(cond.then_expr)?);
    let else_branch = assignment_conversion(result_ty, compiler.compile_operand(cond.else_expr)?);

    Ok(Evaluator::Conditional {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch.eval),
        else_branch: Box::new(else_branch.eval),
    })
}

/// Compile a boolean condition, unboxing a `Boolean` wrapper.
pub(crate) fn compile_condition(
    compiler: &ExprCompiler<'_, '_>,
    condition: &Expr<'_>,
) -> Result<Evaluator> {
    let operand = unbox_if_wrapper(compiler.compile_operand(condition)?);
    if operand.ty != Type::BOOLEAN {
        return Err(not_boolean(compiler, condition, &operand));
    }
    Ok(operand.eval)
}

fn not_boolean(compiler: &ExprCompiler<'_, '_>, expr: &Expr<'_>, operand: &Operand) -> CompilationError {
    CompilationError::IncompatibleTypes {
        from: compiler.ctx().type_name(operand.ty),
        to: "boolean".to_string(),
        text: expr.text.to_string(),
        span: expr.span,
    }
}

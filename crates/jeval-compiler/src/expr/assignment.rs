//! Simple assignment.

use jeval_core::CompilationError;
use jeval_core::ast::{AssignExpr, AssignOp, Expr, ExprKind};

use super::{ExprCompiler, Result, type_of};
use crate::conversion::assignment_conversion;
use crate::evaluator::Evaluator;

/// Compile `target = value`.
///
/// Compound operators are rejected; the value is assignment-converted to the
/// target's static type.
pub fn compile_assign(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    assign: &AssignExpr<'_>,
) -> Result<Evaluator> {
    if assign.op != AssignOp::Assign {
        return Err(CompilationError::OperationNotSupported {
            op: assign.op.to_string(),
            text: expr.text.to_string(),
            span: expr.span,
        });
    }

    let target_ty = type_of(assign.target)?;
    let target = compile_lvalue(compiler, assign.target)?;
    let value = assignment_conversion(target_ty, compiler.compile_operand(assign.value)?);

    Ok(Evaluator::Assignment {
        target: Box::new(target),
        value: Box::new(value.eval),
        postfix: false,
    })
}

/// Compile an expression that must denote a storage location.
pub(super) fn compile_lvalue(compiler: &ExprCompiler<'_, '_>, target: &Expr<'_>) -> Result<Evaluator> {
    let not_lvalue = || CompilationError::NotAnLvalue {
        text: target.text.to_string(),
        span: target.span,
    };

    let eval = match &target.kind {
        ExprKind::Paren(inner) => return compile_lvalue(compiler, inner),
        ExprKind::Name(_) | ExprKind::Index(_) => compiler.compile(target)?,
        _ => return Err(not_lvalue()),
    };
    if !eval.is_lvalue() {
        return Err(not_lvalue());
    }
    Ok(eval)
}

//! Method calls.

use jeval_core::CompilationError;
use jeval_core::ast::{CallExpr, Expr};

use super::{ExprCompiler, Result};
use crate::access::{convert_arguments, method_receiver, method_ref};
use crate::evaluator::Evaluator;

/// Compile `recv.m(args)` or `m(args)`.
///
/// A qualifier on a static call is not evaluated; the receiver becomes a type
/// reference to the declaring class.
pub fn compile_call(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    call: &CallExpr<'_>,
) -> Result<Evaluator> {
    let Some(method) = call.method else {
        return Err(CompilationError::UnresolvedMethod {
            name: call.name.to_string(),
            text: expr.text.to_string(),
            span: expr.span,
        });
    };

    let ctx = compiler.ctx();
    let receiver = match call.qualifier {
        Some(qualifier) if !method.is_static() => Some(compiler.compile_qualifier(qualifier)?),
        _ => None,
    };
    let object = method_receiver(ctx, method, receiver, expr.text, expr.span)?;

    let args = call
        .args
        .iter()
        .map(|arg| compiler.compile_operand(arg))
        .collect::<Result<Vec<_>>>()?;
    let args = convert_arguments(ctx, method, args, expr.text, expr.span)?;

    Ok(Evaluator::MethodCall {
        object: Box::new(object),
        method: method_ref(method),
        args,
    })
}

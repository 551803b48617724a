//! Method receivers and argument conversion.

use jeval_core::ast::MethodDecl;
use jeval_core::{CompilationError, Span, Type};

use super::{Result, this_for};
use crate::context::CompileContext;
use crate::conversion::{Operand, assignment_conversion};
use crate::evaluator::{Evaluator, MethodRef};

/// Owned descriptor of a resolved method.
pub fn method_ref(method: &MethodDecl<'_>) -> MethodRef {
    MethodRef {
        declaring: method.declaring,
        name: method.name.to_string(),
        params: method.params.to_vec(),
        return_type: method.return_type,
        is_static: method.is_static(),
        varargs: method.varargs,
    }
}

/// The object a call on `method` is dispatched on.
///
/// Static methods use a type reference to the declaring class; qualified
/// instance calls use the compiled qualifier; unqualified instance calls use
/// the nearest enclosing instance of the declaring class.
pub fn method_receiver(
    ctx: &CompileContext<'_>,
    method: &MethodDecl<'_>,
    receiver: Option<Evaluator>,
    text: &str,
    span: Span,
) -> Result<Evaluator> {
    if method.is_static() {
        return Ok(Evaluator::TypeRef(Type::Class(method.declaring)));
    }
    match receiver {
        Some(receiver) => Ok(receiver),
        None => this_for(ctx, method.declaring, text, span),
    }
}

/// Assignment-convert `args` against the parameters of `method`.
///
/// A variable-arity method collects the trailing arguments into a new array
/// of the last parameter's type, each converted to the component type. A
/// single array (or `null`) in the last position that already fits the
/// parameter is passed through.
pub fn convert_arguments(
    ctx: &CompileContext<'_>,
    method: &MethodDecl<'_>,
    args: Vec<Operand>,
    text: &str,
    span: Span,
) -> Result<Vec<Evaluator>> {
    let params = method.params;
    let arity_mismatch = || CompilationError::UnresolvedMethod {
        name: method.name.to_string(),
        text: text.to_string(),
        span,
    };

    let variadic = match params.split_last() {
        Some((&last, fixed)) if method.varargs => Some((fixed, last)),
        _ => None,
    };
    let Some((fixed, array_ty)) = variadic else {
        if args.len() != params.len() {
            return Err(arity_mismatch());
        }
        return Ok(convert_each(params, args));
    };

    if args.len() < fixed.len() {
        return Err(arity_mismatch());
    }
    let component = array_ty.component().ok_or_else(arity_mismatch)?;

    if args.len() == params.len()
        && let Some(last) = args.last()
        && (last.ty.is_null() || (last.ty.is_array() && ctx.table().is_assignable(last.ty, array_ty)))
    {
        return Ok(convert_each(params, args));
    }

    let mut args = args;
    let rest = args.split_off(fixed.len());
    let mut converted = convert_each(fixed, args);
    let elements = rest
        .into_iter()
        .map(|arg| assignment_conversion(component, arg).eval)
        .collect();
    converted.push(Evaluator::NewArray {
        ty: array_ty,
        dimension: None,
        initializer: Some(elements),
    });
    Ok(converted)
}

fn convert_each(params: &[Type], args: Vec<Operand>) -> Vec<Evaluator> {
    params
        .iter()
        .zip(args)
        .map(|(&param, arg)| assignment_conversion(param, arg).eval)
        .collect()
}

//! Array element access.

use jeval_core::ast::{Expr, IndexExpr};
use jeval_core::{CompilationError, Type};

use super::{ExprCompiler, Result, type_of};
use crate::conversion::unary_numeric_promotion;
use crate::evaluator::Evaluator;

/// Compile `a[i]`. The index undergoes unary numeric promotion and must end
/// up `int`.
pub fn compile_index(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    index: &IndexExpr<'_>,
) -> Result<Evaluator> {
    let ctx = compiler.ctx();
    let array_ty = type_of(index.array)?;
    if !array_ty.is_array() {
        return Err(CompilationError::NotAnArray {
            found: ctx.type_name(array_ty),
            text: expr.text.to_string(),
            span: expr.span,
        });
    }

    let array = compiler.compile(index.array)?;
    let position = unary_numeric_promotion(compiler.compile_operand(index.index)?);
    if position.ty != Type::INT {
        return Err(CompilationError::IncompatibleTypes {
            from: ctx.type_name(position.ty),
            to: "int".to_string(),
            text: index.index.text.to_string(),
            span: index.index.span,
        });
    }

    Ok(Evaluator::ArrayAccess {
        array: Box::new(array),
        index: Box::new(position.eval),
    })
}

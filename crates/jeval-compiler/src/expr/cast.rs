//! Casts and `instanceof`.

use jeval_core::CompilationError;
use jeval_core::ast::{CastExpr, Expr, InstanceOfExpr};

use super::{ExprCompiler, Result};
use crate::conversion::cast_conversion;
use crate::evaluator::Evaluator;

/// Compile `(T) e`.
pub fn compile_cast(compiler: &ExprCompiler<'_, '_>, cast: &CastExpr<'_>) -> Result<Evaluator> {
    let operand = compiler.compile_operand(cast.operand)?;
    Ok(cast_conversion(cast.target, operand).eval)
}

/// Compile `e instanceof T`. The operand must be a reference.
pub fn compile_instanceof(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    inst: &InstanceOfExpr<'_>,
) -> Result<Evaluator> {
    let operand = compiler.compile_operand(inst.operand)?;
    if operand.ty.is_primitive() {
        return Err(CompilationError::IncompatibleOperand {
            op: "instanceof".to_string(),
            operand: compiler.ctx().type_name(operand.ty),
            text: expr.text.to_string(),
            span: expr.span,
        });
    }
    Ok(Evaluator::InstanceOf {
        operand: Box::new(operand.eval),
        ty: inst.target,
    })
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use jeval_core::ast::{BinaryOp, ExprKind, LiteralKind, PolyadicExpr};
    use jeval_core::{PrimitiveKind, Type};

    use super::super::test_support::*;
    use super::*;
    use crate::context::CompileContext;
    use crate::options::CompileOptions;

    #[test]
    fn boxed_null_compared_with_int() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let integer = Type::boxed(PrimitiveKind::Int);
        let null = arena.alloc(Expr::new(
            ExprKind::Literal(LiteralKind::Null),
            Some(Type::Null),
            "null",
        ));
        let cast = Expr::new(
            ExprKind::Cast(CastExpr {
                target: integer,
                operand: null,
            }),
            Some(integer),
            "(Integer) null",
        );
        let cmp = Expr::new(
            ExprKind::Binary(PolyadicExpr {
                operands: arena.alloc_slice_copy(&[cast, *int(&arena, 5)]),
                ops: arena.alloc_slice_copy(&[BinaryOp::Eq]),
            }),
            Some(Type::BOOLEAN),
            "(Integer) null == 5",
        );

        let eval = ExprCompiler::new(&ctx).compile(&cmp).unwrap();
        assert_eq!(
            eval.to_string(),
            format!("(==:boolean (unbox int (cast {integer} null)) 5)")
        );
    }

    #[test]
    fn reference_to_primitive_goes_through_wrapper() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let obj = local(&arena, "o", Type::OBJECT, f.class);
        let cast = CastExpr {
            target: Type::INT,
            operand: obj,
        };

        let eval = compile_cast(&ExprCompiler::new(&ctx), &cast).unwrap();
        let integer = Type::boxed(PrimitiveKind::Int);
        assert_eq!(eval.to_string(), format!("(unbox int (cast {integer} o))"));
    }

    #[test]
    fn instanceof_rejects_primitive() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let compiler = ExprCompiler::new(&ctx);

        let ok = Expr::new(
            ExprKind::InstanceOf(InstanceOfExpr {
                operand: local(&arena, "o", Type::OBJECT, f.class),
                target: Type::STRING,
            }),
            Some(Type::BOOLEAN),
            "o instanceof String",
        );
        assert_eq!(
            compiler.compile(&ok).unwrap().to_string(),
            format!("(instanceof o {})", Type::STRING)
        );

        let bad = Expr::new(
            ExprKind::InstanceOf(InstanceOfExpr {
                operand: int(&arena, 1),
                target: Type::STRING,
            }),
            Some(Type::BOOLEAN),
            "1 instanceof String",
        );
        assert!(matches!(
            compiler.compile(&bad),
            Err(CompilationError::IncompatibleOperand { .. })
        ));
    }
}

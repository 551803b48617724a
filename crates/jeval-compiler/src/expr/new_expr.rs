//! Instance and array creation.

use jeval_core::ast::{ArrayInitExpr, Expr, ExprKind, NewArrayExpr, NewExpr};
use jeval_core::{ClassKind, CompilationError, Type};

use super::{ExprCompiler, Result, type_of, unsupported};
use crate::access::{convert_arguments, method_ref, this_for};
use crate::conversion::{assignment_conversion, unary_numeric_promotion};
use crate::evaluator::Evaluator;

/// Compile `new C(args)` or `outer.new C(args)`.
///
/// Creating an inner class passes its enclosing instance as a leading
/// argument: the explicit `outer` expression, or the nearest lexically
/// enclosing instance of the outer class.
pub fn compile_new(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    new: &NewExpr<'_>,
) -> Result<Evaluator> {
    if new.anonymous_body {
        return Err(CompilationError::AnonymousClassNotSupported {
            text: expr.text.to_string(),
            span: expr.span,
        });
    }

    let ctx = compiler.ctx();
    let mut args = Vec::with_capacity(new.args.len() + 1);
    if let Some(class) = ctx.table().get(new.class)
        && class.kind == ClassKind::Inner
        && let Some(outer) = class.outer
    {
        let outer = match new.outer {
            Some(explicit) => compiler.compile(explicit)?,
            None => this_for(ctx, outer, expr.text, expr.span)?,
        };
        args.push(outer);
    }

    let operands = new
        .args
        .iter()
        .map(|arg| compiler.compile_operand(arg))
        .collect::<Result<Vec<_>>>()?;
    args.extend(convert_arguments(
        ctx,
        new.constructor,
        operands,
        expr.text,
        expr.span,
    )?);

    Ok(Evaluator::NewInstance {
        class: new.class,
        constructor: method_ref(new.constructor),
        args,
    })
}

/// Compile `new T[n]` or `new T[] { ... }`.
///
/// Only a single dimension expression is supported.
pub fn compile_new_array(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    new: &NewArrayExpr<'_>,
) -> Result<Evaluator> {
    let ty = type_of(expr)?;
    if !ty.is_array() {
        return Err(CompilationError::NotAnArray {
            found: compiler.ctx().type_name(ty),
            text: expr.text.to_string(),
            span: expr.span,
        });
    }
    if new.dims.len() > 1 {
        return Err(CompilationError::ArrayDimensionsNotSupported {
            text: expr.text.to_string(),
            span: expr.span,
        });
    }

    if let Some(init) = new.initializer {
        return array_initializer(compiler, init, ty);
    }

    let Some(dimension) = new.dims.first() else {
        return Err(unsupported("array creation without dimension", expr));
    };
    let length = unary_numeric_promotion(compiler.compile_operand(dimension)?);
    if length.ty != Type::INT {
        return Err(CompilationError::IncompatibleTypes {
            from: compiler.ctx().type_name(length.ty),
            to: "int".to_string(),
            text: dimension.text.to_string(),
            span: dimension.span,
        });
    }

    Ok(Evaluator::NewArray {
        ty,
        dimension: Some(Box::new(length.eval)),
        initializer: None,
    })
}

/// Compile a bare `{ ... }` initializer, typed by its resolved array type.
pub fn compile_array_init(compiler: &ExprCompiler<'_, '_>, expr: &Expr<'_>) -> Result<Evaluator> {
    array_initializer(compiler, expr, type_of(expr)?)
}

/// Build an initialized array of type `ty` from a `{ ... }` expression,
/// converting each element to the component type. Nested `{ ... }` elements
/// become nested arrays.
pub(crate) fn array_initializer(
    compiler: &ExprCompiler<'_, '_>,
    init: &Expr<'_>,
    ty: Type,
) -> Result<Evaluator> {
    let ExprKind::ArrayInit(ArrayInitExpr { elements: items }) = init.kind else {
        return Err(unsupported("array initializer", init));
    };
    let Some(component) = ty.component() else {
        return Err(CompilationError::NotAnArray {
            found: compiler.ctx().type_name(ty),
            text: init.text.to_string(),
            span: init.span,
        });
    };

    let mut elements = Vec::with_capacity(items.len());
    for element in items {
        let eval = match element.kind {
            ExprKind::ArrayInit(_) => array_initializer(compiler, element, component)?,
            _ => assignment_conversion(component, compiler.compile_operand(element)?).eval,
        };
        elements.push(eval);
    }

    Ok(Evaluator::NewArray {
        ty,
        dimension: None,
        initializer: Some(elements),
    })
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use jeval_core::ast::{MethodDecl, Modifiers, ThisExpr};
    use jeval_core::{
        ClassDescriptor, ClassTable, ErrorCategory, LexicalContext, PrimitiveKind, ThisBinding,
    };

    use super::super::test_support::*;
    use super::*;
    use crate::context::CompileContext;
    use crate::options::CompileOptions;

    fn int_array(dims: u8) -> Type {
        (0..dims).fold(Type::INT, |ty, _| Type::array_of(ty).unwrap())
    }

    #[test]
    fn two_dimension_expressions_are_rejected() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let expr = Expr::new(
            ExprKind::NewArray(NewArrayExpr {
                dims: arena.alloc_slice_copy(&[*int(&arena, 2), *int(&arena, 3)]),
                initializer: None,
            }),
            Some(int_array(2)),
            "new int[2][3]",
        );

        let err = ExprCompiler::new(&ctx).compile(&expr).unwrap_err();
        assert_eq!(err.key(), "evaluation.error.array.dimensions.not.supported");
        assert_eq!(err.category(), ErrorCategory::Structural);
        assert_eq!(err.text(), "new int[2][3]");
    }

    #[test]
    fn single_dimension_is_promoted() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let n = *local(&arena, "n", Type::boxed(PrimitiveKind::Int), f.class);
        let expr = Expr::new(
            ExprKind::NewArray(NewArrayExpr {
                dims: arena.alloc_slice_copy(&[n]),
                initializer: None,
            }),
            Some(int_array(1)),
            "new int[n]",
        );

        let eval = ExprCompiler::new(&ctx).compile(&expr).unwrap();
        assert_eq!(eval.to_string(), "(new-array int[] (unbox int n))");
    }

    #[test]
    fn nested_initializer_converts_elements() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let row = Expr::new(
            ExprKind::ArrayInit(ArrayInitExpr {
                elements: arena.alloc_slice_copy(&[*int(&arena, 1), *int(&arena, 2)]),
            }),
            Some(Type::array_of(Type::LONG).unwrap()),
            "{1, 2}",
        );
        let longs2 = Type::array_of(Type::array_of(Type::LONG).unwrap()).unwrap();
        let init = Expr::new(
            ExprKind::ArrayInit(ArrayInitExpr {
                elements: arena.alloc_slice_copy(&[row]),
            }),
            Some(longs2),
            "{{1, 2}}",
        );

        let eval = ExprCompiler::new(&ctx).compile(&init).unwrap();
        assert_eq!(
            eval.to_string(),
            "(new-array long[][] { (new-array long[] { (cast long 1) (cast long 2) }) })"
        );
    }

    #[test]
    fn anonymous_class_is_rejected() {
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let ctor = MethodDecl {
            name: "<init>",
            declaring: jeval_core::well_known::OBJECT,
            params: &[],
            return_type: Type::Void,
            varargs: false,
            modifiers: Modifiers::PUBLIC,
        };
        let expr = Expr::new(
            ExprKind::New(NewExpr {
                class: jeval_core::well_known::OBJECT,
                constructor: &ctor,
                outer: None,
                args: &[],
                anonymous_body: true,
            }),
            Some(Type::OBJECT),
            "new Object() {}",
        );
        assert!(matches!(
            ExprCompiler::new(&ctx).compile(&expr),
            Err(CompilationError::AnonymousClassNotSupported { .. })
        ));
    }

    #[test]
    fn inner_class_gets_enclosing_instance() {
        let mut table = ClassTable::with_builtins();
        let outer = table.insert(ClassDescriptor::new("p.Outer"));
        let inner =
            table.insert(ClassDescriptor::new("p.Outer$In").nested_in(outer, ClassKind::Inner));
        let lexical = LexicalContext::from_table(&table, outer, ThisBinding::Instance);
        let ctx = CompileContext::new(&table, &lexical, CompileOptions::default());
        let compiler = ExprCompiler::new(&ctx);

        let params = [Type::LONG];
        let ctor = MethodDecl {
            name: "<init>",
            declaring: inner,
            params: &params,
            return_type: Type::Void,
            varargs: false,
            modifiers: Modifiers::empty(),
        };
        let arena = Bump::new();
        let args = arena.alloc_slice_copy(&[*int(&arena, 5)]);

        let implicit = Expr::new(
            ExprKind::New(NewExpr {
                class: inner,
                constructor: &ctor,
                outer: None,
                args,
                anonymous_body: false,
            }),
            Some(Type::Class(inner)),
            "new In(5)",
        );
        assert_eq!(
            compiler.compile(&implicit).unwrap().to_string(),
            format!("(new {inner} (this 0) (cast long 5))")
        );

        let this = Expr::new(
            ExprKind::This(ThisExpr { qualifier: None }),
            Some(Type::Class(outer)),
            "this",
        );
        let explicit = Expr::new(
            ExprKind::New(NewExpr {
                class: inner,
                constructor: &ctor,
                outer: Some(&this),
                args,
                anonymous_body: false,
            }),
            Some(Type::Class(inner)),
            "this.new In(5)",
        );
        assert_eq!(
            compiler.compile(&explicit).unwrap().to_string(),
            format!("(new {inner} (this 0) (cast long 5))")
        );
    }
}

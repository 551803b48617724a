//! Names, `this` and `super`.
//!
//! Resolved names go through the access resolver. Names the resolver could
//! not bind fall back to runtime lookups: a qualified name becomes a field
//! read on the qualifier with no class filter, an unqualified one a deferred
//! local lookup by name.

use jeval_core::ast::{Decl, Expr, ExprKind, NameExpr, SuperExpr, ThisExpr};
use jeval_core::CompilationError;

use super::{ExprCompiler, Result};
use crate::access::{compile_field, compile_local, hop_depth};
use crate::evaluator::{ClassFilter, Evaluator, LocalSlot};

const ARRAY_LENGTH: &str = "length";

/// Compile a simple or qualified name.
pub fn compile_name(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    name: &NameExpr<'_>,
) -> Result<Evaluator> {
    let ctx = compiler.ctx();

    if let Some(qualifier) = name.qualifier
        && name.name == ARRAY_LENGTH
        && qualifier.ty.is_some_and(|ty| ty.is_array())
    {
        let array = compiler.compile(qualifier)?;
        return Ok(Evaluator::field(array, ARRAY_LENGTH, ClassFilter::Any));
    }

    match name.decl {
        Decl::Local(local) => compile_local(ctx, local, expr.text, expr.span),
        Decl::Field(field) => {
            let receiver = match name.qualifier {
                Some(qualifier) if !field.is_static() && !is_type_name(qualifier) => {
                    Some(compiler.compile_qualifier(qualifier)?)
                }
                _ => None,
            };
            compile_field(ctx, field, receiver, expr.text, expr.span)
        }
        Decl::Type(ty) => Ok(Evaluator::TypeRef(ty)),
        Decl::Method(_) => Err(CompilationError::UnresolvedSymbol {
            name: name.name.to_string(),
            text: expr.text.to_string(),
            span: expr.span,
        }),
        Decl::Unresolved => compile_unresolved(compiler, expr, name),
    }
}

fn is_type_name(expr: &Expr<'_>) -> bool {
    matches!(
        expr.kind,
        ExprKind::Name(NameExpr {
            decl: Decl::Type(_),
            ..
        })
    )
}

fn compile_unresolved(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    name: &NameExpr<'_>,
) -> Result<Evaluator> {
    if !compiler.ctx().options().defer_unresolved_names {
        return Err(CompilationError::UnresolvedSymbol {
            name: name.name.to_string(),
            text: expr.text.to_string(),
            span: expr.span,
        });
    }

    tracing::debug!(name = name.name, qualified = name.qualifier.is_some(), "defer unresolved name");
    match name.qualifier {
        Some(qualifier) => {
            let object = compiler.compile_qualifier(qualifier)?;
            Ok(Evaluator::field(object, name.name, ClassFilter::Any))
        }
        None => Ok(Evaluator::local(name.name, LocalSlot::Deferred)),
    }
}

/// Compile `this` or `Outer.this`.
pub fn compile_this(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    this: &ThisExpr,
) -> Result<Evaluator> {
    let depth = instance_depth(compiler, expr, this.qualifier)?;
    Ok(Evaluator::This { depth })
}

/// Compile `super` or `Outer.super` in qualifier position.
pub fn compile_super(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    sup: &SuperExpr,
) -> Result<Evaluator> {
    let depth = instance_depth(compiler, expr, sup.qualifier)?;
    Ok(Evaluator::Super { depth })
}

fn instance_depth(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    qualifier: Option<jeval_core::ClassId>,
) -> Result<u32> {
    let ctx = compiler.ctx();
    match qualifier {
        Some(class) => hop_depth(ctx, class, expr.text, expr.span),
        None if ctx.lexical().has_this() => Ok(0),
        None => Err(CompilationError::ThisNotAvailable {
            text: expr.text.to_string(),
            span: expr.span,
        }),
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use jeval_core::ast::{FieldDecl, Modifiers};
    use jeval_core::{
        ClassDescriptor, ClassKind, ClassTable, LexicalContext, ThisBinding, Type,
    };

    use super::super::test_support::*;
    use super::*;
    use crate::context::CompileContext;
    use crate::options::CompileOptions;

    fn unresolved<'a>(arena: &'a Bump, qualifier: Option<&'a Expr<'a>>, name: &'a str) -> &'a Expr<'a> {
        arena.alloc(Expr::new(
            ExprKind::Name(NameExpr {
                qualifier,
                name,
                decl: Decl::Unresolved,
            }),
            None,
            name,
        ))
    }

    #[test]
    fn unresolved_unqualified_is_deferred_local() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let eval = ExprCompiler::new(&ctx)
            .compile(unresolved(&arena, None, "ghost"))
            .unwrap();
        assert_eq!(eval, Evaluator::local("ghost", LocalSlot::Deferred));
    }

    #[test]
    fn unresolved_qualified_is_unfiltered_field() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let obj = local(&arena, "obj", Type::OBJECT, f.class);
        let eval = ExprCompiler::new(&ctx)
            .compile(unresolved(&arena, Some(obj), "secret"))
            .unwrap();
        assert_eq!(eval.to_string(), "(. obj secret)");
    }

    #[test]
    fn unresolved_fails_when_deferral_disabled() {
        let arena = Bump::new();
        let f = fixture();
        let options = CompileOptions::default().with_defer_unresolved_names(false);
        let ctx = CompileContext::new(&f.table, &f.lexical, options);
        let err = ExprCompiler::new(&ctx)
            .compile(unresolved(&arena, None, "ghost"))
            .unwrap_err();
        assert!(matches!(err, CompilationError::UnresolvedSymbol { ref name, .. } if name == "ghost"));
    }

    #[test]
    fn array_length_is_always_available() {
        let arena = Bump::new();
        let f = fixture();
        let options = CompileOptions::default().with_defer_unresolved_names(false);
        let ctx = CompileContext::new(&f.table, &f.lexical, options);
        let arr = local(&arena, "arr", Type::array_of(Type::INT).unwrap(), f.class);
        let eval = ExprCompiler::new(&ctx)
            .compile(unresolved(&arena, Some(arr), "length"))
            .unwrap();
        assert_eq!(eval.to_string(), "(. arr length)");
    }

    #[test]
    fn this_field_inside_declaring_class_is_depth_zero() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let this = arena.alloc(Expr::new(
            ExprKind::This(ThisExpr { qualifier: None }),
            Some(Type::Class(f.class)),
            "this",
        ));
        let field = arena.alloc(FieldDecl {
            name: "f",
            ty: Type::INT,
            declaring: f.class,
            modifiers: Modifiers::empty(),
        });
        let expr = Expr::new(
            ExprKind::Name(NameExpr {
                qualifier: Some(this),
                name: "f",
                decl: Decl::Field(field),
            }),
            Some(Type::INT),
            "this.f",
        );
        let eval = ExprCompiler::new(&ctx).compile(&expr).unwrap();
        assert_eq!(
            eval,
            Evaluator::field(
                Evaluator::This { depth: 0 },
                "f",
                ClassFilter::Class(f.class)
            )
        );
    }

    #[test]
    fn qualified_this_and_super() {
        let mut table = ClassTable::with_builtins();
        let outer = table.insert(ClassDescriptor::new("p.Outer"));
        let inner =
            table.insert(ClassDescriptor::new("p.Outer$In").nested_in(outer, ClassKind::Inner));
        let lexical = LexicalContext::from_table(&table, inner, ThisBinding::Instance);
        let ctx = CompileContext::new(&table, &lexical, CompileOptions::default());
        let compiler = ExprCompiler::new(&ctx);

        let this = Expr::new(
            ExprKind::This(ThisExpr {
                qualifier: Some(outer),
            }),
            Some(Type::Class(outer)),
            "Outer.this",
        );
        assert_eq!(compiler.compile(&this), Ok(Evaluator::This { depth: 1 }));

        let sup = Expr::new(
            ExprKind::Super(SuperExpr {
                qualifier: Some(outer),
            }),
            None,
            "Outer.super",
        );
        assert_eq!(compiler.compile_qualifier(&sup), Ok(Evaluator::Super { depth: 1 }));
    }

    #[test]
    fn this_in_static_context() {
        let f = fixture();
        let lexical = LexicalContext::new(vec![f.class], ThisBinding::Static);
        let ctx = CompileContext::new(&f.table, &lexical, CompileOptions::default());
        let this = Expr::new(ExprKind::This(ThisExpr { qualifier: None }), None, "this");
        assert!(matches!(
            ExprCompiler::new(&ctx).compile(&this),
            Err(CompilationError::ThisNotAvailable { .. })
        ));
    }
}

//! Local variables and captured locals.

use jeval_core::ast::{LocalDecl, LocalKind, LocalOrigin};
use jeval_core::{ClassId, CompilationError, Span};

use super::Result;
use crate::context::CompileContext;
use crate::evaluator::{ClassFilter, Evaluator, LiteralValue, LocalSlot};

/// Prefix of the synthetic field a nested class stores a captured local in.
const CAPTURED_PREFIX: &str = "val$";

/// Reach a local variable or parameter from the evaluation position.
pub fn compile_local(
    ctx: &CompileContext<'_>,
    local: &LocalDecl<'_>,
    text: &str,
    span: Span,
) -> Result<Evaluator> {
    let declaring = match local.origin {
        LocalOrigin::Fragment => return fragment_local(ctx, local, text, span),
        LocalOrigin::Method { class } => class,
    };

    let chain = ctx.lexical().classes();
    if chain.first() == Some(&declaring) {
        let slot = match local.kind {
            LocalKind::Variable => LocalSlot::Frame,
            LocalKind::Parameter { index } => LocalSlot::Parameter(index),
        };
        return Ok(Evaluator::local(local.name, slot));
    }

    captured_local(ctx, local, declaring, text, span)
}

fn fragment_local(
    ctx: &CompileContext<'_>,
    local: &LocalDecl<'_>,
    text: &str,
    span: Span,
) -> Result<Evaluator> {
    match ctx.scopes().lookup(local.name) {
        Some(_) => Ok(Evaluator::local(local.name, LocalSlot::Fragment)),
        None => Err(CompilationError::LocalNotAccessible {
            name: local.name.to_string(),
            text: text.to_string(),
            span,
        }),
    }
}

/// A local of an enclosing method, read through the `val$` field of the
/// class nested directly inside that method.
///
/// With the chain `[C0, C1, ...]` and `Ck` the declaring class, the field
/// lives on `C(k-1)`, which is `k - 1` hops away.
fn captured_local(
    ctx: &CompileContext<'_>,
    local: &LocalDecl<'_>,
    declaring: ClassId,
    text: &str,
    span: Span,
) -> Result<Evaluator> {
    let chain = ctx.lexical().classes();
    let not_accessible = || CompilationError::LocalNotAccessible {
        name: local.name.to_string(),
        text: text.to_string(),
        span,
    };

    let k = chain
        .iter()
        .skip(1)
        .position(|&class| class == declaring)
        .map(|i| i + 1)
        .ok_or_else(not_accessible)?;

    if ctx.options().inline_captured_constants
        && let Some(constant) = local.constant
    {
        tracing::debug!(name = local.name, "inline captured constant");
        return Ok(Evaluator::literal(LiteralValue::from(constant), local.ty));
    }

    if !ctx.lexical().has_this() {
        return Err(CompilationError::ThisNotAvailable {
            text: text.to_string(),
            span,
        });
    }

    let holder = chain[k - 1];
    let table = ctx.table();
    if chain[..k - 1]
        .iter()
        .any(|&class| !table.has_outer_instance(class))
    {
        return Err(CompilationError::NoEnclosingInstance {
            class: table.name_of(holder),
            text: text.to_string(),
            span,
        });
    }

    Ok(Evaluator::field(
        Evaluator::This {
            depth: (k - 1) as u32,
        },
        format!("{CAPTURED_PREFIX}{}", local.name),
        ClassFilter::Class(holder),
    ))
}

#[cfg(test)]
mod tests {
    use jeval_core::ast::LiteralKind;
    use jeval_core::{
        ClassDescriptor, ClassId, ClassKind, ClassTable, LexicalContext, ThisBinding, Type,
    };

    use super::*;
    use crate::options::CompileOptions;

    struct Nest {
        table: ClassTable,
        outer: ClassId,
        anon: ClassId,
        anon2: ClassId,
    }

    /// `p.Outer` declares a method whose anonymous class `$1` declares a
    /// method with another anonymous class `$1$1`.
    fn nest() -> Nest {
        let mut table = ClassTable::with_builtins();
        let outer = table.insert(ClassDescriptor::new("p.Outer"));
        let anon =
            table.insert(ClassDescriptor::new("p.Outer$1").nested_in(outer, ClassKind::Anonymous));
        let anon2 = table
            .insert(ClassDescriptor::new("p.Outer$1$1").nested_in(anon, ClassKind::Anonymous));
        Nest {
            table,
            outer,
            anon,
            anon2,
        }
    }

    #[test]
    fn same_frame_local_and_parameter() {
        let n = nest();
        let lexical = LexicalContext::from_table(&n.table, n.outer, ThisBinding::Instance);
        let ctx = CompileContext::new(&n.table, &lexical, CompileOptions::default());

        let x = LocalDecl::variable("x", Type::INT, n.outer);
        assert_eq!(
            compile_local(&ctx, &x, "x", Span::default()),
            Ok(Evaluator::local("x", LocalSlot::Frame))
        );
        let p = LocalDecl::parameter("p", Type::INT, n.outer, 1);
        assert_eq!(
            compile_local(&ctx, &p, "p", Span::default()),
            Ok(Evaluator::local("p", LocalSlot::Parameter(1)))
        );
    }

    #[test]
    fn captured_through_one_anonymous_class() {
        let n = nest();
        let lexical = LexicalContext::from_table(&n.table, n.anon, ThisBinding::Instance);
        let ctx = CompileContext::new(&n.table, &lexical, CompileOptions::default());

        let x = LocalDecl::variable("x", Type::INT, n.outer);
        let eval = compile_local(&ctx, &x, "x", Span::default()).unwrap();
        assert_eq!(
            eval,
            Evaluator::field(
                Evaluator::This { depth: 0 },
                "val$x",
                ClassFilter::Class(n.anon)
            )
        );
    }

    #[test]
    fn captured_depth_grows_with_nesting() {
        let n = nest();
        let lexical = LexicalContext::from_table(&n.table, n.anon2, ThisBinding::Instance);
        let ctx = CompileContext::new(&n.table, &lexical, CompileOptions::default());

        // local of Outer's method, held by $1, one hop from $1$1
        let x = LocalDecl::variable("x", Type::INT, n.outer);
        let eval = compile_local(&ctx, &x, "x", Span::default()).unwrap();
        assert_eq!(
            eval,
            Evaluator::field(
                Evaluator::This { depth: 1 },
                "val$x",
                ClassFilter::Class(n.anon)
            )
        );

        // local of $1's method, held by $1$1 itself
        let y = LocalDecl::variable("y", Type::INT, n.anon);
        let eval = compile_local(&ctx, &y, "y", Span::default()).unwrap();
        assert_eq!(
            eval,
            Evaluator::field(
                Evaluator::This { depth: 0 },
                "val$y",
                ClassFilter::Class(n.anon2)
            )
        );
    }

    #[test]
    fn captured_constant_is_inlined_unless_disabled() {
        let n = nest();
        let lexical = LexicalContext::from_table(&n.table, n.anon, ThisBinding::Instance);
        let k = LocalDecl::variable("k", Type::INT, n.outer).with_constant(LiteralKind::Int(7));

        let ctx = CompileContext::new(&n.table, &lexical, CompileOptions::default());
        assert_eq!(
            compile_local(&ctx, &k, "k", Span::default()),
            Ok(Evaluator::literal(LiteralValue::Int(7), Type::INT))
        );

        let options = CompileOptions::default().with_inline_captured_constants(false);
        let ctx = CompileContext::new(&n.table, &lexical, options);
        assert!(matches!(
            compile_local(&ctx, &k, "k", Span::default()),
            Ok(Evaluator::Field { .. })
        ));
    }

    #[test]
    fn local_of_unrelated_class_is_not_accessible() {
        let n = nest();
        let lexical = LexicalContext::from_table(&n.table, n.anon, ThisBinding::Instance);
        let ctx = CompileContext::new(&n.table, &lexical, CompileOptions::default());

        let stranger = LocalDecl::variable("z", Type::INT, ClassId::from_name("q.Other"));
        assert!(matches!(
            compile_local(&ctx, &stranger, "z", Span::default()),
            Err(CompilationError::LocalNotAccessible { .. })
        ));
    }

    #[test]
    fn fragment_local_needs_visible_frame() {
        let n = nest();
        let lexical = LexicalContext::from_table(&n.table, n.outer, ThisBinding::Instance);
        let mut ctx = CompileContext::new(&n.table, &lexical, CompileOptions::default());
        let t = LocalDecl::fragment("t", Type::LONG);

        assert!(compile_local(&ctx, &t, "t", Span::default()).is_err());

        ctx.scopes_mut().push_root();
        ctx.scopes_mut()
            .declare("t", Type::LONG, Span::default(), "long t")
            .unwrap();
        assert_eq!(
            compile_local(&ctx, &t, "t", Span::default()),
            Ok(Evaluator::local("t", LocalSlot::Fragment))
        );
    }
}

//! Access-path resolution.
//!
//! Given a resolved declaration and the lexical class chain, decides how the
//! executor reaches it: a frame local, a synthetic `val$` field holding a
//! captured local, a member of the instance some number of enclosing-instance
//! hops away, or a static member through a type reference.
//!
//! Hop depth is plain index arithmetic on [`LexicalContext::classes`]: index
//! `i` of the chain is the class reached after `i` hops from `this`.
//!
//! [`LexicalContext::classes`]: jeval_core::LexicalContext::classes

mod fields;
mod locals;
mod methods;

pub use fields::compile_field;
pub use locals::compile_local;
pub use methods::{convert_arguments, method_receiver, method_ref};

use jeval_core::{ClassId, CompilationError, Span};

use crate::context::CompileContext;
use crate::evaluator::Evaluator;

type Result<T> = std::result::Result<T, CompilationError>;

/// Minimal number of enclosing-instance hops from `this` to an instance of
/// `target` (or a subclass of it).
///
/// Hops cannot pass a class whose instances hold no enclosing instance
/// (top-level and static nested classes).
pub fn hop_depth(ctx: &CompileContext<'_>, target: ClassId, text: &str, span: Span) -> Result<u32> {
    if !ctx.lexical().has_this() {
        return Err(CompilationError::ThisNotAvailable {
            text: text.to_string(),
            span,
        });
    }

    let table = ctx.table();
    for (depth, &class) in ctx.lexical().classes().iter().enumerate() {
        if table.is_subclass(class, target) {
            return Ok(depth as u32);
        }
        if !table.has_outer_instance(class) {
            break;
        }
    }

    Err(CompilationError::NoEnclosingInstance {
        class: table.name_of(target),
        text: text.to_string(),
        span,
    })
}

/// `This(depth)` for the nearest enclosing instance of `target`.
pub fn this_for(ctx: &CompileContext<'_>, target: ClassId, text: &str, span: Span) -> Result<Evaluator> {
    let depth = hop_depth(ctx, target, text, span)?;
    Ok(Evaluator::This { depth })
}

#[cfg(test)]
mod tests {
    use jeval_core::{
        ClassDescriptor, ClassKind, ClassTable, LexicalContext, ThisBinding, well_known,
    };

    use super::*;
    use crate::options::CompileOptions;

    struct Nest {
        table: ClassTable,
        outer: ClassId,
        inner: ClassId,
        anon: ClassId,
    }

    fn nest() -> Nest {
        let mut table = ClassTable::with_builtins();
        let outer = table.insert(ClassDescriptor::new("p.Outer"));
        let inner =
            table.insert(ClassDescriptor::new("p.Outer$Inner").nested_in(outer, ClassKind::Inner));
        let anon = table
            .insert(ClassDescriptor::new("p.Outer$Inner$1").nested_in(inner, ClassKind::Anonymous));
        Nest {
            table,
            outer,
            inner,
            anon,
        }
    }

    #[test]
    fn depth_counts_hops() {
        let n = nest();
        let lexical = LexicalContext::from_table(&n.table, n.anon, ThisBinding::Instance);
        let ctx = CompileContext::new(&n.table, &lexical, CompileOptions::default());

        assert_eq!(hop_depth(&ctx, n.anon, "", Span::default()), Ok(0));
        assert_eq!(hop_depth(&ctx, n.inner, "", Span::default()), Ok(1));
        assert_eq!(hop_depth(&ctx, n.outer, "", Span::default()), Ok(2));
        assert_eq!(hop_depth(&ctx, well_known::OBJECT, "", Span::default()), Ok(0));
    }

    #[test]
    fn static_nested_blocks_hops() {
        let mut table = ClassTable::with_builtins();
        let outer = table.insert(ClassDescriptor::new("p.Outer"));
        let nested = table.insert(
            ClassDescriptor::new("p.Outer$Nested").nested_in(outer, ClassKind::StaticNested),
        );
        let lexical = LexicalContext::from_table(&table, nested, ThisBinding::Instance);
        let ctx = CompileContext::new(&table, &lexical, CompileOptions::default());

        let err = hop_depth(&ctx, outer, "field", Span::default()).unwrap_err();
        assert!(matches!(err, CompilationError::NoEnclosingInstance { ref class, .. } if class == "p.Outer"));
    }

    #[test]
    fn static_context_has_no_this() {
        let n = nest();
        let lexical = LexicalContext::from_table(&n.table, n.inner, ThisBinding::Static);
        let ctx = CompileContext::new(&n.table, &lexical, CompileOptions::default());
        assert!(matches!(
            this_for(&ctx, n.inner, "this", Span::default()),
            Err(CompilationError::ThisNotAvailable { .. })
        ));
    }

    #[test]
    fn subclass_matches_at_first_hop() {
        let mut table = ClassTable::with_builtins();
        let base = table.insert(ClassDescriptor::new("p.Base"));
        let outer = table.insert(ClassDescriptor::new("p.Outer").extends(base));
        let inner =
            table.insert(ClassDescriptor::new("p.Outer$In").nested_in(outer, ClassKind::Inner));
        let lexical = LexicalContext::from_table(&table, inner, ThisBinding::Instance);
        let ctx = CompileContext::new(&table, &lexical, CompileOptions::default());
        assert_eq!(this_for(&ctx, base, "", Span::default()), Ok(Evaluator::This { depth: 1 }));
    }
}

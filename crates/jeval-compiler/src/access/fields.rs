//! Field access paths.

use jeval_core::ast::FieldDecl;
use jeval_core::{Span, Type};

use super::{Result, this_for};
use crate::context::CompileContext;
use crate::evaluator::{ClassFilter, Evaluator};

/// Reach `field`, either through an explicit receiver or from the lexical
/// position.
///
/// Static fields always go through a type reference to the declaring class,
/// even when written with an instance qualifier. Unqualified instance fields
/// read from the nearest enclosing instance of the declaring class.
pub fn compile_field(
    ctx: &CompileContext<'_>,
    field: &FieldDecl<'_>,
    receiver: Option<Evaluator>,
    text: &str,
    span: Span,
) -> Result<Evaluator> {
    let object = if field.is_static() {
        Evaluator::TypeRef(Type::Class(field.declaring))
    } else {
        match receiver {
            Some(receiver) => receiver,
            None => this_for(ctx, field.declaring, text, span)?,
        }
    };
    Ok(Evaluator::field(
        object,
        field.name,
        ClassFilter::Class(field.declaring),
    ))
}

#[cfg(test)]
mod tests {
    use jeval_core::ast::Modifiers;
    use jeval_core::{
        ClassDescriptor, ClassKind, ClassTable, CompilationError, LexicalContext, ThisBinding,
    };

    use super::*;
    use crate::options::CompileOptions;

    #[test]
    fn own_field_is_depth_zero() {
        let mut table = ClassTable::with_builtins();
        let a = table.insert(ClassDescriptor::new("p.A"));
        let lexical = LexicalContext::from_table(&table, a, ThisBinding::Instance);
        let ctx = CompileContext::new(&table, &lexical, CompileOptions::default());

        let f = FieldDecl {
            name: "f",
            ty: Type::INT,
            declaring: a,
            modifiers: Modifiers::empty(),
        };
        let eval = compile_field(&ctx, &f, None, "f", Span::default()).unwrap();
        assert_eq!(
            eval,
            Evaluator::field(Evaluator::This { depth: 0 }, "f", ClassFilter::Class(a))
        );
    }

    #[test]
    fn outer_field_from_inner_class() {
        let mut table = ClassTable::with_builtins();
        let a = table.insert(ClassDescriptor::new("p.A"));
        let b = table.insert(ClassDescriptor::new("p.A$B").nested_in(a, ClassKind::Inner));
        let lexical = LexicalContext::from_table(&table, b, ThisBinding::Instance);
        let ctx = CompileContext::new(&table, &lexical, CompileOptions::default());

        let f = FieldDecl {
            name: "count",
            ty: Type::INT,
            declaring: a,
            modifiers: Modifiers::PRIVATE,
        };
        let eval = compile_field(&ctx, &f, None, "count", Span::default()).unwrap();
        assert_eq!(eval.to_string(), format!("(. (this 1) count {a})"));
    }

    #[test]
    fn static_field_uses_type_ref() {
        let mut table = ClassTable::with_builtins();
        let a = table.insert(ClassDescriptor::new("p.A"));
        let lexical = LexicalContext::new(vec![a], ThisBinding::Static);
        let ctx = CompileContext::new(&table, &lexical, CompileOptions::default());

        let f = FieldDecl {
            name: "MAX",
            ty: Type::INT,
            declaring: a,
            modifiers: Modifiers::STATIC | Modifiers::FINAL,
        };
        let receiver = Some(Evaluator::This { depth: 0 });
        let eval = compile_field(&ctx, &f, receiver, "a.MAX", Span::default()).unwrap();
        let Evaluator::Field { object, .. } = eval else {
            panic!("expected field");
        };
        assert_eq!(*object, Evaluator::TypeRef(Type::Class(a)));
    }

    #[test]
    fn instance_field_in_static_context_fails() {
        let mut table = ClassTable::with_builtins();
        let a = table.insert(ClassDescriptor::new("p.A"));
        let lexical = LexicalContext::new(vec![a], ThisBinding::Static);
        let ctx = CompileContext::new(&table, &lexical, CompileOptions::default());

        let f = FieldDecl {
            name: "f",
            ty: Type::INT,
            declaring: a,
            modifiers: Modifiers::empty(),
        };
        assert!(matches!(
            compile_field(&ctx, &f, None, "f", Span::default()),
            Err(CompilationError::ThisNotAvailable { .. })
        ));
    }
}

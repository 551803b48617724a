//! Expression compiler.
//!
//! The [`ExprCompiler`] turns a typed expression into an [`Evaluator`] in one
//! post-order pass: children are compiled first, then the conversion engine
//! decides which `Box`/`Unbox`/`Cast` nodes to wrap them in.
//!
//! # Example
//!
//! ```ignore
//! let compiler = ExprCompiler::new(&ctx);
//!
//! // Compile for the value only
//! let eval = compiler.compile(&expr)?;
//!
//! // Compile and keep the static type for further conversion
//! let operand = compiler.compile_operand(&expr)?;
//! ```

mod assignment;
mod binary;
mod calls;
mod cast;
mod identifiers;
mod literals;
mod member;
pub(crate) mod new_expr;
pub(crate) mod ternary;
mod unary;

use jeval_core::ast::{Expr, ExprKind};
use jeval_core::{CompilationError, Type};

use crate::context::CompileContext;
use crate::conversion::Operand;
use crate::evaluator::Evaluator;

type Result<T> = std::result::Result<T, CompilationError>;

/// Compiles expressions against a borrowed [`CompileContext`].
pub struct ExprCompiler<'a, 'c> {
    ctx: &'a CompileContext<'c>,
}

impl<'a, 'c> ExprCompiler<'a, 'c> {
    pub fn new(ctx: &'a CompileContext<'c>) -> Self {
        Self { ctx }
    }

    pub fn ctx(&self) -> &'a CompileContext<'c> {
        self.ctx
    }

    /// Compile an expression.
    pub fn compile(&self, expr: &Expr<'_>) -> Result<Evaluator> {
        match &expr.kind {
            ExprKind::Literal(kind) => Ok(literals::compile_literal(*kind)),
            ExprKind::Name(name) => identifiers::compile_name(self, expr, name),
            ExprKind::This(this) => identifiers::compile_this(self, expr, this),
            ExprKind::Super(_) => Err(CompilationError::SuperNotAValue {
                text: expr.text.to_string(),
                span: expr.span,
            }),
            ExprKind::ClassLiteral(ty) => Ok(Evaluator::ClassObject(*ty)),
            ExprKind::Paren(inner) => self.compile(inner),
            ExprKind::Binary(poly) => binary::compile_polyadic(self, expr, poly),
            ExprKind::Unary(un) => unary::compile_unary(self, expr, un),
            ExprKind::Postfix(post) => unary::compile_postfix(self, expr, post),
            ExprKind::Assign(assign) => assignment::compile_assign(self, expr, assign),
            ExprKind::Conditional(cond) => ternary::compile_conditional(self, expr, cond),
            ExprKind::InstanceOf(inst) => cast::compile_instanceof(self, expr, inst),
            ExprKind::Cast(cast) => cast::compile_cast(self, cast),
            ExprKind::Index(index) => member::compile_index(self, expr, index),
            ExprKind::Call(call) => calls::compile_call(self, expr, call),
            ExprKind::New(new) => new_expr::compile_new(self, expr, new),
            ExprKind::NewArray(new) => new_expr::compile_new_array(self, expr, new),
            ExprKind::ArrayInit(_) => new_expr::compile_array_init(self, expr),
            ExprKind::Lambda => Err(unsupported("lambda expression", expr)),
            ExprKind::MethodRef => Err(unsupported("method reference", expr)),
        }
    }

    /// Compile an expression and pair it with its static type.
    pub fn compile_operand(&self, expr: &Expr<'_>) -> Result<Operand> {
        let ty = type_of(expr)?;
        Ok(Operand::new(self.compile(expr)?, ty))
    }

    /// Compile the qualifier of a member access, where `super` is allowed.
    pub fn compile_qualifier(&self, qualifier: &Expr<'_>) -> Result<Evaluator> {
        match &qualifier.kind {
            ExprKind::Super(sup) => identifiers::compile_super(self, qualifier, sup),
            ExprKind::Paren(inner) => self.compile_qualifier(inner),
            _ => self.compile(qualifier),
        }
    }
}

/// The resolved static type of `expr`.
pub(crate) fn type_of(expr: &Expr<'_>) -> Result<Type> {
    expr.ty.ok_or_else(|| CompilationError::MissingType {
        text: expr.text.to_string(),
        span: expr.span,
    })
}

pub(crate) fn unsupported(construct: &str, expr: &Expr<'_>) -> CompilationError {
    CompilationError::UnsupportedConstruct {
        construct: construct.to_string(),
        text: expr.text.to_string(),
        span: expr.span,
    }
}


#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use jeval_core::ast::{Expr, ExprKind, SuperExpr};
    use jeval_core::ErrorCategory;

    use super::test_support::*;
    use super::*;
    use crate::options::CompileOptions;

    #[test]
    fn paren_is_transparent() {
        let arena = Bump::new();
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let inner = int(&arena, 4);
        let paren = Expr::new(ExprKind::Paren(inner), Some(Type::INT), "(4)");

        let compiler = ExprCompiler::new(&ctx);
        assert_eq!(compiler.compile(&paren), compiler.compile(inner));
    }

    #[test]
    fn lambda_is_structural_error() {
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let lambda = Expr::new(ExprKind::Lambda, None, "() -> 1");

        let err = ExprCompiler::new(&ctx).compile(&lambda).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Structural);
        assert_eq!(err.text(), "() -> 1");
    }

    #[test]
    fn bare_super_is_rejected() {
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let sup = Expr::new(ExprKind::Super(SuperExpr { qualifier: None }), None, "super");
        assert!(matches!(
            ExprCompiler::new(&ctx).compile(&sup),
            Err(CompilationError::SuperNotAValue { .. })
        ));
    }

    #[test]
    fn missing_type_reported_for_operand() {
        let f = fixture();
        let ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let untyped = Expr::new(ExprKind::ClassLiteral(Type::STRING), None, "String.class");
        let err = ExprCompiler::new(&ctx).compile_operand(&untyped).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Type);
        assert_eq!(err.key(), "evaluation.error.unknown.expression.type");
    }
}

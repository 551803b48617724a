//! Local variable declarations.

use jeval_core::Type;
use jeval_core::ast::{Expr, ExprKind, Stmt, VarDeclStmt};

use super::{Result, StmtCompiler};
use crate::conversion::assignment_conversion;
use crate::evaluator::{Evaluator, LiteralValue, LocalDeclaration, LocalSlot};
use crate::expr::new_expr::array_initializer;

impl<'a, 'c> StmtCompiler<'a, 'c> {
    /// Compile `T a = x, b;`.
    ///
    /// Every local starts out holding the zero value of its type. An explicit
    /// initializer becomes an assignment run after the default is stored.
    /// The name is declared before its initializer compiles, so the
    /// initializer sees it.
    pub fn compile_var_decl(&mut self, stmt: &Stmt<'_>, decl: &VarDeclStmt<'_>) -> Result<Evaluator> {
        let mut locals = Vec::with_capacity(decl.vars.len());
        for var in decl.vars {
            let local = var.decl;
            let span = if var.span.is_empty() { stmt.span } else { var.span };
            self.ctx
                .scopes_mut()
                .declare(local.name, local.ty, span, stmt.text)?;

            let init = match var.init {
                Some(init) => Some(Box::new(self.compile_initializer(local.name, local.ty, init)?)),
                None => None,
            };
            locals.push(LocalDeclaration {
                name: local.name.to_string(),
                ty: local.ty,
                default: Box::new(Evaluator::literal(LiteralValue::default_for(local.ty), local.ty)),
                init,
            });
        }
        Ok(Evaluator::Declaration(locals))
    }

    fn compile_initializer(
        &mut self,
        name: &str,
        ty: Type,
        init: &Expr<'_>,
    ) -> Result<Evaluator> {
        let compiler = self.expr_compiler();
        let value = match init.kind {
            ExprKind::ArrayInit(_) => array_initializer(&compiler, init, ty)?,
            _ => assignment_conversion(ty, compiler.compile_operand(init)?).eval,
        };
        Ok(Evaluator::Assignment {
            target: Box::new(Evaluator::local(name, LocalSlot::Fragment)),
            value: Box::new(value),
            postfix: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use jeval_core::ast::{ArrayInitExpr, CodeFragment, LocalDecl, StmtKind, VarDeclarator};
    use jeval_core::PrimitiveKind;

    use super::super::test_support::*;
    use super::*;
    use crate::context::CompileContext;
    use crate::expr::test_support::{fixture, int};
    use crate::options::CompileOptions;

    fn count(eval: &Evaluator, pred: impl Fn(&Evaluator) -> bool) -> usize {
        let mut n = 0;
        eval.walk(&mut |e| {
            if pred(e) {
                n += 1;
            }
        });
        n
    }

    #[test]
    fn integer_local_boxes_initializer_once() {
        let arena = Bump::new();
        let f = fixture();
        let mut ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        let integer = Type::boxed(PrimitiveKind::Int);
        let i = arena.alloc(LocalDecl::fragment("i", integer));
        let vars = arena.alloc_slice_copy(&[VarDeclarator {
            decl: i,
            init: Some(int(&arena, 1)),
            span: Default::default(),
        }]);
        let stmts = arena.alloc_slice_copy(&[stmt(StmtKind::Decl(VarDeclStmt { vars }), "Integer i = 1;")]);

        let eval = StmtCompiler::new(&mut ctx)
            .compile_fragment(&CodeFragment::new(stmts, "Integer i = 1;"))
            .unwrap();
        assert_eq!(count(&eval, |e| matches!(e, Evaluator::Box { .. })), 1);
        assert_eq!(
            eval.to_string(),
            format!("(fragment (decl ({integer} i null (= i (box int 1)))))")
        );
    }

    #[test]
    fn multiple_declarators_share_one_node() {
        let arena = Bump::new();
        let f = fixture();
        let mut ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        ctx.scopes_mut().push_root();
        let a = arena.alloc(LocalDecl::fragment("a", Type::LONG));
        let b = arena.alloc(LocalDecl::fragment("b", Type::LONG));
        let vars = arena.alloc_slice_copy(&[
            VarDeclarator {
                decl: a,
                init: Some(int(&arena, 2)),
                span: Default::default(),
            },
            VarDeclarator {
                decl: b,
                init: None,
                span: Default::default(),
            },
        ]);
        let decl = VarDeclStmt { vars };
        let s = stmt(StmtKind::Decl(decl), "long a = 2, b;");

        let eval = StmtCompiler::new(&mut ctx).compile_var_decl(&s, &decl).unwrap();
        assert_eq!(eval.to_string(), "(decl (long a 0L (= a (cast long 2))) (long b 0L))");
        assert!(ctx.scopes().lookup("b").is_some());
    }

    #[test]
    fn array_initializer_uses_declared_type() {
        let arena = Bump::new();
        let f = fixture();
        let mut ctx = CompileContext::new(&f.table, &f.lexical, CompileOptions::default());
        ctx.scopes_mut().push_root();
        let doubles = Type::array_of(Type::DOUBLE).unwrap();
        let xs = arena.alloc(LocalDecl::fragment("xs", doubles));
        let init = arena.alloc(Expr::new(
            ExprKind::ArrayInit(ArrayInitExpr {
                elements: arena.alloc_slice_copy(&[*int(&arena, 1)]),
            }),
            None,
            "{1}",
        ));
        let vars = arena.alloc_slice_copy(&[VarDeclarator {
            decl: xs,
            init: Some(init),
            span: Default::default(),
        }]);
        let decl = VarDeclStmt { vars };
        let s = stmt(StmtKind::Decl(decl), "double[] xs = {1};");

        let eval = StmtCompiler::new(&mut ctx).compile_var_decl(&s, &decl).unwrap();
        assert_eq!(
            eval.to_string(),
            "(decl (double[] xs null (= xs (new-array double[] { (cast double 1) }))))"
        );
    }
}

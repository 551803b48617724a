//! Statement compiler.
//!
//! The [`StmtCompiler`] compiles statements to evaluator trees, handling:
//! - Blocks and code fragments with their own scope frames
//! - Local declarations with default values and initializers
//! - If/while/do/for with optional labels
//! - Break/continue validation against the enclosing jump targets
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = StmtCompiler::new(&mut ctx);
//!
//! // Compile a statement list with its own root scope
//! let fragment = compiler.compile_fragment(&fragment)?;
//! ```

mod block;
mod do_while_stmt;
mod for_stmt;
mod if_stmt;
mod return_stmt;
mod var_decl;
mod while_stmt;

use jeval_core::CompilationError;
use jeval_core::ast::{Expr, LabeledStmt, Stmt, StmtKind};

use crate::context::CompileContext;
use crate::evaluator::Evaluator;
use crate::expr::ExprCompiler;

type Result<T> = std::result::Result<T, CompilationError>;

/// Compiles statements into evaluators.
///
/// Holds the compile context mutably: blocks push scope frames and loops
/// push jump targets while their bodies compile.
pub struct StmtCompiler<'a, 'c> {
    ctx: &'a mut CompileContext<'c>,
}

impl<'a, 'c> StmtCompiler<'a, 'c> {
    pub fn new(ctx: &'a mut CompileContext<'c>) -> Self {
        Self { ctx }
    }

    /// Compile a statement in a position where declarations are not allowed.
    pub fn compile(&mut self, stmt: &Stmt<'_>) -> Result<Evaluator> {
        self.compile_labeled(stmt, None)
    }

    /// Compile one item of a statement list, where declarations are allowed.
    fn compile_list_item(&mut self, stmt: &Stmt<'_>) -> Result<Evaluator> {
        match &stmt.kind {
            StmtKind::Decl(decl) => self.compile_var_decl(stmt, decl),
            _ => self.compile(stmt),
        }
    }

    /// Compile a statement carrying the label written in front of it.
    fn compile_labeled(&mut self, stmt: &Stmt<'_>, label: Option<&str>) -> Result<Evaluator> {
        if let Some(label) = label
            && !matches!(
                stmt.kind,
                StmtKind::While(_) | StmtKind::DoWhile(_) | StmtKind::For(_) | StmtKind::If(_)
            )
        {
            return Err(CompilationError::InvalidLabelTarget {
                label: label.to_string(),
                text: stmt.text.to_string(),
                span: stmt.span,
            });
        }

        match &stmt.kind {
            StmtKind::Empty => Ok(Evaluator::Block(Vec::new())),
            StmtKind::Expr(expr) => self.compile_expr(expr),
            StmtKind::Decl(_) => Err(CompilationError::DeclarationOutsideFragment {
                text: stmt.text.to_string(),
                span: stmt.span,
            }),
            StmtKind::Block(stmts) => self.compile_block(stmts),
            StmtKind::If(if_stmt) => self.compile_if(if_stmt, label),
            StmtKind::While(while_stmt) => self.compile_while(while_stmt, label),
            StmtKind::DoWhile(do_while) => self.compile_do_while(do_while, label),
            StmtKind::For(for_stmt) => self.compile_for(for_stmt, label),
            StmtKind::Break(target) => self.compile_break(stmt, *target),
            StmtKind::Continue(target) => self.compile_continue(stmt, *target),
            StmtKind::Return(value) => self.compile_return(*value),
            StmtKind::Throw(value) => self.compile_throw(value),
            StmtKind::Labeled(LabeledStmt { label, body }) => self.compile_labeled(body, Some(*label)),
            StmtKind::Foreach => Err(unsupported("enhanced for loop", stmt)),
            StmtKind::Switch => Err(unsupported("switch statement", stmt)),
            StmtKind::Try => Err(unsupported("try statement", stmt)),
            StmtKind::Synchronized => Err(unsupported("synchronized statement", stmt)),
            StmtKind::Assert => Err(unsupported("assert statement", stmt)),
            StmtKind::LocalClass => Err(unsupported("local class declaration", stmt)),
        }
    }

    fn compile_expr(&mut self, expr: &Expr<'_>) -> Result<Evaluator> {
        self.expr_compiler().compile(expr)
    }

    fn compile_break(&mut self, stmt: &Stmt<'_>, label: Option<&str>) -> Result<Evaluator> {
        self.ctx.jumps().check_break(label, stmt.text, stmt.span)?;
        Ok(Evaluator::Break(label.map(str::to_string)))
    }

    fn compile_continue(&mut self, stmt: &Stmt<'_>, label: Option<&str>) -> Result<Evaluator> {
        self.ctx.jumps().check_continue(label, stmt.text, stmt.span)?;
        Ok(Evaluator::Continue(label.map(str::to_string)))
    }

    /// Create an expression compiler over the current context.
    fn expr_compiler(&self) -> ExprCompiler<'_, 'c> {
        ExprCompiler::new(&*self.ctx)
    }

    /// Run `body` inside a loop target, exiting the target even on error.
    fn in_loop<T>(
        &mut self,
        label: Option<&str>,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.ctx.jumps_mut().enter_loop(label);
        let result = body(self);
        self.ctx.jumps_mut().exit();
        result
    }

    /// Run `body` inside a fresh scope frame, popping it even on error.
    fn in_scope<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.ctx.scopes_mut().push_frame();
        let result = body(self);
        self.ctx.scopes_mut().pop_frame();
        result
    }

    /// Like [`Self::in_scope`], but the frame is a fragment root.
    fn in_fragment_scope<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.ctx.scopes_mut().push_root();
        let result = body(self);
        self.ctx.scopes_mut().pop_frame();
        result
    }
}

fn unsupported(construct: &str, stmt: &Stmt<'_>) -> CompilationError {
    CompilationError::UnsupportedConstruct {
        construct: construct.to_string(),
        text: stmt.text.to_string(),
        span: stmt.span,
    }
}

//! Evaluator Compiler
//!
//! Compiles a typed Java AST, as produced by a resolver for a suspended
//! debuggee, into an [`Evaluator`] tree that an executor can run against the
//! live frame.
//!
//! ## Architecture
//!
//! - **Expressions**: post-order walk; conversions (boxing, unboxing, numeric
//!   promotion, casts) are inserted after the children compile
//! - **Statements**: a transient scope arena for fragment locals and a jump
//!   tracker for `break`/`continue` labels
//! - **Access paths**: locals, fields and methods are reached through
//!   `this`/`super` hop chains computed from the [`LexicalContext`]
//!
//! ## Modules
//!
//! - [`evaluator`]: The evaluator IR and its s-expression rendering
//! - [`conversion`]: Unary, binary, assignment and cast conversions
//! - [`access`]: Enclosing-instance hops for locals, fields and methods
//! - [`scope`]: Fragment scope arena
//! - [`jumps`]: Loop and label targets
//! - [`expr`]: Expression compiler
//! - [`stmt`]: Statement compiler
//!
//! # Example
//!
//! ```ignore
//! let compiler = Compiler::new(&table, &lexical);
//! let evaluator = compiler.compile_fragment(&fragment)?;
//! println!("{evaluator}");
//! ```

pub mod access;
pub mod context;
pub mod conversion;
mod error;
pub mod evaluator;
pub mod expr;
pub mod jumps;
pub mod options;
pub mod scope;
pub mod stmt;

pub use context::CompileContext;
pub use conversion::Operand;
pub use error::CompileError;
pub use evaluator::{
    ClassFilter, Evaluator, LiteralValue, LocalDeclaration, LocalSlot, MethodRef, UnaryOperator,
};
pub use expr::ExprCompiler;
pub use options::CompileOptions;
pub use scope::{FragmentScopes, ScopeId};
pub use stmt::StmtCompiler;

// Re-export CompilationError from core for convenience
pub use jeval_core::CompilationError;

use jeval_core::ast::{CodeFragment, Expr, Stmt};
use jeval_core::{ClassTable, LexicalContext};

/// The main compiler entry point.
///
/// Borrows the frozen class table and the lexical context of the evaluation
/// position. Every call starts from a fresh [`CompileContext`], so one
/// `Compiler` can be reused for any number of inputs and shared across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'c> {
    table: &'c ClassTable,
    lexical: &'c LexicalContext,
    options: CompileOptions,
}

impl<'c> Compiler<'c> {
    pub fn new(table: &'c ClassTable, lexical: &'c LexicalContext) -> Self {
        Self::with_options(table, lexical, CompileOptions::default())
    }

    pub fn with_options(
        table: &'c ClassTable,
        lexical: &'c LexicalContext,
        options: CompileOptions,
    ) -> Self {
        Self {
            table,
            lexical,
            options,
        }
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    fn context(&self) -> CompileContext<'c> {
        CompileContext::new(self.table, self.lexical, self.options)
    }

    /// Compile a single expression.
    #[tracing::instrument(level = "trace", skip_all, fields(text = expr.text))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_expression(&self, expr: &Expr<'_>) -> Result<Evaluator, CompileError> {
        let ctx = self.context();
        Ok(ExprCompiler::new(&ctx).compile(expr)?)
    }

    /// Compile a single statement.
    ///
    /// There is no fragment scope, so a local declaration is rejected, even
    /// inside a nested block or a `for` header.
    #[tracing::instrument(level = "trace", skip_all, fields(text = stmt.text))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_statement(&self, stmt: &Stmt<'_>) -> Result<Evaluator, CompileError> {
        let mut ctx = self.context();
        Ok(StmtCompiler::new(&mut ctx).compile(stmt)?)
    }

    /// Compile a code fragment into an [`Evaluator::CodeFragment`].
    #[tracing::instrument(level = "trace", skip_all, fields(stmts = fragment.stmts.len()))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_fragment(&self, fragment: &CodeFragment<'_>) -> Result<Evaluator, CompileError> {
        let mut ctx = self.context();
        Ok(StmtCompiler::new(&mut ctx).compile_fragment(fragment)?)
    }
}

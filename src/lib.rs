//! jeval
//!
//! Compiles typed Java expressions and code fragments, written by a user at a
//! debugger breakpoint, into [`Evaluator`] trees that a debuggee-side executor
//! runs against the suspended frame.
//!
//! The resolver that parses and types the input lives outside this crate; it
//! hands over a [`ast`] tree borrowed from its own arena together with the
//! [`ClassTable`] and the [`LexicalContext`] of the breakpoint.
//!
//! # Example
//!
//! ```ignore
//! use jeval::prelude::*;
//!
//! let table = ClassTable::with_builtins();
//! let lexical = LexicalContext::from_table(&table, main, ThisBinding::Instance);
//! let evaluator = jeval::compile_fragment(&table, &lexical, &fragment)?;
//! println!("{evaluator}");
//! ```

pub use jeval_compiler::{
    ClassFilter, CompilationError, CompileError, CompileOptions, Compiler, Evaluator,
    LiteralValue, LocalDeclaration, LocalSlot, MethodRef, UnaryOperator,
};
pub use jeval_core::{
    ArrayElement, ClassDescriptor, ClassId, ClassKind, ClassTable, ErrorCategory,
    LexicalContext, PrimitiveKind, Span, ThisBinding, Type, ast, well_known,
};

// Re-export main types
pub mod prelude {
    pub use crate::{compile_expression, compile_fragment};
    pub use jeval_compiler::{CompileError, CompileOptions, Compiler, Evaluator};
    pub use jeval_core::ast::{CodeFragment, Expr, Stmt};
    pub use jeval_core::{ClassDescriptor, ClassKind, ClassTable, LexicalContext, ThisBinding, Type};
}

use jeval_core::ast::{CodeFragment, Expr};

/// Compile a code fragment with the default options.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_fragment(
    table: &ClassTable,
    lexical: &LexicalContext,
    fragment: &CodeFragment<'_>,
) -> Result<Evaluator, CompileError> {
    let evaluator = Compiler::new(table, lexical).compile_fragment(fragment)?;
    tracing::debug!(nodes = evaluator.node_count(), "compiled fragment");
    Ok(evaluator)
}

/// Compile a single expression with the default options.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_expression(
    table: &ClassTable,
    lexical: &LexicalContext,
    expr: &Expr<'_>,
) -> Result<Evaluator, CompileError> {
    let evaluator = Compiler::new(table, lexical).compile_expression(expr)?;
    tracing::debug!(nodes = evaluator.node_count(), "compiled expression");
    Ok(evaluator)
}

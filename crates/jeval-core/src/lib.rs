//! Shared vocabulary for the jeval compiler.
//!
//! This crate holds everything both the resolver that produces typed ASTs and
//! the compiler that consumes them need to agree on:
//!
//! - [`ClassId`]: deterministic class identity from a qualified name
//! - [`Type`] and [`PrimitiveKind`]: resolved static types
//! - [`ClassTable`]: the frozen class database
//! - [`LexicalContext`]: enclosing classes at the evaluation position
//! - [`ast`]: the typed input AST
//! - [`CompilationError`]: every failure the compiler reports

pub mod ast;
pub mod class_id;
pub mod class_table;
pub mod context;
pub mod error;
pub mod span;
pub mod types;

pub use class_id::{ClassId, well_known};
pub use class_table::{ClassDescriptor, ClassKind, ClassTable};
pub use context::{LexicalContext, ThisBinding};
pub use error::{CompilationError, ErrorCategory};
pub use span::Span;
pub use types::{ArrayElement, PrimitiveKind, Type};

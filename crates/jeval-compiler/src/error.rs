//! The error returned from the compiler entry points.

use jeval_core::{CompilationError, ErrorCategory, Span};
use thiserror::Error;

/// A failed compilation, flattened for the caller.
///
/// The message key is stable across releases and meant for localized
/// display; `text` quotes the sub-expression or statement that was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{category} error: {message}")]
pub struct CompileError {
    /// Stable message key, e.g. `evaluation.error.not.lvalue`.
    pub key: &'static str,
    /// Human-readable message, including the span.
    pub message: String,
    /// Source text of the offending node.
    pub text: String,
    /// Where the offending node starts.
    pub span: Span,
    pub category: ErrorCategory,
    /// The compiler's own classification of the failure.
    #[source]
    pub source: CompilationError,
}

impl CompileError {
    pub fn is_structural(&self) -> bool {
        self.category == ErrorCategory::Structural
    }

    pub fn is_type_error(&self) -> bool {
        self.category == ErrorCategory::Type
    }

    pub fn is_resolution(&self) -> bool {
        self.category == ErrorCategory::Resolution
    }
}

impl From<CompilationError> for CompileError {
    fn from(source: CompilationError) -> Self {
        Self {
            key: source.key(),
            message: source.to_string(),
            text: source.text().to_string(),
            span: source.span(),
            category: source.category(),
            source,
        }
    }
}

//! Compilation errors.
//!
//! Every failure the compiler can report is a [`CompilationError`] variant.
//! Each variant carries the source text of the offending sub-expression and
//! its span, so the caller can quote exactly what was rejected.
//!
//! ```text
//! CompilationError
//! ├── Structural  - construct the evaluator cannot express
//! ├── Type        - missing or incompatible static types
//! └── Resolution  - declaration not reachable from the evaluation position
//! ```

use thiserror::Error;

use crate::Span;

/// Broad classification of a [`CompilationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Structural,
    Type,
    Resolution,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorCategory::Structural => "structural",
            ErrorCategory::Type => "type",
            ErrorCategory::Resolution => "resolution",
        })
    }
}

/// Errors produced while compiling a typed AST into evaluators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompilationError {
    // ========================================================================
    // Structural
    // ========================================================================
    /// A syntactic construct the evaluator has no node for.
    #[error("at {span}: {construct} is not supported in evaluation: '{text}'")]
    UnsupportedConstruct {
        construct: String,
        text: String,
        span: Span,
    },

    /// `new T[a][b]` with more than one dimension expression.
    #[error("at {span}: multi-dimensional array creation is not supported: '{text}'")]
    ArrayDimensionsNotSupported { text: String, span: Span },

    /// `new T() { ... }`.
    #[error("at {span}: anonymous class creation is not supported: '{text}'")]
    AnonymousClassNotSupported { text: String, span: Span },

    /// Compound assignment operators.
    #[error("at {span}: operator '{op}' is not supported: '{text}'")]
    OperationNotSupported { op: String, text: String, span: Span },

    /// A declaration statement outside of a fragment or block.
    #[error("at {span}: local variable declarations are only allowed in code fragments: '{text}'")]
    DeclarationOutsideFragment { text: String, span: Span },

    /// A local declared twice in the same scope frame.
    #[error("at {span}: variable '{name}' is already declared in this scope")]
    VariableRedeclaration {
        name: String,
        text: String,
        span: Span,
    },

    /// Assignment to something that is not a variable or array element.
    #[error("at {span}: '{text}' cannot be assigned to")]
    NotAnLvalue { text: String, span: Span },

    /// `super` used as a value.
    #[error("at {span}: 'super' can only qualify a member access: '{text}'")]
    SuperNotAValue { text: String, span: Span },

    /// Unlabeled `break` with no enclosing loop.
    #[error("at {span}: 'break' outside of a loop")]
    BreakOutsideLoop { text: String, span: Span },

    /// Unlabeled `continue` with no enclosing loop.
    #[error("at {span}: 'continue' outside of a loop")]
    ContinueOutsideLoop { text: String, span: Span },

    /// `break`/`continue` naming a label that is not in scope.
    #[error("at {span}: undefined label '{label}'")]
    UndefinedLabel {
        label: String,
        text: String,
        span: Span,
    },

    /// `continue label` where the label is not on a loop.
    #[error("at {span}: label '{label}' does not denote a loop")]
    NotALoopLabel {
        label: String,
        text: String,
        span: Span,
    },

    /// A label on a statement other than a loop or `if`.
    #[error("at {span}: label '{label}' must precede a loop or if statement")]
    InvalidLabelTarget {
        label: String,
        text: String,
        span: Span,
    },

    // ========================================================================
    // Type
    // ========================================================================
    /// The resolver left a sub-expression untyped.
    #[error("at {span}: cannot determine the type of '{text}'")]
    MissingType { text: String, span: Span },

    /// No operator rule for the operand types.
    #[error("at {span}: operator '{op}' cannot be applied to {left}, {right}")]
    IncompatibleOperands {
        op: String,
        left: String,
        right: String,
        text: String,
        span: Span,
    },

    /// Unary operator applied to an operand of the wrong type.
    #[error("at {span}: operator '{op}' cannot be applied to {operand}")]
    IncompatibleOperand {
        op: String,
        operand: String,
        text: String,
        span: Span,
    },

    /// Indexing something that is not an array.
    #[error("at {span}: array type expected, found {found}")]
    NotAnArray {
        found: String,
        text: String,
        span: Span,
    },

    /// Value cannot be converted to the required type.
    #[error("at {span}: incompatible types: {from} cannot be converted to {to}")]
    IncompatibleTypes {
        from: String,
        to: String,
        text: String,
        span: Span,
    },

    // ========================================================================
    // Resolution
    // ========================================================================
    /// A name the resolver could not bind.
    #[error("at {span}: cannot resolve symbol '{name}'")]
    UnresolvedSymbol {
        name: String,
        text: String,
        span: Span,
    },

    /// A method call the resolver could not bind.
    #[error("at {span}: cannot resolve method '{name}'")]
    UnresolvedMethod {
        name: String,
        text: String,
        span: Span,
    },

    /// `this` (or an instance member) with no live instance.
    #[error("at {span}: 'this' is not available in a static context: '{text}'")]
    ThisNotAvailable { text: String, span: Span },

    /// No enclosing instance of the required class is reachable.
    #[error("at {span}: no enclosing instance of type {class} is in scope")]
    NoEnclosingInstance {
        class: String,
        text: String,
        span: Span,
    },

    /// A captured local whose declaring scope is not on the class chain.
    #[error("at {span}: local variable '{name}' is not accessible from here")]
    LocalNotAccessible {
        name: String,
        text: String,
        span: Span,
    },
}

impl CompilationError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompilationError::UnsupportedConstruct { span, .. } => *span,
            CompilationError::ArrayDimensionsNotSupported { span, .. } => *span,
            CompilationError::AnonymousClassNotSupported { span, .. } => *span,
            CompilationError::OperationNotSupported { span, .. } => *span,
            CompilationError::DeclarationOutsideFragment { span, .. } => *span,
            CompilationError::VariableRedeclaration { span, .. } => *span,
            CompilationError::NotAnLvalue { span, .. } => *span,
            CompilationError::SuperNotAValue { span, .. } => *span,
            CompilationError::BreakOutsideLoop { span, .. } => *span,
            CompilationError::ContinueOutsideLoop { span, .. } => *span,
            CompilationError::UndefinedLabel { span, .. } => *span,
            CompilationError::NotALoopLabel { span, .. } => *span,
            CompilationError::InvalidLabelTarget { span, .. } => *span,
            CompilationError::MissingType { span, .. } => *span,
            CompilationError::IncompatibleOperands { span, .. } => *span,
            CompilationError::IncompatibleOperand { span, .. } => *span,
            CompilationError::NotAnArray { span, .. } => *span,
            CompilationError::IncompatibleTypes { span, .. } => *span,
            CompilationError::UnresolvedSymbol { span, .. } => *span,
            CompilationError::UnresolvedMethod { span, .. } => *span,
            CompilationError::ThisNotAvailable { span, .. } => *span,
            CompilationError::NoEnclosingInstance { span, .. } => *span,
            CompilationError::LocalNotAccessible { span, .. } => *span,
        }
    }

    /// Source text of the offending node.
    pub fn text(&self) -> &str {
        match self {
            CompilationError::UnsupportedConstruct { text, .. }
            | CompilationError::ArrayDimensionsNotSupported { text, .. }
            | CompilationError::AnonymousClassNotSupported { text, .. }
            | CompilationError::OperationNotSupported { text, .. }
            | CompilationError::DeclarationOutsideFragment { text, .. }
            | CompilationError::VariableRedeclaration { text, .. }
            | CompilationError::NotAnLvalue { text, .. }
            | CompilationError::SuperNotAValue { text, .. }
            | CompilationError::BreakOutsideLoop { text, .. }
            | CompilationError::ContinueOutsideLoop { text, .. }
            | CompilationError::UndefinedLabel { text, .. }
            | CompilationError::NotALoopLabel { text, .. }
            | CompilationError::InvalidLabelTarget { text, .. }
            | CompilationError::MissingType { text, .. }
            | CompilationError::IncompatibleOperands { text, .. }
            | CompilationError::IncompatibleOperand { text, .. }
            | CompilationError::NotAnArray { text, .. }
            | CompilationError::IncompatibleTypes { text, .. }
            | CompilationError::UnresolvedSymbol { text, .. }
            | CompilationError::UnresolvedMethod { text, .. }
            | CompilationError::ThisNotAvailable { text, .. }
            | CompilationError::NoEnclosingInstance { text, .. }
            | CompilationError::LocalNotAccessible { text, .. } => text,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CompilationError::UnsupportedConstruct { .. }
            | CompilationError::ArrayDimensionsNotSupported { .. }
            | CompilationError::AnonymousClassNotSupported { .. }
            | CompilationError::OperationNotSupported { .. }
            | CompilationError::DeclarationOutsideFragment { .. }
            | CompilationError::VariableRedeclaration { .. }
            | CompilationError::NotAnLvalue { .. }
            | CompilationError::SuperNotAValue { .. }
            | CompilationError::BreakOutsideLoop { .. }
            | CompilationError::ContinueOutsideLoop { .. }
            | CompilationError::UndefinedLabel { .. }
            | CompilationError::NotALoopLabel { .. }
            | CompilationError::InvalidLabelTarget { .. } => ErrorCategory::Structural,
            CompilationError::MissingType { .. }
            | CompilationError::IncompatibleOperands { .. }
            | CompilationError::IncompatibleOperand { .. }
            | CompilationError::NotAnArray { .. }
            | CompilationError::IncompatibleTypes { .. } => ErrorCategory::Type,
            CompilationError::UnresolvedSymbol { .. }
            | CompilationError::UnresolvedMethod { .. }
            | CompilationError::ThisNotAvailable { .. }
            | CompilationError::NoEnclosingInstance { .. }
            | CompilationError::LocalNotAccessible { .. } => ErrorCategory::Resolution,
        }
    }

    /// Stable message key for localized display.
    pub fn key(&self) -> &'static str {
        match self {
            CompilationError::UnsupportedConstruct { .. } => "evaluation.error.construct.not.supported",
            CompilationError::ArrayDimensionsNotSupported { .. } => {
                "evaluation.error.array.dimensions.not.supported"
            }
            CompilationError::AnonymousClassNotSupported { .. } => {
                "evaluation.error.anonymous.class.evaluation.not.supported"
            }
            CompilationError::OperationNotSupported { .. } => "evaluation.error.operation.not.supported",
            CompilationError::DeclarationOutsideFragment { .. } => {
                "evaluation.error.local.variable.declarations.not.supported"
            }
            CompilationError::VariableRedeclaration { .. } => "evaluation.error.variable.already.declared",
            CompilationError::NotAnLvalue { .. } => "evaluation.error.not.lvalue",
            CompilationError::SuperNotAValue { .. } => "evaluation.error.super.not.value",
            CompilationError::BreakOutsideLoop { .. } => "evaluation.error.break.outside.loop",
            CompilationError::ContinueOutsideLoop { .. } => "evaluation.error.continue.outside.loop",
            CompilationError::UndefinedLabel { .. } => "evaluation.error.undefined.label",
            CompilationError::NotALoopLabel { .. } => "evaluation.error.not.loop.label",
            CompilationError::InvalidLabelTarget { .. } => "evaluation.error.invalid.label.target",
            CompilationError::MissingType { .. } => "evaluation.error.unknown.expression.type",
            CompilationError::IncompatibleOperands { .. } => {
                "evaluation.error.incompatible.operand.types"
            }
            CompilationError::IncompatibleOperand { .. } => "evaluation.error.incompatible.operand.type",
            CompilationError::NotAnArray { .. } => "evaluation.error.array.type.expected",
            CompilationError::IncompatibleTypes { .. } => "evaluation.error.incompatible.types",
            CompilationError::UnresolvedSymbol { .. } => "evaluation.error.cannot.resolve.symbol",
            CompilationError::UnresolvedMethod { .. } => "evaluation.error.cannot.resolve.method",
            CompilationError::ThisNotAvailable { .. } => "evaluation.error.this.not.available",
            CompilationError::NoEnclosingInstance { .. } => "evaluation.error.outer.instance.not.found",
            CompilationError::LocalNotAccessible { .. } => "evaluation.error.local.variable.missing",
        }
    }
}

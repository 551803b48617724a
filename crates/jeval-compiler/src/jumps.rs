//! Break/continue target tracking.
//!
//! Keeps a stack of the statements a `break` or `continue` can name: every
//! loop, plus labeled `if` statements. Nothing is patched; the executor
//! resolves targets by label at run time. This module only rejects jumps
//! that could never land.

use jeval_core::{CompilationError, Span};

/// Manages jump targets for control flow.
#[derive(Debug, Default)]
pub struct JumpTracker {
    /// Enclosing targets (innermost last)
    targets: Vec<JumpTarget>,
}

#[derive(Debug)]
struct JumpTarget {
    label: Option<String>,
    is_loop: bool,
}

impl JumpTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a loop, optionally labeled.
    pub fn enter_loop(&mut self, label: Option<&str>) {
        self.targets.push(JumpTarget {
            label: label.map(str::to_string),
            is_loop: true,
        });
    }

    /// Enter a labeled non-loop statement.
    pub fn enter_labeled(&mut self, label: &str) {
        self.targets.push(JumpTarget {
            label: Some(label.to_string()),
            is_loop: false,
        });
    }

    /// Exit the innermost target.
    pub fn exit(&mut self) {
        self.targets.pop();
    }

    /// Check if we're currently inside a loop.
    pub fn in_loop(&self) -> bool {
        self.targets.iter().any(|t| t.is_loop)
    }

    fn find(&self, label: &str) -> Option<&JumpTarget> {
        self.targets
            .iter()
            .rev()
            .find(|t| t.label.as_deref() == Some(label))
    }

    /// Validate `break` or `break label`.
    pub fn check_break(
        &self,
        label: Option<&str>,
        text: &str,
        span: Span,
    ) -> Result<(), CompilationError> {
        match label {
            None if self.in_loop() => Ok(()),
            None => Err(CompilationError::BreakOutsideLoop {
                text: text.to_string(),
                span,
            }),
            Some(label) => match self.find(label) {
                Some(_) => Ok(()),
                None => Err(CompilationError::UndefinedLabel {
                    label: label.to_string(),
                    text: text.to_string(),
                    span,
                }),
            },
        }
    }

    /// Validate `continue` or `continue label`.
    pub fn check_continue(
        &self,
        label: Option<&str>,
        text: &str,
        span: Span,
    ) -> Result<(), CompilationError> {
        match label {
            None if self.in_loop() => Ok(()),
            None => Err(CompilationError::ContinueOutsideLoop {
                text: text.to_string(),
                span,
            }),
            Some(label) => match self.find(label) {
                Some(target) if target.is_loop => Ok(()),
                Some(_) => Err(CompilationError::NotALoopLabel {
                    label: label.to_string(),
                    text: text.to_string(),
                    span,
                }),
                None => Err(CompilationError::UndefinedLabel {
                    label: label.to_string(),
                    text: text.to_string(),
                    span,
                }),
            },
        }
    }
}

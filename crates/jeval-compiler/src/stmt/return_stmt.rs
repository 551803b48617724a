//! Return and throw statements.

use jeval_core::ast::Expr;

use super::{Result, StmtCompiler};
use crate::evaluator::Evaluator;

impl<'a, 'c> StmtCompiler<'a, 'c> {
    /// Compile `return;` or `return value;`.
    ///
    /// The value is passed through unconverted; the executor hands it back
    /// as the fragment's result.
    pub fn compile_return(&mut self, value: Option<&Expr<'_>>) -> Result<Evaluator> {
        let value = match value {
            Some(value) => Some(Box::new(self.expr_compiler().compile(value)?)),
            None => None,
        };
        Ok(Evaluator::Return(value))
    }

    /// Compile `throw value;`.
    pub fn compile_throw(&mut self, value: &Expr<'_>) -> Result<Evaluator> {
        Ok(Evaluator::Throw(Box::new(self.expr_compiler().compile(value)?)))
    }
}

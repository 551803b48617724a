//! If statement compilation.

use jeval_core::ast::IfStmt;

use super::{Result, StmtCompiler};
use crate::evaluator::Evaluator;
use crate::expr::ternary::compile_condition;

impl<'a, 'c> StmtCompiler<'a, 'c> {
    /// Compile `if (c) a else b`.
    ///
    /// A labeled `if` is a `break` target for its branches, never a
    /// `continue` target.
    pub fn compile_if(&mut self, if_stmt: &IfStmt<'_>, label: Option<&str>) -> Result<Evaluator> {
        let condition = compile_condition(&self.expr_compiler(), if_stmt.condition)?;

        if let Some(label) = label {
            self.ctx.jumps_mut().enter_labeled(label);
        }
        let branches = self.compile_branches(if_stmt);
        if label.is_some() {
            self.ctx.jumps_mut().exit();
        }
        let (then_branch, else_branch) = branches?;

        Ok(Evaluator::If {
            label: label.map(str::to_string),
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    fn compile_branches(&mut self, if_stmt: &IfStmt<'_>) -> Result<(Evaluator, Option<Evaluator>)> {
        let then_branch = self.compile(if_stmt.then_branch)?;
        let else_branch = match if_stmt.else_branch {
            Some(else_branch) => Some(self.compile(else_branch)?),
            None => None,
        };
        Ok((then_branch, else_branch))
    }
}

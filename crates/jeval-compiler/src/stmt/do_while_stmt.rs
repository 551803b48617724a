//! Do-while loop compilation.

use jeval_core::ast::DoWhileStmt;

use super::{Result, StmtCompiler};
use crate::evaluator::Evaluator;
use crate::expr::ternary::compile_condition;

impl<'a, 'c> StmtCompiler<'a, 'c> {
    /// Compile `do body while (c);`. The body runs at least once.
    pub fn compile_do_while(
        &mut self,
        do_while: &DoWhileStmt<'_>,
        label: Option<&str>,
    ) -> Result<Evaluator> {
        let body = self.in_loop(label, |this| this.compile(do_while.body))?;
        let condition = compile_condition(&self.expr_compiler(), do_while.condition)?;

        Ok(Evaluator::DoWhile {
            label: label.map(str::to_string),
            body: Box::new(body),
            condition: Box::new(condition),
        })
    }
}

//! While loop compilation.

use jeval_core::ast::WhileStmt;

use super::{Result, StmtCompiler};
use crate::evaluator::Evaluator;
use crate::expr::ternary::compile_condition;

impl<'a, 'c> StmtCompiler<'a, 'c> {
    /// Compile a while loop.
    ///
    /// The condition must be boolean after unboxing. The body compiles inside
    /// a loop target so it may `break` and `continue`.
    pub fn compile_while(&mut self, while_stmt: &WhileStmt<'_>, label: Option<&str>) -> Result<Evaluator> {
        let condition = compile_condition(&self.expr_compiler(), while_stmt.condition)?;
        let body = self.in_loop(label, |this| this.compile(while_stmt.body))?;

        Ok(Evaluator::While {
            label: label.map(str::to_string),
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }
}

//! For loop compilation.

use jeval_core::ast::ForStmt;

use super::{Result, StmtCompiler};
use crate::evaluator::Evaluator;
use crate::expr::ternary::compile_condition;

impl<'a, 'c> StmtCompiler<'a, 'c> {
    /// Compile `for (init; cond; update) body`.
    ///
    /// The init statements get their own scope frame, so a loop variable is
    /// visible in the condition, update and body but not after the loop. A
    /// missing condition loops forever.
    pub fn compile_for(&mut self, for_stmt: &ForStmt<'_>, label: Option<&str>) -> Result<Evaluator> {
        self.in_scope(|this| {
            let init = for_stmt
                .init
                .iter()
                .map(|stmt| this.compile_list_item(stmt))
                .collect::<Result<Vec<_>>>()?;

            let condition = match for_stmt.condition {
                Some(condition) => Some(Box::new(compile_condition(&this.expr_compiler(), condition)?)),
                None => None,
            };

            let update = {
                let compiler = this.expr_compiler();
                for_stmt
                    .update
                    .iter()
                    .map(|expr| compiler.compile(expr))
                    .collect::<Result<Vec<_>>>()?
            };

            let body = this.in_loop(label, |this| this.compile(for_stmt.body))?;

            Ok(Evaluator::For {
                label: label.map(str::to_string),
                init,
                condition,
                update,
                body: Box::new(body),
            })
        })
    }
}

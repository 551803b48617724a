//! Block statements and code fragments.

use jeval_core::ast::{CodeFragment, Stmt};

use super::{Result, StmtCompiler};
use crate::evaluator::Evaluator;

impl<'a, 'c> StmtCompiler<'a, 'c> {
    /// Compile a block statement.
    ///
    /// Each item is pinned so its value stays reachable until the block
    /// ends. The block gets its own scope frame.
    pub fn compile_block(&mut self, stmts: &[Stmt<'_>]) -> Result<Evaluator> {
        self.in_scope(|this| {
            let items = this.compile_list(stmts)?;
            Ok(Evaluator::Block(items.into_iter().map(Evaluator::pinned).collect()))
        })
    }

    /// Compile a code fragment under a fresh root scope.
    ///
    /// Local declarations are accepted only beneath this root.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_fragment(&mut self, fragment: &CodeFragment<'_>) -> Result<Evaluator> {
        self.in_fragment_scope(|this| Ok(Evaluator::CodeFragment(this.compile_list(fragment.stmts)?)))
    }

    fn compile_list(&mut self, stmts: &[Stmt<'_>]) -> Result<Vec<Evaluator>> {
        stmts.iter().map(|stmt| self.compile_list_item(stmt)).collect()
    }
}

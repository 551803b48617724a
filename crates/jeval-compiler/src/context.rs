//! Per-call compilation state.
//!
//! A [`CompileContext`] lives for exactly one compile call. It borrows the
//! frozen class table and lexical context, and owns the transient fragment
//! scope arena and jump tracker.

use jeval_core::{ClassTable, LexicalContext, Type};

use crate::jumps::JumpTracker;
use crate::options::CompileOptions;
use crate::scope::FragmentScopes;

/// Compilation context threaded through the expression and statement compilers.
#[derive(Debug)]
pub struct CompileContext<'c> {
    table: &'c ClassTable,
    lexical: &'c LexicalContext,
    options: CompileOptions,
    scopes: FragmentScopes,
    jumps: JumpTracker,
}

impl<'c> CompileContext<'c> {
    pub fn new(table: &'c ClassTable, lexical: &'c LexicalContext, options: CompileOptions) -> Self {
        Self {
            table,
            lexical,
            options,
            scopes: FragmentScopes::new(),
            jumps: JumpTracker::new(),
        }
    }

    pub fn table(&self) -> &'c ClassTable {
        self.table
    }

    pub fn lexical(&self) -> &'c LexicalContext {
        self.lexical
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    pub fn scopes(&self) -> &FragmentScopes {
        &self.scopes
    }

    pub fn scopes_mut(&mut self) -> &mut FragmentScopes {
        &mut self.scopes
    }

    pub fn jumps(&self) -> &JumpTracker {
        &self.jumps
    }

    pub fn jumps_mut(&mut self) -> &mut JumpTracker {
        &mut self.jumps
    }

    /// Source spelling of `ty` for error messages.
    pub fn type_name(&self, ty: Type) -> String {
        self.table.display_type(ty)
    }
}

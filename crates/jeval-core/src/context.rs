//! Lexical context of the position being evaluated.

use crate::class_id::ClassId;
use crate::class_table::ClassTable;

/// Whether a live `this` exists at the evaluation position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThisBinding {
    /// Suspended in an instance method: `this` is the innermost class instance.
    #[default]
    Instance,
    /// Suspended in a static method or initializer.
    Static,
}

/// The chain of classes enclosing the evaluation position, innermost first.
///
/// Index `i` of the chain is the class reached after `i` enclosing-instance
/// hops from the current `this`, which is what makes hop counting pure index
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalContext {
    classes: Vec<ClassId>,
    this_binding: ThisBinding,
}

impl LexicalContext {
    /// Build a context from a precomputed chain (innermost first).
    pub fn new(classes: Vec<ClassId>, this_binding: ThisBinding) -> Self {
        Self {
            classes,
            this_binding,
        }
    }

    /// Build the chain for `innermost` from the class table's `outer` links.
    pub fn from_table(table: &ClassTable, innermost: ClassId, this_binding: ThisBinding) -> Self {
        Self::new(table.enclosing_chain(innermost), this_binding)
    }

    /// A context outside of any class (e.g. a scratch evaluation).
    pub fn detached() -> Self {
        Self::new(Vec::new(), ThisBinding::Static)
    }

    /// The class the evaluation position is lexically inside.
    pub fn current_class(&self) -> Option<ClassId> {
        self.classes.first().copied()
    }

    /// The enclosing classes, innermost first.
    pub fn classes(&self) -> &[ClassId] {
        &self.classes
    }

    pub fn this_binding(&self) -> ThisBinding {
        self.this_binding
    }

    pub fn has_this(&self) -> bool {
        self.this_binding == ThisBinding::Instance && !self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_table::{ClassDescriptor, ClassKind};

    #[test]
    fn chain_from_table() {
        let mut table = ClassTable::with_builtins();
        let outer = table.insert(ClassDescriptor::new("p.A"));
        let inner = table.insert(ClassDescriptor::new("p.A$B").nested_in(outer, ClassKind::Inner));

        let ctx = LexicalContext::from_table(&table, inner, ThisBinding::Instance);
        assert_eq!(ctx.classes(), &[inner, outer]);
        assert_eq!(ctx.current_class(), Some(inner));
        assert!(ctx.has_this());
    }

    #[test]
    fn detached_has_no_this() {
        let ctx = LexicalContext::detached();
        assert!(!ctx.has_this());
        assert_eq!(ctx.current_class(), None);
    }
}

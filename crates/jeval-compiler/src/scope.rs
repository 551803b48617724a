//! Fragment scope management.
//!
//! Locals declared by a code fragment live in an arena of [`ScopeFrame`]s.
//! Each frame knows its parent by [`ScopeId`], so lookups walk outwards
//! without any frame owning another. The fragment opens the root frame;
//! blocks and `for` headers push frames beneath it. Declarations are only
//! accepted while the root is open, so a block compiled on its own still
//! rejects them.
//!
//! Locals of the suspended method are not tracked here; the resolver binds
//! them and the access resolver reaches them directly.

use jeval_core::{CompilationError, Span, Type};
use rustc_hash::FxHashMap;

// ============================================================================
// Types
// ============================================================================

/// Handle of a frame in [`FragmentScopes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

/// A local declared by the fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentLocal {
    pub name: String,
    pub ty: Type,
    /// Source location of declaration
    pub span: Span,
}

#[derive(Debug, Default)]
struct ScopeFrame {
    parent: Option<ScopeId>,
    locals: FxHashMap<String, FragmentLocal>,
}

// ============================================================================
// FragmentScopes
// ============================================================================

/// Arena of scope frames for one compile call.
#[derive(Debug, Default)]
pub struct FragmentScopes {
    frames: Vec<ScopeFrame>,
    current: Option<ScopeId>,
    /// Frame opened by the code fragment, while it is open.
    root: Option<ScopeId>,
}

impl FragmentScopes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the root frame of a code fragment.
    pub fn push_root(&mut self) -> ScopeId {
        let id = self.push_frame();
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Enter a new frame nested in the current one.
    pub fn push_frame(&mut self) -> ScopeId {
        let id = ScopeId(self.frames.len() as u32);
        self.frames.push(ScopeFrame {
            parent: self.current,
            locals: FxHashMap::default(),
        });
        self.current = Some(id);
        id
    }

    /// Leave the current frame. Its locals stop being visible.
    pub fn pop_frame(&mut self) {
        if self.current.is_some() && self.current == self.root {
            self.root = None;
        }
        self.current = self
            .current
            .and_then(|id| self.frames.get(id.0 as usize))
            .and_then(|frame| frame.parent);
    }

    /// Whether a fragment root is open, i.e. declarations are allowed.
    pub fn in_fragment(&self) -> bool {
        self.root.is_some()
    }

    /// Nesting depth of the current frame (0 when none is open).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.current;
        while let Some(id) = current {
            depth += 1;
            current = self.frames[id.0 as usize].parent;
        }
        depth
    }

    /// Declare a local in the current frame.
    ///
    /// Fails outside a fragment, or if the name is already declared in the
    /// same frame. Shadowing a local of an enclosing frame is allowed.
    pub fn declare(
        &mut self,
        name: &str,
        ty: Type,
        span: Span,
        text: &str,
    ) -> Result<(), CompilationError> {
        let Some(id) = self.current.filter(|_| self.in_fragment()) else {
            return Err(CompilationError::DeclarationOutsideFragment {
                text: text.to_string(),
                span,
            });
        };
        let frame = &mut self.frames[id.0 as usize];
        if frame.locals.contains_key(name) {
            return Err(CompilationError::VariableRedeclaration {
                name: name.to_string(),
                text: text.to_string(),
                span,
            });
        }
        frame.locals.insert(
            name.to_string(),
            FragmentLocal {
                name: name.to_string(),
                ty,
                span,
            },
        );
        Ok(())
    }

    /// Find a local visible from the current frame, innermost first.
    pub fn lookup(&self, name: &str) -> Option<&FragmentLocal> {
        let mut current = self.current;
        while let Some(id) = current {
            let frame = &self.frames[id.0 as usize];
            if let Some(local) = frame.locals.get(name) {
                return Some(local);
            }
            current = frame.parent;
        }
        None
    }
}

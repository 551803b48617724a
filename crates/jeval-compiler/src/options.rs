//! Compiler configuration.

/// Switches for the compiler's best-effort policies.
///
/// ```
/// use jeval_compiler::CompileOptions;
///
/// let strict = CompileOptions::default().with_defer_unresolved_names(false);
/// assert!(!strict.defer_unresolved_names);
/// assert!(strict.inline_captured_constants);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Replace captured locals that have a compile-time constant initializer
    /// with the constant itself instead of reading the synthetic field.
    pub inline_captured_constants: bool,
    /// Compile unresolved names to runtime lookups instead of failing.
    pub defer_unresolved_names: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            inline_captured_constants: true,
            defer_unresolved_names: true,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inline_captured_constants(mut self, enabled: bool) -> Self {
        self.inline_captured_constants = enabled;
        self
    }

    pub fn with_defer_unresolved_names(mut self, enabled: bool) -> Self {
        self.defer_unresolved_names = enabled;
        self
    }
}

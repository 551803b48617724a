//! Source positions for typed AST nodes.
//!
//! The resolver hands every node a [`Span`] so compile errors can point back
//! into the text the user typed into the evaluation dialog.

use std::fmt;

/// A span of source code, represented by its starting position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// Whether the resolver left this span unset.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The span from the start of `self` to the end of `end`.
    ///
    /// Only a single line can be measured; if `end` starts on another line
    /// or before `self`, the result is `self`.
    pub fn to(self, end: Span) -> Span {
        if end.line != self.line || end.col < self.col {
            return self;
        }
        Span {
            len: (end.col + end.len).max(self.col + self.len) - self.col,
            ..self
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_line_and_column() {
        assert_eq!(Span::new(3, 15, 5).to_string(), "3:15");
        assert_eq!(format!("{:?}", Span::new(1, 2, 0)), "1:2");
    }

    #[test]
    fn to_covers_operator_chain() {
        // `a + b` at 1:5, `b` at 1:9
        let chain = Span::new(1, 5, 1).to(Span::new(1, 9, 1));
        assert_eq!(chain, Span::new(1, 5, 5));
        assert!(!chain.is_empty());
    }

    #[test]
    fn to_other_line_keeps_start() {
        let start = Span::new(1, 5, 3);
        assert_eq!(start.to(Span::new(2, 1, 4)), start);
        assert_eq!(start.to(Span::new(1, 2, 1)), start);
    }
}

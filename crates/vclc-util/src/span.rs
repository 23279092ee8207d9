//! Source location tracking.
//!
//! This module provides [`Position`], a single point in a source file
//! (file name, 1-based line/column, 0-based byte offset), and [`Span`],
//! a half-open range between two positions. Every token and AST node in
//! the front-end carries a `Span` so later passes and diagnostics can
//! point back at the exact source text they came from.

use std::sync::Arc;

/// A single point in a source file.
///
/// `line` and `column` are 1-based (matching how editors and compilers
/// usually report locations to humans); `offset` is the 0-based byte
/// offset into the source buffer, used for slicing lexemes.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Position {
    pub file: Arc<str>,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(file: Arc<str>, line: u32, column: u32, offset: u32) -> Self {
        Self {
            file,
            line,
            column,
            offset,
        }
    }

    /// A placeholder position for synthetic nodes that have no real
    /// source location (e.g. built-in symbols).
    pub fn dummy(file: impl Into<Arc<str>>) -> Self {
        Self {
            file: file.into(),
            line: 0,
            column: 0,
            offset: 0,
        }
    }
}

/// A range of source text, from `start` (inclusive) to `end` (exclusive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width span at a single position, used for synthetic nodes.
    pub fn point(pos: Position) -> Self {
        Self {
            end: pos.clone(),
            start: pos,
        }
    }

    /// Merge two spans into one covering both, keeping `self`'s file.
    pub fn merge(&self, other: &Span) -> Span {
        let (start, end) = if self.start.offset <= other.start.offset {
            (self.start.clone(), other.end.clone())
        } else {
            (other.start.clone(), self.end.clone())
        };
        Span { start, end }
    }

    /// Byte length of the span.
    pub fn len(&self) -> u32 {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(offset: u32) -> Position {
        Position::new(Arc::from("test.vcl"), 1, offset + 1, offset)
    }

    #[test]
    fn merge_takes_outer_bounds() {
        let a = Span::new(pos(0), pos(5));
        let b = Span::new(pos(3), pos(10));
        let merged = a.merge(&b);
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 10);
    }

    #[test]
    fn point_span_is_empty() {
        let span = Span::point(pos(4));
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }
}

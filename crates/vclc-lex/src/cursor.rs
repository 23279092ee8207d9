//! Character cursor for traversing VCL source text.
//!
//! The cursor owns the byte position, line, and column counters so the
//! lexer's dispatch methods only need to deal with characters. It treats
//! `\n`, `\r\n`, and a lone `\r` as a single line separator and always
//! advances `line`/`column` as if the source had been normalized to `\n`,
//! per the input contract in the spec.

use std::sync::Arc;
use vclc_util::Position;

pub struct Cursor<'a> {
    source: &'a str,
    file: Arc<str>,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str, file: impl Into<Arc<str>>) -> Self {
        Self {
            source,
            file: file.into(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The current point as a full [`Position`].
    pub fn here(&self) -> Position {
        Position::new(self.file.clone(), self.line, self.column, self.position as u32)
    }

    /// Advance past the current character, normalizing `\r\n` and `\r`
    /// line endings to a single line-break step so line numbers agree
    /// regardless of the source file's line-ending style.
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };
        self.position += c.len_utf8();

        if c == '\r' {
            if self.current_char() == '\n' {
                self.position += 1;
            }
            self.line += 1;
            self.column = 1;
        } else if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Slice of the source from `start` byte offset up to (not including)
    /// the cursor's current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut cursor = Cursor::new("ab\ncd", "t.vcl");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line, 1);
        assert_eq!(cursor.column, 3);
        cursor.advance(); // consumes '\n'
        assert_eq!(cursor.line, 2);
        assert_eq!(cursor.column, 1);
    }

    #[test]
    fn crlf_counts_as_one_line_break() {
        let mut cursor = Cursor::new("a\r\nb", "t.vcl");
        cursor.advance(); // 'a'
        cursor.advance(); // '\r\n' together
        assert_eq!(cursor.line, 2);
        assert_eq!(cursor.column, 1);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn lone_cr_counts_as_line_break() {
        let mut cursor = Cursor::new("a\rb", "t.vcl");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line, 2);
        assert_eq!(cursor.current_char(), 'b');
    }
}

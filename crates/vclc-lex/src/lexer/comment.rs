//! Comment lexing.
//!
//! Unlike a typical compiler lexer, comments are not discarded here: VCL
//! tooling (formatters, doc generators) wants them back, so each comment
//! form produces a `Comment` token carrying its exact source text
//! (delimiters included) and the parser is responsible for skipping
//! them wherever they're insignificant.

use vclc_util::Position;

use super::core::Lexer;
use crate::error::{LexError, LexErrorReason};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// `# ...` line comment, VCL's shell-style alternative to `//`.
    pub(crate) fn lex_hash_comment(&mut self, start_pos: Position) -> Result<Token, LexError> {
        self.lex_line_comment(start_pos)
    }

    /// `// ...` or `# ...` line comment, terminated by the next newline
    /// or end of input. The cursor is already positioned at the start of
    /// the comment (on `/` or `#`) when this is called.
    pub(crate) fn lex_line_comment(&mut self, start_pos: Position) -> Result<Token, LexError> {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        Ok(self.finish(TokenKind::Comment, start_pos))
    }

    /// `/* ... */` block comment. VCL block comments do not nest: the
    /// first `*/` closes the comment regardless of any `/*` seen inside.
    pub(crate) fn lex_block_comment(&mut self, start_pos: Position) -> Result<Token, LexError> {
        self.cursor.advance(); // the '*' after the '/' that lex_slash already consumed

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::new(
                    LexErrorReason::UnterminatedComment,
                    "unterminated block comment",
                    start_pos,
                ));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(self.finish(TokenKind::Comment, start_pos));
            }
            self.cursor.advance();
        }
    }
}

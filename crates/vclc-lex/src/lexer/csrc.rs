//! Embedded native-code block lexing (`C{ ... }C`).
//!
//! VCL lets a `.vcl` file drop into raw C source for advanced use. The
//! lexer treats the whole block as one opaque token: it never tries to
//! tokenize the C code inside, it just finds the matching `}C` delimiter
//! and hands the verbatim text upstream. Nothing downstream of the
//! lexer ever executes this text.

use vclc_util::Position;

use super::core::Lexer;
use crate::error::{LexError, LexErrorReason};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Called with the cursor on the leading `C` of `C{`, already
    /// confirmed by the caller to be followed by `{`.
    pub(crate) fn lex_csrc(&mut self, start_pos: Position) -> Result<Token, LexError> {
        self.cursor.advance(); // 'C'
        self.cursor.advance(); // '{'

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::new(
                    LexErrorReason::UnterminatedCSrc,
                    "unterminated C{ ... }C block",
                    start_pos,
                ));
            }
            if self.cursor.current_char() == '}' && self.cursor.peek_char(1) == 'C' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(self.finish(TokenKind::CSrc, start_pos));
            }
            self.cursor.advance();
        }
    }
}

//! Numeric literal lexing.
//!
//! VCL numbers are always decimal; there is no hex/octal/binary syntax.
//! A literal is an integer (`CNum`) unless it contains a `.` or an
//! exponent, in which case it is a float (`FNum`). Unit-suffixed
//! duration/byte literals (`5s`, `10KB`) are not handled here - the
//! lexer only ever produces a bare numeric token, and the parser merges
//! it with a following unit identifier when there is no whitespace
//! between them.

use vclc_util::Position;

use super::core::Lexer;
use crate::error::{LexError, LexErrorReason};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self, start_pos: Position) -> Result<Token, LexError> {
        let mut is_float = false;

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            if self.cursor.current_char().is_ascii_digit() {
                is_float = true;
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            } else {
                return Err(LexError::new(
                    LexErrorReason::BadNumber,
                    "malformed exponent: expected at least one digit after 'e'",
                    start_pos,
                ));
            }
        }

        let kind = if is_float {
            TokenKind::FNum
        } else {
            TokenKind::CNum
        };
        Ok(self.finish(kind, start_pos))
    }
}

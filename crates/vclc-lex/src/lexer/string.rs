//! Quoted-string literal lexing.

use vclc_util::Position;

use super::core::Lexer;
use crate::error::{LexError, LexErrorReason};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lex a `"..."` string. Recognizes the escapes `\\`, `\"`, `\n`,
    /// `\t`, `\r`; any other backslash sequence is kept verbatim (the
    /// value carries the raw source text, escapes and all - unescaping
    /// is a concern for whoever consumes the literal, not the lexer).
    ///
    /// A string is unterminated if the closing quote is not found before
    /// a newline or end of input, matching VCL's single-line string
    /// literal rule.
    pub(crate) fn lex_string(&mut self, start_pos: Position) -> Result<Token, LexError> {
        self.cursor.advance(); // opening quote

        loop {
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return Ok(self.finish(TokenKind::CStr, start_pos));
                }
                '\0' if self.cursor.is_at_end() => {
                    return Err(LexError::new(
                        LexErrorReason::UnterminatedString,
                        "unterminated string literal",
                        start_pos,
                    ));
                }
                '\n' => {
                    return Err(LexError::new(
                        LexErrorReason::UnterminatedString,
                        "unterminated string literal (newline before closing quote)",
                        start_pos,
                    ));
                }
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                _ => self.cursor.advance(),
            }
        }
    }
}

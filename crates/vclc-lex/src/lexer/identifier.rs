//! Identifier and keyword lexing.

use vclc_util::Position;

use super::core::{is_ident_continue, Lexer};
use crate::error::LexError;
use crate::token::{keyword_kind, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lex an identifier or keyword starting at the cursor's current
    /// position, which has already been confirmed to be an identifier
    /// start character.
    ///
    /// VCL identifiers allow interior hyphens (`req.http.X-Forwarded-For`
    /// is written unquoted as a header name in some contexts), so the
    /// continuation set includes `-` in addition to alphanumerics and
    /// `_`. This is broader than the general-purpose identifier grammar
    /// of most C-family languages, but matches what real VCL files do.
    pub(crate) fn lex_identifier(&mut self, start_pos: Position) -> Result<Token, LexError> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_kind(text).unwrap_or(TokenKind::Id);
        Ok(self.finish(kind, start_pos))
    }
}

//! Core lexer dispatch: the `Lexer` struct and its `next_token` entry point.

use vclc_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorReason};
use crate::token::{Token, TokenKind};

/// Tokenizes VCL source text on demand.
///
/// A `Lexer` is cheap to construct and holds no allocations beyond its
/// cursor; tokens are produced one at a time via [`Lexer::next_token`] or
/// by using the lexer as an `Iterator`.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) token_start: usize,
    emitted_eof: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, filename: impl Into<std::sync::Arc<str>>) -> Self {
        Self {
            cursor: Cursor::new(source, filename),
            token_start: 0,
            emitted_eof: false,
        }
    }

    /// Produce the next token, or a [`LexError`] if the source at the
    /// current position does not form a valid token.
    ///
    /// On error the cursor has already been advanced past the offending
    /// character(s), so calling this again continues tokenizing the rest
    /// of the input rather than looping forever.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        let start_pos = self.cursor.here();

        if self.cursor.is_at_end() {
            return Ok(self.finish(TokenKind::Eof, start_pos));
        }

        match self.cursor.current_char() {
            '{' => self.single(TokenKind::LBrace, start_pos),
            '}' => self.single(TokenKind::RBrace, start_pos),
            '(' => self.single(TokenKind::LParen, start_pos),
            ')' => self.single(TokenKind::RParen, start_pos),
            '[' => self.single(TokenKind::LBracket, start_pos),
            ']' => self.single(TokenKind::RBracket, start_pos),
            ';' => self.single(TokenKind::Semicolon, start_pos),
            ',' => self.single(TokenKind::Comma, start_pos),
            '.' => self.single(TokenKind::Dot, start_pos),
            ':' => self.single(TokenKind::Colon, start_pos),

            '=' => self.lex_eq(start_pos),
            '!' => self.lex_bang(start_pos),
            '<' => self.lex_lt(start_pos),
            '>' => self.lex_gt(start_pos),
            '&' => self.lex_amp(start_pos),
            '|' => self.lex_pipe(start_pos),
            '+' => self.lex_plus(start_pos),
            '-' => self.lex_minus(start_pos),
            '*' => self.lex_star(start_pos),
            '/' => self.lex_slash(start_pos),
            '%' => self.single(TokenKind::Percent, start_pos),
            '~' => self.single(TokenKind::Match, start_pos),

            '"' => self.lex_string(start_pos),
            '#' => self.lex_hash_comment(start_pos),

            'C' if self.cursor.peek_char(1) == '{' => self.lex_csrc(start_pos),

            c if c.is_ascii_digit() => self.lex_number(start_pos),
            c if is_ident_start(c) => self.lex_identifier(start_pos),

            c => {
                self.cursor.advance();
                Err(LexError::new(
                    LexErrorReason::UnknownCharacter,
                    format!("unexpected character '{}'", c),
                    start_pos,
                ))
            }
        }
    }

    fn single(&mut self, kind: TokenKind, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        Ok(self.finish(kind, start_pos))
    }

    /// Build the token for the lexeme between `token_start` and the
    /// cursor's current position.
    pub(crate) fn finish(&self, kind: TokenKind, start_pos: vclc_util::Position) -> Token {
        let text = self.cursor.slice_from(self.token_start);
        Token::new(kind, text, Span::new(start_pos, self.cursor.here()))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\n' | '\r') {
            self.cursor.advance();
        }
    }

    fn lex_eq(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::Eq
        } else {
            TokenKind::Assign
        };
        Ok(self.finish(kind, start_pos))
    }

    fn lex_bang(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::NotEq
        } else if self.cursor.match_char('~') {
            TokenKind::NoMatch
        } else {
            TokenKind::Not
        };
        Ok(self.finish(kind, start_pos))
    }

    fn lex_lt(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::LtEq
        } else if self.cursor.match_char('<') {
            TokenKind::Shl
        } else {
            TokenKind::Lt
        };
        Ok(self.finish(kind, start_pos))
    }

    fn lex_gt(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::GtEq
        } else if self.cursor.match_char('>') {
            TokenKind::Shr
        } else {
            TokenKind::Gt
        };
        Ok(self.finish(kind, start_pos))
    }

    fn lex_amp(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            Ok(self.finish(TokenKind::AndAnd, start_pos))
        } else {
            self.cursor.advance();
            Err(LexError::new(
                LexErrorReason::UnknownCharacter,
                "unexpected character '&' (expected '&&')".to_string(),
                start_pos,
            ))
        }
    }

    fn lex_pipe(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            Ok(self.finish(TokenKind::OrOr, start_pos))
        } else {
            self.cursor.advance();
            Err(LexError::new(
                LexErrorReason::UnknownCharacter,
                "unexpected character '|' (expected '||')".to_string(),
                start_pos,
            ))
        }
    }

    fn lex_plus(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('+') {
            TokenKind::Incr
        } else if self.cursor.match_char('=') {
            TokenKind::PlusEq
        } else {
            TokenKind::Plus
        };
        Ok(self.finish(kind, start_pos))
    }

    fn lex_minus(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('-') {
            TokenKind::Decr
        } else if self.cursor.match_char('=') {
            TokenKind::MinusEq
        } else {
            TokenKind::Minus
        };
        Ok(self.finish(kind, start_pos))
    }

    fn lex_star(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::StarEq
        } else {
            TokenKind::Star
        };
        Ok(self.finish(kind, start_pos))
    }

    fn lex_slash(&mut self, start_pos: vclc_util::Position) -> Result<Token, LexError> {
        self.cursor.advance();
        match self.cursor.current_char() {
            '/' => self.lex_line_comment(start_pos),
            '*' => self.lex_block_comment(start_pos),
            '=' => {
                self.cursor.advance();
                Ok(self.finish(TokenKind::SlashEq, start_pos))
            }
            _ => Ok(self.finish(TokenKind::Slash, start_pos)),
        }
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    /// Yields every token up to and including a single trailing `Eof`,
    /// then stops. Lex errors are yielded in place and do not end the
    /// stream - the cursor has already moved past the bad input, so
    /// pulling again continues tokenizing the rest of the source.
    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted_eof {
            return None;
        }
        match self.next_token() {
            Ok(tok) => {
                if tok.kind == TokenKind::Eof {
                    self.emitted_eof = true;
                }
                Some(Ok(tok))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

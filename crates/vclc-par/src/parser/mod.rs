//! Recursive-descent parser.
//!
//! The grammar is split by what it builds, the same way the lexer's
//! modules are split by token family: [`declarations`] covers the
//! top-level forms (`vcl`, `backend`, `probe`, `acl`, `sub`, `import`,
//! `include`), [`statements`] covers everything inside a subroutine
//! body, and [`expressions`] is the precedence-climbing expression
//! grammar plus the duration/bytes literal merge. This module only
//! holds the token-stream plumbing they all share.

mod declarations;
mod expressions;
mod statements;

use vclc_lex::{Lexer, Token, TokenKind};
use vclc_util::{Position, Span};

use crate::error::{ParseError, ParseErrorReason};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Lex `source` in full, dropping comment tokens, and return a
    /// parser positioned at the start of the filtered stream.
    ///
    /// The first lex error encountered - if any - is surfaced here,
    /// matching the contract that lex errors appear "when the parser
    /// pulls the next token".
    pub fn new(source: &str, filename: &str) -> Result<Self, ParseError> {
        let mut tokens = Vec::new();
        for result in Lexer::new(source, filename.to_string()) {
            let token = result?;
            if token.kind != TokenKind::Comment {
                tokens.push(token);
            }
        }
        Ok(Self { tokens, pos: 0 })
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// The lookahead token after the current one, for the lexer's
    /// no-intervening-whitespace literal merge (a unit identifier must
    /// start exactly where the numeric literal ended).
    pub(crate) fn peek_next(&self) -> &Token {
        let idx = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos.min(self.tokens.len() - 1)].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(what))
        }
    }

    pub(crate) fn unexpected(&self, what: &str) -> ParseError {
        let tok = self.peek();
        if tok.kind == TokenKind::Eof {
            ParseError::new(
                ParseErrorReason::UnexpectedEof,
                format!("expected {what}, found end of input"),
                tok.span.start,
            )
        } else {
            ParseError::new(
                ParseErrorReason::UnexpectedToken,
                format!("expected {what}, found {:?} {:?}", tok.kind, tok.value),
                tok.span.start,
            )
        }
    }

    pub(crate) fn error_at(
        &self,
        reason: ParseErrorReason,
        message: impl Into<String>,
        span: Span,
    ) -> ParseError {
        ParseError::new(reason, message, span.start)
    }

    pub(crate) fn span_from(&self, start: Position) -> Span {
        // the token just consumed is at pos-1 (or pos if nothing advanced yet)
        let end_tok = &self.tokens[self.pos.saturating_sub(1).min(self.tokens.len() - 1)];
        Span::new(start, end_tok.span.end.clone())
    }
}

/// Parse a complete VCL source file into a [`crate::ast::Program`].
pub fn parse(source: &str, filename: &str) -> Result<crate::ast::Program, ParseError> {
    let mut parser = Parser::new(source, filename)?;
    parser.parse_program()
}

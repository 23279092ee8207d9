//! Lexical error types.

use thiserror::Error;
use vclc_util::Position;

/// The specific reason a [`LexError`] was raised, per §7 of the design.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexErrorReason {
    UnterminatedString,
    UnterminatedComment,
    UnterminatedCSrc,
    UnknownCharacter,
    BadNumber,
}

impl LexErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexErrorReason::UnterminatedString => "unterminated-string",
            LexErrorReason::UnterminatedComment => "unterminated-comment",
            LexErrorReason::UnterminatedCSrc => "unterminated-csrc",
            LexErrorReason::UnknownCharacter => "unknown-character",
            LexErrorReason::BadNumber => "bad-number",
        }
    }
}

/// An error produced while tokenizing VCL source.
///
/// Carries the position where the offending token *started*, matching
/// the "still advances past the offending character" recovery policy:
/// the lexer does not get stuck, it just reports and moves on.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}: {message} at {}:{}:{}", position.file, position.line, position.column)]
pub struct LexError {
    pub message: String,
    pub position: Position,
    pub reason: &'static str,
}

impl LexError {
    pub fn new(reason: LexErrorReason, message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
            reason: reason.as_str(),
        }
    }

    pub fn kind(&self) -> vclc_util::ErrorKind {
        vclc_util::ErrorKind::Lex
    }
}

//! Parse error types.

use thiserror::Error;
use vclc_util::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorReason {
    UnexpectedToken,
    UnexpectedEof,
    UnsupportedVclVersion,
    UnknownUnit,
    ExpectedExpression,
    ExpectedStatement,
}

impl ParseErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorReason::UnexpectedToken => "unexpected-token",
            ParseErrorReason::UnexpectedEof => "unexpected-eof",
            ParseErrorReason::UnsupportedVclVersion => "unsupported-vcl-version",
            ParseErrorReason::UnknownUnit => "unknown-unit",
            ParseErrorReason::ExpectedExpression => "expected-expression",
            ParseErrorReason::ExpectedStatement => "expected-statement",
        }
    }
}

/// A parse error. The parser stops at the first one - there is no error
/// recovery, so a caller only ever sees one of these per `parse` call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}: {message} at {}:{}:{}", position.file, position.line, position.column)]
pub struct ParseError {
    pub message: String,
    pub position: Position,
    pub reason: &'static str,
}

impl ParseError {
    pub fn new(reason: ParseErrorReason, message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
            reason: reason.as_str(),
        }
    }

    pub fn kind(&self) -> vclc_util::ErrorKind {
        vclc_util::ErrorKind::Parse
    }
}

impl From<vclc_lex::LexError> for ParseError {
    fn from(err: vclc_lex::LexError) -> Self {
        ParseError {
            message: err.message,
            position: err.position,
            reason: err.reason,
        }
    }
}

//! Token kinds and the `Token` struct itself.

use vclc_util::Span;

/// The category of a [`Token`].
///
/// Keywords are their own variants rather than `Ident` + a lookup, so the
/// parser can match on them directly. Named return actions (`hash`,
/// `pass`, ...) are lexed as plain identifiers and recognized contextually
/// by the parser's `return` handling, since they are only reserved inside
/// a `return (...)` argument and are otherwise valid subroutine-local
/// names in real VCL. This is a pinned design decision, not an oversight -
/// see `SPEC_FULL.md`'s "named return-action words are contextual, not
/// lexer keywords" resolution for the rationale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Vcl,
    Backend,
    Sub,
    Probe,
    Acl,
    Import,
    Include,
    From,
    New,
    If,
    Else,
    Set,
    Unset,
    Call,
    Return,

    // Identifiers
    Id,

    // Literals
    CNum,
    FNum,
    CStr,
    CSrc,
    Comment,

    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Colon,

    // Operators
    Assign,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    Not,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    Incr,
    Decr,
    Shl,
    Shr,
    Match,
    NoMatch,

    Eof,
}

impl TokenKind {
    /// True for the keywords that name a `return (...)` action
    /// (`hash`, `pass`, `pipe`, ...). These are lexed as `Id`; this table
    /// is consulted by the parser when it needs to recognize one.
    pub fn is_return_action_word(word: &str) -> bool {
        matches!(
            word,
            "hash"
                | "pass"
                | "pipe"
                | "lookup"
                | "deliver"
                | "fetch"
                | "restart"
                | "synth"
                | "purge"
                | "abandon"
                | "retry"
                | "error"
                | "ok"
                | "fail"
        )
    }
}

/// A single lexical token.
///
/// `value` always holds the raw lexeme exactly as it appeared in the
/// source: quotes are kept around string literals, and the `C{`/`}C`
/// delimiters are kept around embedded code blocks. This keeps the lexer
/// lossless - a consumer can reconstruct the original text from the
/// token stream's spans and values alone.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }
}

/// Look up a keyword token kind for an identifier-shaped lexeme.
///
/// Returns `None` for anything that is not one of VCL's reserved words,
/// in which case the caller should emit `TokenKind::Id` instead.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    Some(match word {
        "vcl" => TokenKind::Vcl,
        "backend" => TokenKind::Backend,
        "sub" => TokenKind::Sub,
        "probe" => TokenKind::Probe,
        "acl" => TokenKind::Acl,
        "import" => TokenKind::Import,
        "include" => TokenKind::Include,
        "from" => TokenKind::From,
        "new" => TokenKind::New,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "set" => TokenKind::Set,
        "unset" => TokenKind::Unset,
        "call" => TokenKind::Call,
        "return" => TokenKind::Return,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_kind_recognizes_vcl_keywords() {
        assert_eq!(keyword_kind("sub"), Some(TokenKind::Sub));
        assert_eq!(keyword_kind("vcl_recv"), None);
    }

    #[test]
    fn return_action_words_are_not_keywords() {
        assert_eq!(keyword_kind("hash"), None);
        assert!(TokenKind::is_return_action_word("hash"));
        assert!(!TokenKind::is_return_action_word("vcl_recv"));
    }
}

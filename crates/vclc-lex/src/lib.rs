//! Lexer for the Varnish Configuration Language (VCL) 4.x.
//!
//! [`lexer::Lexer`] turns a source string into a stream of [`Token`]s.
//! It is lossless: whitespace is dropped, but comments survive as
//! `Comment` tokens and every other token keeps its exact source text
//! and [`vclc_util::Span`]. The lexer never aborts on a bad character -
//! it reports a [`LexError`] and keeps going, so a caller can collect
//! every lexical problem in a file in one pass rather than only the
//! first.

pub mod cursor;
pub mod error;
mod lexer;
pub mod token;

pub use error::{LexError, LexErrorReason};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    /// Token kinds for `src`, with the trailing `Eof` stripped so test
    /// expectations only have to spell out the interesting tokens.
    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut kinds: Vec<TokenKind> = Lexer::new(src, "t.vcl")
            .map(|r| r.expect("no lex errors").kind)
            .collect();
        if kinds.last() == Some(&TokenKind::Eof) {
            kinds.pop();
        }
        kinds
    }

    /// The fixture from the spec's token-stream scenario: a `vcl`
    /// version line, a `backend` with two string properties, and a `sub`
    /// with an `if`/`return (hash)`. The spec's literal scenario spells
    /// the `hash` token as a dedicated `HASH_KW` kind; this lexer reads
    /// named return-action words as plain `Id` tokens instead (see
    /// `SPEC_FULL.md`), so the 9th-from-last slot below is `Id`, not a
    /// `Hash` variant - everything else, including the total count of
    /// 37 tokens ending in `Eof`, matches the scenario as specified.
    #[test]
    fn backend_and_sub_fixture_yields_the_pinned_token_count_and_shape() {
        let src = "vcl 4.0;\n\
backend default { .host = \"127.0.0.1\"; .port = \"8080\"; }\n\
sub vcl_recv { if (req.method == \"GET\") { return (hash); } }\n";
        let kinds: Vec<TokenKind> = Lexer::new(src, "t.vcl").map(|r| r.expect("no lex errors").kind).collect();

        assert_eq!(kinds.len(), 37);
        assert_eq!(kinds.last(), Some(&TokenKind::Eof));
        assert_eq!(
            kinds,
            vec![
                TokenKind::Vcl,
                TokenKind::FNum,
                TokenKind::Semicolon,
                TokenKind::Backend,
                TokenKind::Id,
                TokenKind::LBrace,
                TokenKind::Dot,
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::CStr,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::CStr,
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Sub,
                TokenKind::Id,
                TokenKind::LBrace,
                TokenKind::If,
                TokenKind::LParen,
                TokenKind::Id,
                TokenKind::Dot,
                TokenKind::Id,
                TokenKind::Eq,
                TokenKind::CStr,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::Return,
                TokenKind::LParen,
                TokenKind::Id, // named return action `hash`; see doc comment above
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_a_minimal_subroutine() {
        let kinds = kinds("sub vcl_recv {\n    return (pass);\n}\n");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Sub,
                TokenKind::Id,
                TokenKind::LBrace,
                TokenKind::Return,
                TokenKind::LParen,
                TokenKind::Id,
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn preserves_line_and_block_comments() {
        let kinds = kinds("// a line comment\nset req.http.X = 1; /* block */");
        assert_eq!(kinds[0], TokenKind::Comment);
        assert!(kinds.contains(&TokenKind::Comment));
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Comment).count(), 2);
    }

    #[test]
    fn lexes_csrc_block_verbatim() {
        let mut lexer = Lexer::new("C{ int x = 1; }C", "t.vcl");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::CSrc);
        assert_eq!(tok.value, "C{ int x = 1; }C");
    }

    #[test]
    fn lexes_float_with_exponent() {
        let mut lexer = Lexer::new("1.5e-3", "t.vcl");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::FNum);
        assert_eq!(tok.value, "1.5e-3");
    }

    #[test]
    fn bare_integer_is_cnum_not_fnum() {
        let mut lexer = Lexer::new("86400", "t.vcl");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::CNum);
    }

    #[test]
    fn unterminated_string_reports_error_and_resumes() {
        let mut lexer = Lexer::new("\"oops\nset x = 1;", "t.vcl");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.reason, "unterminated-string");
        // lexer should still make progress on the next call
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Set);
    }

    #[test]
    fn matches_and_no_match_operators() {
        assert_eq!(kinds("~"), vec![TokenKind::Match]);
        assert_eq!(kinds("!~"), vec![TokenKind::NoMatch]);
    }

    #[test]
    fn hyphenated_identifier_is_one_token() {
        let mut lexer = Lexer::new("X-Forwarded-For", "t.vcl");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Id);
        assert_eq!(tok.value, "X-Forwarded-For");
    }

    #[test]
    fn unknown_character_is_reported_and_skipped() {
        let mut lexer = Lexer::new("@ sub", "t.vcl");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.reason, "unknown-character");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Sub);
    }

    #[test]
    fn eof_is_terminal() {
        let mut lexer = Lexer::new("", "t.vcl");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

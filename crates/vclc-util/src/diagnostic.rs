//! Shared diagnostic rendering.
//!
//! The lexer and parser each keep their own typed error enums (see
//! `vclc-lex::LexError` and `vclc-par::ParseError`), since the exact set of
//! reasons differs per phase. What they share is how a position turns into
//! something a human can read: the offending source line with a caret under
//! the column. [`render_snippet`] is that shared piece, grounded on the same
//! "line + caret" presentation compilers have used forever.

use crate::span::Position;

/// The coarse category a diagnostic belongs to, independent of the exact
/// reason. Mirrors the three phases of the pipeline: lexing, parsing, and
/// (for later passes this crate does not implement) semantic analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Semantic,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Lex => "lex",
            ErrorKind::Parse => "parse",
            ErrorKind::Semantic => "semantic",
        };
        f.write_str(s)
    }
}

/// Render a one-line-plus-caret snippet for `position` within `source`.
///
/// Returns `None` if the position's line number falls outside `source`
/// (e.g. a dummy position on a built-in symbol).
pub fn render_snippet(source: &str, position: &Position) -> Option<String> {
    let line_content = source.lines().nth(position.line.checked_sub(1)? as usize)?;
    let caret_col = position.column.saturating_sub(1) as usize;

    let mut out = String::new();
    out.push_str(&format!(
        "--> {}:{}:{}\n",
        position.file, position.line, position.column
    ));
    out.push_str(&format!("  | {}\n", line_content));
    out.push_str("  | ");
    for _ in 0..caret_col {
        out.push(' ');
    }
    out.push('^');
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn renders_caret_under_column() {
        let source = "sub vcl_recv {\n  set req.url = 1;\n}\n";
        let pos = Position::new(Arc::from("t.vcl"), 2, 7, 17);
        let rendered = render_snippet(source, &pos).unwrap();
        assert!(rendered.contains("set req.url"));
        assert!(rendered.contains("t.vcl:2:7"));
    }

    #[test]
    fn out_of_range_line_returns_none() {
        let pos = Position::new(Arc::from("t.vcl"), 99, 1, 0);
        assert!(render_snippet("short\n", &pos).is_none());
    }
}

//! Parser and AST for the Varnish Configuration Language (VCL) 4.x.
//!
//! [`parse`] turns a source string into a [`ast::Program`]: recursive
//! descent, one token of lookahead, no error recovery - the first
//! problem found aborts the parse and comes back as a [`ParseError`].
//! The resulting tree is walked with the double-dispatch [`visitor`]
//! API; [`json`] is one concrete visitor that renders it as a generic
//! tree value for an external encoder to turn into text.

pub mod ast;
pub mod duration;
pub mod error;
pub mod json;
mod parser;
pub mod pretty;
pub mod visitor;

pub use error::{ParseError, ParseErrorReason};
pub use parser::parse;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    #[test]
    fn minimal_vcl_version_only() {
        let program = parse("vcl 4.0;\n", "t.vcl").unwrap();
        assert_eq!(program.vcl_version.unwrap().version, "4.0");
        assert!(program.declarations.is_empty());
    }

    #[test]
    fn unsupported_vcl_version_is_a_parse_error() {
        let err = parse("vcl 4.2;\n", "t.vcl").unwrap_err();
        assert_eq!(err.reason, "unsupported-vcl-version");
    }

    #[test]
    fn parses_backend_and_sub_from_the_fixture() {
        let src = r#"
vcl 4.0;
backend default { .host = "127.0.0.1"; .port = "8080"; }
sub vcl_recv { if (req.method == "GET") { return (hash); } }
"#;
        let program = parse(src, "t.vcl").unwrap();
        assert_eq!(program.declarations.len(), 2);

        let Declaration::Backend(backend) = &program.declarations[0] else {
            panic!("expected a backend declaration");
        };
        assert_eq!(backend.name, "default");
        assert_eq!(backend.properties.len(), 2);
        assert_eq!(backend.properties[0].name, "host");

        let Declaration::Sub(sub) = &program.declarations[1] else {
            panic!("expected a sub declaration");
        };
        assert_eq!(sub.name, "vcl_recv");
        assert_eq!(sub.body.statements.len(), 1);
    }

    #[test]
    fn backend_probe_property_may_be_inline() {
        let src = r#"
backend default {
    .host = "127.0.0.1";
    .probe = {
        .url = "/health";
        .interval = 5s;
    }
}
"#;
        let program = parse(src, "t.vcl").unwrap();
        let Declaration::Backend(backend) = &program.declarations[0] else {
            panic!("expected a backend declaration");
        };
        let probe_prop = backend.properties.iter().find(|p| p.name == "probe").unwrap();
        match &probe_prop.value {
            PropertyValue::InlineProbe(props) => assert_eq!(props.len(), 2),
            PropertyValue::Expr(_) => panic!("expected an inline probe block"),
        }
    }

    #[test]
    fn acl_entries_support_negation_and_mask() {
        let src = r#"acl internal { "192.168.0.0"/16; !"10.0.0.1"; }"#;
        let program = parse(src, "t.vcl").unwrap();
        let Declaration::Acl(acl) = &program.declarations[0] else {
            panic!("expected an acl declaration");
        };
        assert_eq!(acl.entries.len(), 2);
        assert_eq!(acl.entries[0].host, "192.168.0.0");
        assert_eq!(acl.entries[0].mask, Some(16));
        assert!(!acl.entries[0].negated);
        assert_eq!(acl.entries[1].host, "10.0.0.1");
        assert!(acl.entries[1].negated);
    }

    #[test]
    fn string_bearing_declaration_fields_are_unquoted_and_unescaped() {
        let src = "import std from \"std\\nvmod\";\ninclude \"cfg/backends.vcl\";\n";
        let program = parse(src, "t.vcl").unwrap();

        let Declaration::Import(import) = &program.declarations[0] else {
            panic!("expected an import declaration");
        };
        assert_eq!(import.from.as_deref(), Some("std\nvmod"));

        let Declaration::Include(include) = &program.declarations[1] else {
            panic!("expected an include declaration");
        };
        assert_eq!(include.path, "cfg/backends.vcl");
    }

    #[test]
    fn duration_and_bytes_literals_merge_in_the_parser() {
        let src = "sub vcl_recv { set req.grace = 5s; set req.max = 10kb; }";
        let program = parse(src, "t.vcl").unwrap();
        let Declaration::Sub(sub) = &program.declarations[0] else {
            panic!("expected sub");
        };
        let Statement::Set(first) = &sub.body.statements[0] else {
            panic!("expected set");
        };
        assert!(matches!(first.value, Expression::DurationLiteral(ref d) if d.seconds == 5.0));
        let Statement::Set(second) = &sub.body.statements[1] else {
            panic!("expected set");
        };
        assert!(matches!(second.value, Expression::BytesLiteral(ref b) if b.bytes == 10 * 1024));
    }

    #[test]
    fn unknown_unit_on_numeric_literal_is_a_parse_error() {
        let src = "sub vcl_recv { set req.x = 5zz; }";
        let err = parse(src, "t.vcl").unwrap_err();
        assert_eq!(err.reason, "unknown-unit");
    }

    #[test]
    fn else_if_chains_nest_as_if_statements() {
        let src = r#"sub vcl_recv {
            if (req.method == "GET") {
                return (hash);
            } else if (req.method == "POST") {
                return (pass);
            } else {
                return (pipe);
            }
        }"#;
        let program = parse(src, "t.vcl").unwrap();
        let Declaration::Sub(sub) = &program.declarations[0] else {
            panic!("expected sub");
        };
        let Statement::If(outer) = &sub.body.statements[0] else {
            panic!("expected if");
        };
        match outer.else_branch.as_deref() {
            Some(Statement::If(_)) => {}
            other => panic!("expected nested if in else branch, got {other:?}"),
        }
    }

    #[test]
    fn embedded_csrc_block_is_preserved_verbatim_as_an_expression_statement() {
        // CSrc tokens aren't wired into the expression grammar (VCL never
        // evaluates them), but the lexer/parser boundary is still expected
        // to hand the raw block back losslessly to whatever reads tokens
        // directly; parsing it as a statement is out of scope here.
        let src = "C{\n    #include <stdio.h>\n}C";
        let mut lexer = vclc_lex::Lexer::new(src, "t.vcl");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, vclc_lex::TokenKind::CSrc);
        assert_eq!(tok.value, src);
    }

    #[test]
    fn precedence_climbs_arithmetic_over_comparison() {
        let src = "sub vcl_recv { if (1 + 2 * 3 == 7) { return (hash); } }";
        let program = parse(src, "t.vcl").unwrap();
        let Declaration::Sub(sub) = &program.declarations[0] else {
            panic!("expected sub");
        };
        let Statement::If(if_stmt) = &sub.body.statements[0] else {
            panic!("expected if");
        };
        let Expression::Binary(cmp) = &if_stmt.condition else {
            panic!("expected top-level comparison");
        };
        assert_eq!(cmp.op, BinOp::Eq);
        assert!(matches!(*cmp.left, Expression::Binary(ref b) if b.op == BinOp::Add));
    }
}

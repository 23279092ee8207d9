//! Top-level declaration grammar: `vcl`, `import`, `include`, `backend`,
//! `probe`, `acl`, `sub`.

use vclc_lex::TokenKind;

use crate::ast::*;
use crate::error::{ParseError, ParseErrorReason};

use super::expressions::unescape;
use super::Parser;

impl Parser {
    pub(crate) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let start = self.peek().span.start.clone();

        let vcl_version = if self.check(TokenKind::Vcl) {
            Some(self.parse_vcl_version()?)
        } else {
            None
        };

        let mut declarations = Vec::new();
        while !self.check(TokenKind::Eof) {
            declarations.push(self.parse_declaration()?);
        }

        let span = self.span_from(start);
        Ok(Program {
            vcl_version,
            declarations,
            span,
        })
    }

    fn parse_vcl_version(&mut self) -> Result<VclVersionDecl, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Vcl, "'vcl'")?;
        let version_tok = self.expect(TokenKind::FNum, "a VCL version number")?;
        self.expect(TokenKind::Semicolon, "';'")?;

        if version_tok.value != "4.0" && version_tok.value != "4.1" {
            return Err(ParseError::new(
                ParseErrorReason::UnsupportedVclVersion,
                format!("unsupported VCL version {:?}; expected 4.0 or 4.1", version_tok.value),
                version_tok.span.start,
            ));
        }

        Ok(VclVersionDecl {
            version: version_tok.value,
            span: self.span_from(start),
        })
    }

    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        match self.peek_kind() {
            TokenKind::Import => self.parse_import().map(Declaration::Import),
            TokenKind::Include => self.parse_include().map(Declaration::Include),
            TokenKind::Backend => self.parse_backend().map(Declaration::Backend),
            TokenKind::Probe => self.parse_probe().map(Declaration::Probe),
            TokenKind::Acl => self.parse_acl().map(Declaration::Acl),
            TokenKind::Sub => self.parse_sub().map(Declaration::Sub),
            _ => Err(self.unexpected("a declaration ('import', 'include', 'backend', 'probe', 'acl', or 'sub')")),
        }
    }

    fn parse_import(&mut self) -> Result<ImportDecl, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Import, "'import'")?;
        let module = self.expect(TokenKind::Id, "a module name")?.value;
        let from = if self.check(TokenKind::From) {
            self.advance();
            Some(unescape(&self.expect(TokenKind::CStr, "a string")?.value))
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(ImportDecl {
            module,
            from,
            span: self.span_from(start),
        })
    }

    fn parse_include(&mut self) -> Result<IncludeDecl, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Include, "'include'")?;
        let path = unescape(&self.expect(TokenKind::CStr, "a string")?.value);
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(IncludeDecl {
            path,
            span: self.span_from(start),
        })
    }

    fn parse_backend(&mut self) -> Result<BackendDecl, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Backend, "'backend'")?;
        let name = self.expect(TokenKind::Id, "a backend name")?.value;
        self.expect(TokenKind::LBrace, "'{'")?;
        let properties = self.parse_properties()?;
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(BackendDecl {
            name,
            properties,
            span: self.span_from(start),
        })
    }

    fn parse_probe(&mut self) -> Result<ProbeDecl, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Probe, "'probe'")?;
        let name = self.expect(TokenKind::Id, "a probe name")?.value;
        self.expect(TokenKind::LBrace, "'{'")?;
        let properties = self.parse_properties()?;
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(ProbeDecl {
            name,
            properties,
            span: self.span_from(start),
        })
    }

    fn parse_properties(&mut self) -> Result<Vec<Property>, ParseError> {
        let mut properties = Vec::new();
        while self.check(TokenKind::Dot) {
            properties.push(self.parse_property()?);
        }
        Ok(properties)
    }

    fn parse_property(&mut self) -> Result<Property, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Dot, "'.'")?;
        let name = self.expect(TokenKind::Id, "a property name")?.value;
        self.expect(TokenKind::Assign, "'='")?;

        let value = if self.check(TokenKind::LBrace) {
            self.advance();
            let inline = self.parse_properties()?;
            self.expect(TokenKind::RBrace, "'}'")?;
            PropertyValue::InlineProbe(inline)
        } else {
            PropertyValue::Expr(self.parse_expression()?)
        };

        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(Property {
            name,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_acl(&mut self) -> Result<AclDecl, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Acl, "'acl'")?;
        let name = self.expect(TokenKind::Id, "an ACL name")?.value;
        self.expect(TokenKind::LBrace, "'{'")?;

        let mut entries = Vec::new();
        while !self.check(TokenKind::RBrace) {
            entries.push(self.parse_acl_entry()?);
        }
        self.expect(TokenKind::RBrace, "'}'")?;

        Ok(AclDecl {
            name,
            entries,
            span: self.span_from(start),
        })
    }

    fn parse_acl_entry(&mut self) -> Result<AclEntry, ParseError> {
        let start = self.peek().span.start.clone();
        let negated = if self.check(TokenKind::Not) {
            self.advance();
            true
        } else {
            false
        };
        let host = unescape(&self.expect(TokenKind::CStr, "a quoted host or CIDR")?.value);
        let mask = if self.check(TokenKind::Slash) {
            self.advance();
            let tok = self.expect(TokenKind::CNum, "a mask length")?;
            Some(tok.value.parse::<u8>().map_err(|_| {
                ParseError::new(
                    ParseErrorReason::UnexpectedToken,
                    format!("invalid ACL mask length {:?}", tok.value),
                    tok.span.start.clone(),
                )
            })?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(AclEntry {
            host,
            mask,
            negated,
            span: self.span_from(start),
        })
    }

    fn parse_sub(&mut self) -> Result<SubDecl, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Sub, "'sub'")?;
        let name = self.expect(TokenKind::Id, "a subroutine name")?.value;
        let body = self.parse_block()?;
        Ok(SubDecl {
            name,
            body,
            span: self.span_from(start),
        })
    }
}

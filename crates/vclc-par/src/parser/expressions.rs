//! Expression grammar: precedence-climbing binary operators over a
//! postfix-decorated primary, plus the duration/bytes literal merge.
//!
//! Binding powers double-step like a classic Pratt parser (`right_bp =
//! left_bp + 1`) so each level is strictly left-associative; there are
//! no right-associative operators in VCL's expression grammar.

use vclc_lex::{Token, TokenKind};
use vclc_util::Span;

use crate::ast::*;
use crate::duration;
use crate::error::{ParseError, ParseErrorReason};

use super::Parser;

mod bp {
    pub const MIN: u8 = 0;
    pub const OR: u8 = 2;
    pub const AND: u8 = 4;
    pub const COMPARISON: u8 = 6;
    pub const ADDITIVE: u8 = 8;
    pub const MULTIPLICATIVE: u8 = 10;
}

impl Parser {
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_expr(bp::MIN)
    }

    fn parse_expr(&mut self, min_bp: u8) -> Result<Expression, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let Some((op, left_bp)) = binary_op(self.peek_kind()) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }
            self.advance();
            let right = self.parse_expr(left_bp + 1)?;
            let span = left.span().merge(&right.span());
            left = Expression::Binary(BinaryExpression {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            });
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        let op = match self.peek_kind() {
            TokenKind::Not => Some(UnOp::Not),
            TokenKind::Minus => Some(UnOp::Neg),
            _ => None,
        };

        if let Some(op) = op {
            let start = self.peek().span.start.clone();
            self.advance();
            let operand = self.parse_unary()?;
            let span = self.span_from(start);
            return Ok(Expression::Unary(UnaryExpression {
                op,
                operand: Box::new(operand),
                span,
            }));
        }

        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.peek_kind() {
                TokenKind::Dot => {
                    let start = expr.span().start.clone();
                    self.advance();
                    let property = self.parse_identifier()?;
                    expr = Expression::Member(MemberExpression {
                        object: Box::new(expr),
                        property,
                        span: self.span_from(start),
                    });
                }
                TokenKind::LBracket => {
                    let start = expr.span().start.clone();
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(TokenKind::RBracket, "']'")?;
                    expr = Expression::Index(IndexExpression {
                        object: Box::new(expr),
                        index: Box::new(index),
                        span: self.span_from(start),
                    });
                }
                TokenKind::LParen => {
                    let start = expr.span().start.clone();
                    self.advance();
                    let mut arguments = Vec::new();
                    if !self.check(TokenKind::RParen) {
                        arguments.push(self.parse_expression()?);
                        while self.check(TokenKind::Comma) {
                            self.advance();
                            arguments.push(self.parse_expression()?);
                        }
                    }
                    self.expect(TokenKind::RParen, "')'")?;
                    expr = Expression::Call(CallExpression {
                        callee: Box::new(expr),
                        arguments,
                        span: self.span_from(start),
                    });
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        match self.peek_kind() {
            TokenKind::CNum => {
                let tok = self.advance();
                self.merge_unit_literal(tok, false)
            }
            TokenKind::FNum => {
                let tok = self.advance();
                self.merge_unit_literal(tok, true)
            }
            TokenKind::CStr => {
                let tok = self.advance();
                let value = unescape(&tok.value);
                Ok(Expression::StringLiteral(StringLiteral {
                    value,
                    span: tok.span,
                }))
            }
            TokenKind::Id => {
                let tok = self.advance();
                match tok.value.as_str() {
                    "true" => Ok(Expression::BoolLiteral(BoolLiteral {
                        value: true,
                        span: tok.span,
                    })),
                    "false" => Ok(Expression::BoolLiteral(BoolLiteral {
                        value: false,
                        span: tok.span,
                    })),
                    _ => Ok(Expression::Identifier(Identifier {
                        name: tok.value,
                        span: tok.span,
                    })),
                }
            }
            TokenKind::LParen => {
                let start = self.peek().span.start.clone();
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(Expression::Paren(ParenExpression {
                    inner: Box::new(inner),
                    span: self.span_from(start),
                }))
            }
            _ => Err(self.error_at(
                ParseErrorReason::ExpectedExpression,
                format!("expected an expression, found {:?}", self.peek_kind()),
                Span::point(self.peek().span.start.clone()),
            )),
        }
    }

    /// If `num_tok` is immediately followed (no whitespace) by an `Id`,
    /// fold the pair into a duration or bytes literal; otherwise return
    /// the bare numeric literal.
    fn merge_unit_literal(&mut self, num_tok: Token, is_float: bool) -> Result<Expression, ParseError> {
        let adjacent = self.check(TokenKind::Id) && self.peek().span.start.offset == num_tok.span.end.offset;

        if adjacent {
            let unit_tok = self.peek().clone();

            if duration::is_duration_unit(&unit_tok.value) {
                self.advance();
                let raw = format!("{}{}", num_tok.value, unit_tok.value);
                let seconds = duration::parse_duration(&raw)
                    .map_err(|msg| ParseError::new(ParseErrorReason::UnexpectedToken, msg, num_tok.span.start.clone()))?;
                return Ok(Expression::DurationLiteral(DurationLiteral {
                    seconds,
                    raw,
                    span: num_tok.span.merge(&unit_tok.span),
                }));
            }

            if duration::is_byte_unit(&unit_tok.value) {
                self.advance();
                let raw = format!("{}{}", num_tok.value, unit_tok.value);
                let bytes = duration::parse_bytes(&raw)
                    .map_err(|msg| ParseError::new(ParseErrorReason::UnexpectedToken, msg, num_tok.span.start.clone()))?;
                return Ok(Expression::BytesLiteral(BytesLiteral {
                    bytes,
                    raw,
                    span: num_tok.span.merge(&unit_tok.span),
                }));
            }

            return Err(ParseError::new(
                ParseErrorReason::UnknownUnit,
                format!("unknown unit {:?} on numeric literal", unit_tok.value),
                unit_tok.span.start.clone(),
            ));
        }

        if is_float {
            let value: f64 = num_tok.value.parse().map_err(|_| {
                ParseError::new(
                    ParseErrorReason::UnexpectedToken,
                    format!("malformed float literal {:?}", num_tok.value),
                    num_tok.span.start.clone(),
                )
            })?;
            Ok(Expression::FloatLiteral(FloatLiteral {
                value,
                span: num_tok.span,
            }))
        } else {
            let value: i64 = num_tok.value.parse().map_err(|_| {
                ParseError::new(
                    ParseErrorReason::UnexpectedToken,
                    format!("malformed integer literal {:?}", num_tok.value),
                    num_tok.span.start.clone(),
                )
            })?;
            Ok(Expression::IntegerLiteral(IntegerLiteral {
                value,
                span: num_tok.span,
            }))
        }
    }
}

fn binary_op(kind: TokenKind) -> Option<(BinOp, u8)> {
    Some(match kind {
        TokenKind::OrOr => (BinOp::Or, bp::OR),
        TokenKind::AndAnd => (BinOp::And, bp::AND),
        TokenKind::Eq => (BinOp::Eq, bp::COMPARISON),
        TokenKind::NotEq => (BinOp::NotEq, bp::COMPARISON),
        TokenKind::Lt => (BinOp::Lt, bp::COMPARISON),
        TokenKind::LtEq => (BinOp::LtEq, bp::COMPARISON),
        TokenKind::Gt => (BinOp::Gt, bp::COMPARISON),
        TokenKind::GtEq => (BinOp::GtEq, bp::COMPARISON),
        TokenKind::Match => (BinOp::Match, bp::COMPARISON),
        TokenKind::NoMatch => (BinOp::NoMatch, bp::COMPARISON),
        TokenKind::Plus => (BinOp::Add, bp::ADDITIVE),
        TokenKind::Minus => (BinOp::Sub, bp::ADDITIVE),
        TokenKind::Star => (BinOp::Mul, bp::MULTIPLICATIVE),
        TokenKind::Slash => (BinOp::Div, bp::MULTIPLICATIVE),
        TokenKind::Percent => (BinOp::Mod, bp::MULTIPLICATIVE),
        _ => return None,
    })
}

/// Resolve the escapes recognized by the lexer's string grammar,
/// stripping the surrounding quotes `value` keeps for losslessness.
/// Strip the surrounding quotes from a `CStr` token's raw lexeme and
/// resolve its backslash escapes. Shared by every AST field that holds
/// string-literal content (`StringLiteral.value`, but also the bare
/// `import ... from`, `include`, and ACL-entry host/CIDR strings, none
/// of which go through the expression grammar themselves).
pub(crate) fn unescape(raw: &str) -> String {
    let inner = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(raw);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

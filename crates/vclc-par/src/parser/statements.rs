//! Statement grammar: everything that can appear inside a `sub` body.

use vclc_lex::TokenKind;

use crate::ast::*;
use crate::error::ParseError;

use super::Parser;

impl Parser {
    pub(crate) fn parse_block(&mut self) -> Result<BlockStatement, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(BlockStatement {
            statements,
            span: self.span_from(start),
        })
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek_kind() {
            TokenKind::LBrace => self.parse_block().map(Statement::Block),
            TokenKind::If => self.parse_if().map(Statement::If),
            TokenKind::Set => self.parse_set().map(Statement::Set),
            TokenKind::Unset => self.parse_unset().map(Statement::Unset),
            TokenKind::Call => self.parse_call().map(Statement::Call),
            TokenKind::Return => self.parse_return().map(Statement::Return),
            TokenKind::New => self.parse_new().map(Statement::New),
            _ => self.parse_expression_statement().map(Statement::Expr),
        }
    }

    fn parse_if(&mut self) -> Result<IfStatement, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::If, "'if'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.check(TokenKind::Else) {
            self.advance();
            if self.check(TokenKind::If) {
                Some(Box::new(Statement::If(self.parse_if()?)))
            } else {
                Some(Box::new(self.parse_statement()?))
            }
        } else {
            None
        };

        Ok(IfStatement {
            condition,
            then_branch,
            else_branch,
            span: self.span_from(start),
        })
    }

    fn parse_set(&mut self) -> Result<SetStatement, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Set, "'set'")?;
        let target = self.parse_lvalue()?;
        let op = self.parse_assign_op()?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(SetStatement {
            target,
            op,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_assign_op(&mut self) -> Result<AssignOp, ParseError> {
        let op = match self.peek_kind() {
            TokenKind::Assign => AssignOp::Assign,
            TokenKind::PlusEq => AssignOp::PlusEq,
            TokenKind::MinusEq => AssignOp::MinusEq,
            TokenKind::StarEq => AssignOp::StarEq,
            TokenKind::SlashEq => AssignOp::SlashEq,
            _ => return Err(self.unexpected("an assignment operator ('=', '+=', '-=', '*=', '/=')")),
        };
        self.advance();
        Ok(op)
    }

    fn parse_unset(&mut self) -> Result<UnsetStatement, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Unset, "'unset'")?;
        let target = self.parse_lvalue()?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(UnsetStatement {
            target,
            span: self.span_from(start),
        })
    }

    fn parse_call(&mut self) -> Result<CallStatement, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Call, "'call'")?;
        let target = self.parse_identifier()?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(CallStatement {
            target,
            span: self.span_from(start),
        })
    }

    fn parse_return(&mut self) -> Result<ReturnStatement, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::Return, "'return'")?;

        let mut action = None;
        let mut argument = None;
        if self.check(TokenKind::LParen) {
            self.advance();
            action = Some(self.parse_identifier()?);
            if self.check(TokenKind::Comma) {
                self.advance();
                argument = Some(self.parse_expression()?);
            }
            self.expect(TokenKind::RParen, "')'")?;
        }

        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(ReturnStatement {
            action,
            argument,
            span: self.span_from(start),
        })
    }

    fn parse_new(&mut self) -> Result<NewStatement, ParseError> {
        let start = self.peek().span.start.clone();
        self.expect(TokenKind::New, "'new'")?;
        let name = self.expect(TokenKind::Id, "an object name")?.value;
        self.expect(TokenKind::Assign, "'='")?;
        let callee_expr = self.parse_expression()?;
        let constructor = match callee_expr {
            crate::ast::Expression::Call(call) => call,
            other => {
                return Err(self.error_at(
                    crate::error::ParseErrorReason::UnexpectedToken,
                    "expected a VMOD constructor call on the right-hand side of 'new'",
                    other.span(),
                ))
            }
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(NewStatement {
            name,
            constructor,
            span: self.span_from(start),
        })
    }

    fn parse_expression_statement(&mut self) -> Result<ExpressionStatement, ParseError> {
        let start = self.peek().span.start.clone();
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(ExpressionStatement {
            expr,
            span: self.span_from(start),
        })
    }

    /// An assignable path: an identifier followed by any number of
    /// `.field` or `[index]` steps, but never a call - `set` and
    /// `unset` targets are places, not computed values.
    pub(crate) fn parse_lvalue(&mut self) -> Result<Expression, ParseError> {
        let mut expr = Expression::Identifier(self.parse_identifier()?);
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
                _ => break,
            }
        }
        Ok(expr)
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let tok = self.expect(TokenKind::Id, "an identifier")?;
        Ok(Identifier {
            name: tok.value,
            span: tok.span,
        })
    }
}

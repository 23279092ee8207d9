//! Visitor double dispatch over the AST.
//!
//! Each node has an `accept` method that calls back into the matching
//! `visit_*` method on the [`Visitor`]; the default `visit_*` body walks
//! the node's children (via their own `accept`) and discards the
//! result, so a visitor that only overrides `visit_identifier`, say,
//! still gets called on every identifier anywhere in the tree without
//! having to re-implement traversal.
//!
//! A visitor is generic over its own output type via [`Visitor::Output`]
//! rather than being dispatched through a trait object: a pretty-printer
//! specializes it to `()`, a JSON exporter to a tree value.

use crate::ast::*;

pub trait Visitor {
    type Output: Default;

    fn visit_program(&mut self, node: &Program) -> Self::Output {
        for decl in &node.declarations {
            decl.accept(self);
        }
        Self::Output::default()
    }

    fn visit_import_decl(&mut self, _node: &ImportDecl) -> Self::Output {
        Self::Output::default()
    }

    fn visit_include_decl(&mut self, _node: &IncludeDecl) -> Self::Output {
        Self::Output::default()
    }

    fn visit_backend_decl(&mut self, node: &BackendDecl) -> Self::Output {
        for prop in &node.properties {
            self.visit_property(prop);
        }
        Self::Output::default()
    }

    fn visit_probe_decl(&mut self, node: &ProbeDecl) -> Self::Output {
        for prop in &node.properties {
            self.visit_property(prop);
        }
        Self::Output::default()
    }

    fn visit_property(&mut self, node: &Property) -> Self::Output {
        match &node.value {
            PropertyValue::Expr(e) => {
                e.accept(self);
            }
            PropertyValue::InlineProbe(props) => {
                for prop in props {
                    self.visit_property(prop);
                }
            }
        }
        Self::Output::default()
    }

    fn visit_acl_decl(&mut self, _node: &AclDecl) -> Self::Output {
        Self::Output::default()
    }

    fn visit_sub_decl(&mut self, node: &SubDecl) -> Self::Output {
        self.visit_block_statement(&node.body);
        Self::Output::default()
    }

    fn visit_block_statement(&mut self, node: &BlockStatement) -> Self::Output {
        for stmt in &node.statements {
            stmt.accept(self);
        }
        Self::Output::default()
    }

    fn visit_if_statement(&mut self, node: &IfStatement) -> Self::Output {
        node.condition.accept(self);
        node.then_branch.accept(self);
        if let Some(else_branch) = &node.else_branch {
            else_branch.accept(self);
        }
        Self::Output::default()
    }

    fn visit_set_statement(&mut self, node: &SetStatement) -> Self::Output {
        node.target.accept(self);
        node.value.accept(self);
        Self::Output::default()
    }

    fn visit_unset_statement(&mut self, node: &UnsetStatement) -> Self::Output {
        node.target.accept(self);
        Self::Output::default()
    }

    fn visit_call_statement(&mut self, node: &CallStatement) -> Self::Output {
        self.visit_identifier(&node.target);
        Self::Output::default()
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement) -> Self::Output {
        if let Some(action) = &node.action {
            self.visit_identifier(action);
        }
        if let Some(arg) = &node.argument {
            arg.accept(self);
        }
        Self::Output::default()
    }

    fn visit_new_statement(&mut self, node: &NewStatement) -> Self::Output {
        self.visit_call_expression(&node.constructor);
        Self::Output::default()
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement) -> Self::Output {
        node.expr.accept(self);
        Self::Output::default()
    }

    fn visit_identifier(&mut self, _node: &Identifier) -> Self::Output {
        Self::Output::default()
    }

    fn visit_string_literal(&mut self, _node: &StringLiteral) -> Self::Output {
        Self::Output::default()
    }

    fn visit_integer_literal(&mut self, _node: &IntegerLiteral) -> Self::Output {
        Self::Output::default()
    }

    fn visit_float_literal(&mut self, _node: &FloatLiteral) -> Self::Output {
        Self::Output::default()
    }

    fn visit_bool_literal(&mut self, _node: &BoolLiteral) -> Self::Output {
        Self::Output::default()
    }

    fn visit_duration_literal(&mut self, _node: &DurationLiteral) -> Self::Output {
        Self::Output::default()
    }

    fn visit_bytes_literal(&mut self, _node: &BytesLiteral) -> Self::Output {
        Self::Output::default()
    }

    fn visit_member_expression(&mut self, node: &MemberExpression) -> Self::Output {
        node.object.accept(self);
        self.visit_identifier(&node.property);
        Self::Output::default()
    }

    fn visit_index_expression(&mut self, node: &IndexExpression) -> Self::Output {
        node.object.accept(self);
        node.index.accept(self);
        Self::Output::default()
    }

    fn visit_call_expression(&mut self, node: &CallExpression) -> Self::Output {
        node.callee.accept(self);
        for arg in &node.arguments {
            arg.accept(self);
        }
        Self::Output::default()
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression) -> Self::Output {
        node.left.accept(self);
        node.right.accept(self);
        Self::Output::default()
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression) -> Self::Output {
        node.operand.accept(self);
        Self::Output::default()
    }

    fn visit_paren_expression(&mut self, node: &ParenExpression) -> Self::Output {
        node.inner.accept(self);
        Self::Output::default()
    }
}

impl Program {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_program(self)
    }
}

impl Declaration {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Declaration::Import(d) => visitor.visit_import_decl(d),
            Declaration::Include(d) => visitor.visit_include_decl(d),
            Declaration::Backend(d) => visitor.visit_backend_decl(d),
            Declaration::Probe(d) => visitor.visit_probe_decl(d),
            Declaration::Acl(d) => visitor.visit_acl_decl(d),
            Declaration::Sub(d) => visitor.visit_sub_decl(d),
        }
    }
}

impl Statement {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Statement::Block(s) => visitor.visit_block_statement(s),
            Statement::If(s) => visitor.visit_if_statement(s),
            Statement::Set(s) => visitor.visit_set_statement(s),
            Statement::Unset(s) => visitor.visit_unset_statement(s),
            Statement::Call(s) => visitor.visit_call_statement(s),
            Statement::Return(s) => visitor.visit_return_statement(s),
            Statement::New(s) => visitor.visit_new_statement(s),
            Statement::Expr(s) => visitor.visit_expression_statement(s),
        }
    }
}

impl Expression {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expression::Identifier(e) => visitor.visit_identifier(e),
            Expression::StringLiteral(e) => visitor.visit_string_literal(e),
            Expression::IntegerLiteral(e) => visitor.visit_integer_literal(e),
            Expression::FloatLiteral(e) => visitor.visit_float_literal(e),
            Expression::BoolLiteral(e) => visitor.visit_bool_literal(e),
            Expression::DurationLiteral(e) => visitor.visit_duration_literal(e),
            Expression::BytesLiteral(e) => visitor.visit_bytes_literal(e),
            Expression::Member(e) => visitor.visit_member_expression(e),
            Expression::Index(e) => visitor.visit_index_expression(e),
            Expression::Call(e) => visitor.visit_call_expression(e),
            Expression::Binary(e) => visitor.visit_binary_expression(e),
            Expression::Unary(e) => visitor.visit_unary_expression(e),
            Expression::Paren(e) => visitor.visit_paren_expression(e),
        }
    }
}

//! JSON-shaped AST export.
//!
//! This module renders a [`Program`](crate::ast::Program) into a generic
//! [`JsonValue`] tree - `{"type": "<Variant>", ...fields}` per node,
//! matching the source language's JSON AST dump. Actually serializing
//! that tree to JSON text is deliberately left to a caller (e.g. the
//! CLI driver via `serde_json`): this crate has no JSON-text dependency
//! of its own.

use crate::ast::*;
use crate::visitor::Visitor;

#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    /// Field order is preserved (it's just a `Vec`, not a map) so the
    /// export reads the same way every time it's run.
    Object(Vec<(String, JsonValue)>),
}

impl Default for JsonValue {
    fn default() -> Self {
        JsonValue::Null
    }
}

fn obj(ty: &str, fields: Vec<(&str, JsonValue)>) -> JsonValue {
    let mut entries = vec![("type".to_string(), JsonValue::String(ty.to_string()))];
    entries.extend(fields.into_iter().map(|(k, v)| (k.to_string(), v)));
    JsonValue::Object(entries)
}

fn span_json(span: &vclc_util::Span) -> JsonValue {
    JsonValue::Object(vec![
        ("start_line".to_string(), JsonValue::Number(span.start.line as f64)),
        ("start_column".to_string(), JsonValue::Number(span.start.column as f64)),
        ("start_offset".to_string(), JsonValue::Number(span.start.offset as f64)),
        ("end_line".to_string(), JsonValue::Number(span.end.line as f64)),
        ("end_column".to_string(), JsonValue::Number(span.end.column as f64)),
        ("end_offset".to_string(), JsonValue::Number(span.end.offset as f64)),
    ])
}

/// Visitor that renders every node it touches as a [`JsonValue`]. There
/// is no pass-through here: every `visit_*` is overridden, since the
/// default trait behavior discards children's output and this visitor's
/// entire job is to keep it.
#[derive(Default)]
pub struct JsonExporter;

impl Visitor for JsonExporter {
    type Output = JsonValue;

    fn visit_program(&mut self, node: &Program) -> JsonValue {
        let declarations = JsonValue::Array(node.declarations.iter().map(|d| d.accept(self)).collect());
        let vcl_version = match &node.vcl_version {
            Some(v) => self.visit_vcl_version_decl(v),
            None => JsonValue::Null,
        };
        obj(
            "Program",
            vec![
                ("vcl_version", vcl_version),
                ("declarations", declarations),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) -> JsonValue {
        obj(
            "ImportDecl",
            vec![
                ("module", JsonValue::String(node.module.clone())),
                (
                    "from",
                    node.from.clone().map(JsonValue::String).unwrap_or(JsonValue::Null),
                ),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_include_decl(&mut self, node: &IncludeDecl) -> JsonValue {
        obj(
            "IncludeDecl",
            vec![
                ("path", JsonValue::String(node.path.clone())),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_backend_decl(&mut self, node: &BackendDecl) -> JsonValue {
        let properties = JsonValue::Array(node.properties.iter().map(|p| self.visit_property(p)).collect());
        obj(
            "BackendDecl",
            vec![
                ("name", JsonValue::String(node.name.clone())),
                ("properties", properties),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_probe_decl(&mut self, node: &ProbeDecl) -> JsonValue {
        let properties = JsonValue::Array(node.properties.iter().map(|p| self.visit_property(p)).collect());
        obj(
            "ProbeDecl",
            vec![
                ("name", JsonValue::String(node.name.clone())),
                ("properties", properties),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_property(&mut self, node: &Property) -> JsonValue {
        let value = match &node.value {
            PropertyValue::Expr(e) => e.accept(self),
            PropertyValue::InlineProbe(props) => {
                JsonValue::Array(props.iter().map(|p| self.visit_property(p)).collect())
            }
        };
        obj(
            "Property",
            vec![
                ("name", JsonValue::String(node.name.clone())),
                ("value", value),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_acl_decl(&mut self, node: &AclDecl) -> JsonValue {
        let entries = JsonValue::Array(
            node.entries
                .iter()
                .map(|e| {
                    obj(
                        "AclEntry",
                        vec![
                            ("host", JsonValue::String(e.host.clone())),
                            (
                                "mask",
                                e.mask.map(|m| JsonValue::Number(m as f64)).unwrap_or(JsonValue::Null),
                            ),
                            ("negated", JsonValue::Bool(e.negated)),
                            ("span", span_json(&e.span)),
                        ],
                    )
                })
                .collect(),
        );
        obj(
            "AclDecl",
            vec![
                ("name", JsonValue::String(node.name.clone())),
                ("entries", entries),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_sub_decl(&mut self, node: &SubDecl) -> JsonValue {
        let body = self.visit_block_statement(&node.body);
        obj(
            "SubDecl",
            vec![
                ("name", JsonValue::String(node.name.clone())),
                ("body", body),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_block_statement(&mut self, node: &BlockStatement) -> JsonValue {
        let statements = JsonValue::Array(node.statements.iter().map(|s| s.accept(self)).collect());
        obj(
            "BlockStatement",
            vec![("statements", statements), ("span", span_json(&node.span))],
        )
    }

    fn visit_if_statement(&mut self, node: &IfStatement) -> JsonValue {
        let condition = node.condition.accept(self);
        let then_branch = node.then_branch.accept(self);
        let else_branch = node.else_branch.as_ref().map(|e| e.accept(self)).unwrap_or(JsonValue::Null);
        obj(
            "IfStatement",
            vec![
                ("condition", condition),
                ("then", then_branch),
                ("else", else_branch),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_set_statement(&mut self, node: &SetStatement) -> JsonValue {
        let target = node.target.accept(self);
        let value = node.value.accept(self);
        obj(
            "SetStatement",
            vec![
                ("target", target),
                ("op", JsonValue::String(assign_op_str(node.op).to_string())),
                ("value", value),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_unset_statement(&mut self, node: &UnsetStatement) -> JsonValue {
        let target = node.target.accept(self);
        obj("UnsetStatement", vec![("target", target), ("span", span_json(&node.span))])
    }

    fn visit_call_statement(&mut self, node: &CallStatement) -> JsonValue {
        let target = self.visit_identifier(&node.target);
        obj("CallStatement", vec![("target", target), ("span", span_json(&node.span))])
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement) -> JsonValue {
        let action = node
            .action
            .as_ref()
            .map(|a| self.visit_identifier(a))
            .unwrap_or(JsonValue::Null);
        let argument = node.argument.as_ref().map(|a| a.accept(self)).unwrap_or(JsonValue::Null);
        obj(
            "ReturnStatement",
            vec![
                ("action", action),
                ("argument", argument),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_new_statement(&mut self, node: &NewStatement) -> JsonValue {
        let constructor = self.visit_call_expression(&node.constructor);
        obj(
            "NewStatement",
            vec![
                ("name", JsonValue::String(node.name.clone())),
                ("constructor", constructor),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement) -> JsonValue {
        let expr = node.expr.accept(self);
        obj("ExpressionStatement", vec![("expr", expr), ("span", span_json(&node.span))])
    }

    fn visit_identifier(&mut self, node: &Identifier) -> JsonValue {
        obj(
            "Identifier",
            vec![("name", JsonValue::String(node.name.clone())), ("span", span_json(&node.span))],
        )
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) -> JsonValue {
        obj(
            "StringLiteral",
            vec![
                ("value", JsonValue::String(node.value.clone())),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_integer_literal(&mut self, node: &IntegerLiteral) -> JsonValue {
        obj(
            "IntegerLiteral",
            vec![("value", JsonValue::Number(node.value as f64)), ("span", span_json(&node.span))],
        )
    }

    fn visit_float_literal(&mut self, node: &FloatLiteral) -> JsonValue {
        obj(
            "FloatLiteral",
            vec![("value", JsonValue::Number(node.value)), ("span", span_json(&node.span))],
        )
    }

    fn visit_bool_literal(&mut self, node: &BoolLiteral) -> JsonValue {
        obj(
            "BoolLiteral",
            vec![("value", JsonValue::Bool(node.value)), ("span", span_json(&node.span))],
        )
    }

    fn visit_duration_literal(&mut self, node: &DurationLiteral) -> JsonValue {
        obj(
            "DurationLiteral",
            vec![
                ("seconds", JsonValue::Number(node.seconds)),
                ("raw", JsonValue::String(node.raw.clone())),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_bytes_literal(&mut self, node: &BytesLiteral) -> JsonValue {
        obj(
            "BytesLiteral",
            vec![
                ("bytes", JsonValue::Number(node.bytes as f64)),
                ("raw", JsonValue::String(node.raw.clone())),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_member_expression(&mut self, node: &MemberExpression) -> JsonValue {
        let object = node.object.accept(self);
        let property = self.visit_identifier(&node.property);
        obj(
            "MemberExpression",
            vec![("object", object), ("property", property), ("span", span_json(&node.span))],
        )
    }

    fn visit_index_expression(&mut self, node: &IndexExpression) -> JsonValue {
        let object = node.object.accept(self);
        let index = node.index.accept(self);
        obj(
            "IndexExpression",
            vec![("object", object), ("index", index), ("span", span_json(&node.span))],
        )
    }

    fn visit_call_expression(&mut self, node: &CallExpression) -> JsonValue {
        let callee = node.callee.accept(self);
        let arguments = JsonValue::Array(node.arguments.iter().map(|a| a.accept(self)).collect());
        obj(
            "CallExpression",
            vec![("callee", callee), ("arguments", arguments), ("span", span_json(&node.span))],
        )
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression) -> JsonValue {
        let left = node.left.accept(self);
        let right = node.right.accept(self);
        obj(
            "BinaryExpression",
            vec![
                ("op", JsonValue::String(binop_str(node.op).to_string())),
                ("left", left),
                ("right", right),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression) -> JsonValue {
        let operand = node.operand.accept(self);
        obj(
            "UnaryExpression",
            vec![
                ("op", JsonValue::String(unop_str(node.op).to_string())),
                ("operand", operand),
                ("span", span_json(&node.span)),
            ],
        )
    }

    fn visit_paren_expression(&mut self, node: &ParenExpression) -> JsonValue {
        let inner = node.inner.accept(self);
        obj("ParenExpression", vec![("inner", inner), ("span", span_json(&node.span))])
    }
}

impl JsonExporter {
    fn visit_vcl_version_decl(&mut self, node: &VclVersionDecl) -> JsonValue {
        obj(
            "VclVersionDecl",
            vec![
                ("version", JsonValue::String(node.version.clone())),
                ("span", span_json(&node.span)),
            ],
        )
    }
}

fn assign_op_str(op: AssignOp) -> &'static str {
    match op {
        AssignOp::Assign => "=",
        AssignOp::PlusEq => "+=",
        AssignOp::MinusEq => "-=",
        AssignOp::StarEq => "*=",
        AssignOp::SlashEq => "/=",
    }
}

fn binop_str(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Mod => "%",
        BinOp::Eq => "==",
        BinOp::NotEq => "!=",
        BinOp::Lt => "<",
        BinOp::LtEq => "<=",
        BinOp::Gt => ">",
        BinOp::GtEq => ">=",
        BinOp::And => "&&",
        BinOp::Or => "||",
        BinOp::Match => "~",
        BinOp::NoMatch => "!~",
    }
}

fn unop_str(op: UnOp) -> &'static str {
    match op {
        UnOp::Neg => "-",
        UnOp::Not => "!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_minimal_program_with_type_tags() {
        let program = crate::parse("vcl 4.0;\n", "t.vcl").unwrap();
        let mut exporter = JsonExporter;
        let json = program.accept(&mut exporter);
        match json {
            JsonValue::Object(fields) => {
                assert!(fields.iter().any(|(k, v)| k == "type" && *v == JsonValue::String("Program".into())));
                assert!(fields.iter().any(|(k, _)| k == "declarations"));
            }
            other => panic!("expected an object, got {other:?}"),
        }
    }

    #[test]
    fn exports_acl_host_without_surrounding_quotes() {
        let program = crate::parse(r#"acl internal { "10.0.0.1"; }"#, "t.vcl").unwrap();
        let mut exporter = JsonExporter;
        let json = program.accept(&mut exporter);

        let JsonValue::Object(program_fields) = json else {
            panic!("expected an object");
        };
        let (_, declarations) = program_fields.into_iter().find(|(k, _)| k == "declarations").unwrap();
        let JsonValue::Array(declarations) = declarations else {
            panic!("expected an array");
        };
        let JsonValue::Object(acl_fields) = declarations.into_iter().next().unwrap() else {
            panic!("expected an object");
        };
        let (_, entries) = acl_fields.into_iter().find(|(k, _)| k == "entries").unwrap();
        let JsonValue::Array(entries) = entries else {
            panic!("expected an array");
        };
        let JsonValue::Object(entry_fields) = entries.into_iter().next().unwrap() else {
            panic!("expected an object");
        };
        let (_, host) = entry_fields.into_iter().find(|(k, _)| k == "host").unwrap();
        assert_eq!(host, JsonValue::String("10.0.0.1".to_string()));
    }

    #[test]
    fn exports_binary_expression_with_nested_operands() {
        let program = crate::parse("sub vcl_recv { if (1 + 2 == 3) { return (hash); } }", "t.vcl").unwrap();
        let mut exporter = JsonExporter;
        let json = program.accept(&mut exporter);
        let text = format!("{json:?}");
        assert!(text.contains("BinaryExpression"));
        assert!(text.contains("IntegerLiteral"));
    }
}

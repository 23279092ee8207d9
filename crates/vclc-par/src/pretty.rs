//! A minimal pretty-printer visitor, mostly useful for debugging and as
//! the CLI's default (non-`--json`) output mode.
//!
//! Output type is `()`: this visitor writes into its own buffer rather
//! than building a value, which is the shape the design notes call out
//! for a visitor that specializes `R` to unit.

use std::fmt::Write as _;

use crate::ast::*;
use crate::visitor::Visitor;

#[derive(Default)]
pub struct PrettyPrinter {
    out: String,
    indent: usize,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(mut self, program: &Program) -> String {
        program.accept(&mut self);
        self.out
    }

    fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}{}", "  ".repeat(self.indent), text.as_ref());
    }

    fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }
}

impl Visitor for PrettyPrinter {
    type Output = ();

    fn visit_program(&mut self, node: &Program) {
        if let Some(v) = &node.vcl_version {
            self.line(format!("vcl {};", v.version));
        }
        for decl in &node.declarations {
            decl.accept(self);
        }
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        match &node.from {
            Some(from) => self.line(format!("import {} from {:?};", node.module, from)),
            None => self.line(format!("import {};", node.module)),
        }
    }

    fn visit_include_decl(&mut self, node: &IncludeDecl) {
        self.line(format!("include {:?};", node.path));
    }

    fn visit_backend_decl(&mut self, node: &BackendDecl) {
        self.line(format!("backend {} {{", node.name));
        self.indented(|p| {
            for prop in &node.properties {
                p.visit_property(prop);
            }
        });
        self.line("}");
    }

    fn visit_probe_decl(&mut self, node: &ProbeDecl) {
        self.line(format!("probe {} {{", node.name));
        self.indented(|p| {
            for prop in &node.properties {
                p.visit_property(prop);
            }
        });
        self.line("}");
    }

    fn visit_property(&mut self, node: &Property) {
        match &node.value {
            PropertyValue::Expr(_) => self.line(format!(".{} = <expr>;", node.name)),
            PropertyValue::InlineProbe(props) => {
                self.line(format!(".{} = {{", node.name));
                self.indented(|p| {
                    for prop in props {
                        p.visit_property(prop);
                    }
                });
                self.line("}");
            }
        }
    }

    fn visit_acl_decl(&mut self, node: &AclDecl) {
        self.line(format!("acl {} {{", node.name));
        self.indented(|p| {
            for entry in &node.entries {
                let bang = if entry.negated { "!" } else { "" };
                match entry.mask {
                    Some(mask) => p.line(format!("{bang}{:?}/{mask};", entry.host)),
                    None => p.line(format!("{bang}{:?};", entry.host)),
                }
            }
        });
        self.line("}");
    }

    fn visit_sub_decl(&mut self, node: &SubDecl) {
        self.line(format!("sub {} {{", node.name));
        self.indented(|p| {
            for stmt in &node.body.statements {
                stmt.accept(p);
            }
        });
        self.line("}");
    }

    fn visit_if_statement(&mut self, node: &IfStatement) {
        self.line("if (<expr>) {");
        self.indented(|p| node.then_branch.accept(p));
        self.line("}");
        if let Some(else_branch) = &node.else_branch {
            self.line("else {");
            self.indented(|p| else_branch.accept(p));
            self.line("}");
        }
    }

    fn visit_set_statement(&mut self, node: &SetStatement) {
        self.line(format!("set <lvalue> {} <expr>;", assign_op_str(node.op)));
    }

    fn visit_unset_statement(&mut self, _node: &UnsetStatement) {
        self.line("unset <lvalue>;");
    }

    fn visit_call_statement(&mut self, node: &CallStatement) {
        self.line(format!("call {};", node.target.name));
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        match &node.action {
            Some(action) => self.line(format!("return ({});", action.name)),
            None => self.line("return;"),
        }
    }

    fn visit_new_statement(&mut self, node: &NewStatement) {
        self.line(format!("new {} = <constructor call>;", node.name));
    }

    fn visit_expression_statement(&mut self, _node: &ExpressionStatement) {
        self.line("<expr>;");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_a_backend_and_sub() {
        let program = crate::parse(
            r#"vcl 4.0;
backend default { .host = "127.0.0.1"; }
sub vcl_recv { return (hash); }
"#,
            "t.vcl",
        )
        .unwrap();
        let text = PrettyPrinter::new().print(&program);
        assert!(text.contains("vcl 4.0;"));
        assert!(text.contains("backend default {"));
        assert!(text.contains("sub vcl_recv {"));
        assert!(text.contains("return (hash);"));
    }

    #[test]
    fn acl_host_prints_without_doubled_quotes() {
        let program = crate::parse(r#"acl internal { "10.0.0.1"; }"#, "t.vcl").unwrap();
        let text = PrettyPrinter::new().print(&program);
        assert!(text.contains("\"10.0.0.1\";"));
        assert!(!text.contains("\\\"10.0.0.1\\\""));
    }
}

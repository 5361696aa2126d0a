//! Compact S-expression rendering of a subtree, for tests and `cb tree`.

use std::fmt::Write;

use crate::{Ast, Kind, LitValue, NodeId, Slot};

impl Ast {
    /// Render the subtree at `id`.
    ///
    /// Identifiers print as their bare name, literals as source text, and
    /// every other node as `(Tag attrs.. children..)` with sequences in
    /// brackets and absent optional children as `_`.
    pub fn outline(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_outline(id, &mut out);
        out
    }

    fn write_outline(&self, id: NodeId, out: &mut String) {
        let kind = self.kind(id);
        match kind {
            Kind::Identifier { name } => {
                out.push_str(name);
                return;
            }
            Kind::Literal { value } => {
                write_literal(value, out);
                return;
            }
            Kind::RegexLiteral { pattern, flags } => {
                let _ = write!(out, "/{pattern}/{flags}");
                return;
            }
            _ => {}
        }

        out.push('(');
        out.push_str(kind.name());
        match kind {
            Kind::VariableDeclaration { kind, .. } => {
                let _ = write!(out, " {kind}");
            }
            Kind::Property {
                shorthand: true, ..
            } => out.push_str(" shorthand"),
            Kind::Unary { operator, .. }
            | Kind::Binary { operator, .. }
            | Kind::Logical { operator, .. }
            | Kind::Assignment { operator, .. }
            | Kind::PrefixOp { operator, .. } => {
                let _ = write!(out, " {operator}");
            }
            Kind::Update {
                operator, prefix, ..
            } => {
                let fix = if *prefix { "prefix" } else { "postfix" };
                let _ = write!(out, " {operator} {fix}");
            }
            Kind::Member { computed: true, .. } => out.push_str(" computed"),
            Kind::TemplateElement { raw, .. } => {
                let _ = write!(out, " {raw:?}");
            }
            Kind::RegExp { value } => {
                let _ = write!(out, " {value}");
            }
            Kind::TypedDeclaration { typing, id, .. }
            | Kind::ArgumentDeclaration { typing, id, .. }
            | Kind::ParamDeclaration { typing, id, .. }
            | Kind::ReactiveDeclaration { typing, id, .. } => {
                let _ = write!(out, " {id}");
                if let Some(typing) = typing {
                    let _ = write!(out, ":{typing}");
                }
            }
            Kind::Try { id, .. } => {
                let _ = write!(out, " {id}");
            }
            Kind::Async { operator, .. } => {
                let _ = write!(out, " {operator}");
            }
            _ => {}
        }

        for &field in kind.fields() {
            out.push(' ');
            match kind.slot(field) {
                Some(Slot::One(Some(child))) => self.write_outline(child, out),
                Some(Slot::One(None)) | None => out.push('_'),
                Some(Slot::Many(children)) => {
                    out.push('[');
                    for (i, &child) in children.iter().enumerate() {
                        if i > 0 {
                            out.push(' ');
                        }
                        self.write_outline(child, out);
                    }
                    out.push(']');
                }
            }
        }
        out.push(')');
    }
}

fn write_literal(value: &LitValue, out: &mut String) {
    let _ = match value {
        LitValue::Null => write!(out, "null"),
        LitValue::Bool(b) => write!(out, "{b}"),
        LitValue::Number(n) => write!(out, "{n}"),
        LitValue::String(s) => write!(out, "{s:?}"),
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::Input;

    #[test]
    fn outline_shows_tags_attributes_and_absent_children() {
        let ast = serde_json::from_value::<Input>(json!({
            "type": "IfStatement",
            "test": {
                "type": "BinaryExpression",
                "operator": "<",
                "left": { "type": "Identifier", "name": "n" },
                "right": { "type": "Literal", "value": 2 }
            },
            "then": { "type": "Block", "body": [
                { "type": "ReturnStatement", "argument": { "type": "Literal", "value": "small" } }
            ]}
        }))
        .unwrap()
        .into_ast();

        assert_eq!(
            ast.outline(ast.root().unwrap()),
            r#"(IfStatement (Binary < n 2) (Block [(ReturnStatement "small")]) _)"#
        );
    }
}

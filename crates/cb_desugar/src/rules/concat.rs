//! String concatenation sugar → template literal.

use std::mem;

use cb_ast::{Ast, Kind};

use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

/// `n` expressions are spliced between `n + 1` empty text segments.
pub(crate) fn concatenation(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let node = path.node();
    let expressions = match ast.kind_mut(node) {
        Kind::Concat { expressions } => mem::take(expressions),
        _ => return Ok(false),
    };
    let loc = ast.loc(node);
    let last = expressions.len();
    let quasis = (0..=last)
        .map(|i| {
            ast.alloc(
                Kind::TemplateElement {
                    raw: String::new(),
                    tail: i == last,
                },
                loc,
            )
        })
        .collect();
    ast.replace(node, Kind::TemplateLiteral { quasis, expressions });
    Ok(true)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::testing::{lower, statements};

    #[test]
    fn segments_surround_every_expression() {
        let ast = lower(json!({ "type": "Program", "body": [
            { "type": "ExpressionStatement", "expression": {
                "type": "ConcatExpression",
                "expressions": [
                    { "type": "Identifier", "name": "first" },
                    { "type": "Literal", "value": " " },
                    { "type": "Identifier", "name": "last" }
                ]
            }}
        ]}));
        assert_eq!(
            statements(&ast),
            [concat!(
                "(ExpressionStatement (TemplateLiteral ",
                "[(TemplateElement \"\") (TemplateElement \"\") ",
                "(TemplateElement \"\") (TemplateElement \"\")] ",
                "[first \" \" last]))"
            )]
        );
    }
}

//! Call forms: raw calls, pipes, and keyword arguments at call sites.

use std::mem;

use cb_ast::{Ast, Kind};

use crate::build;
use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

/// The parser hands a call's arguments over as `arguments` or `params`;
/// `arguments` wins when both are present.
pub(crate) fn call_arguments(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let (callee, arguments) = match ast.kind_mut(path.node()) {
        Kind::RawCall {
            callee,
            params,
            arguments,
        } => (*callee, arguments.take().or(params.take()).unwrap_or_default()),
        _ => return Ok(false),
    };
    ast.replace(path.node(), Kind::Call { callee, arguments });
    Ok(true)
}

/// Pipe sugar carries its operands as `params`; they become the arguments.
pub(crate) fn pipe(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let (callee, arguments) = match ast.kind_mut(path.node()) {
        Kind::Pipe { callee, params } => (*callee, mem::take(params)),
        _ => return Ok(false),
    };
    ast.replace(path.node(), Kind::Call { callee, arguments });
    Ok(true)
}

/// `f(a, k = 1, b, j = 2)` → `f({ k: 1, j: 2 }, a, b)`
pub(crate) fn keyword_arguments(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let node = path.node();
    let Kind::Call { arguments, .. } = ast.kind(node) else {
        return Ok(false);
    };
    let mut keywords = Vec::new();
    let mut positional = Vec::new();
    for &arg in arguments {
        match *ast.kind(arg) {
            Kind::AssignmentPattern { left, right } => keywords.push((left, right, ast.loc(arg))),
            _ => positional.push(arg),
        }
    }
    if keywords.is_empty() {
        return Ok(false);
    }

    let loc = ast.loc(node);
    let properties = keywords
        .into_iter()
        .map(|(key, value, loc)| build::property(ast, loc, key, value, false))
        .collect();
    let object = build::object(ast, loc, properties);

    if let Kind::Call { arguments, .. } = ast.kind_mut(node) {
        *arguments = std::iter::once(object).chain(positional).collect();
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::testing::{lower, statements};

    #[test]
    fn call_prefers_arguments_over_params() {
        let ast = lower(json!({ "type": "Program", "body": [
            { "type": "ExpressionStatement", "expression": {
                "type": "CallExpression",
                "callee": { "type": "Identifier", "name": "f" },
                "params": [{ "type": "Identifier", "name": "p" }],
                "arguments": [{ "type": "Identifier", "name": "a" }]
            }},
            { "type": "ExpressionStatement", "expression": {
                "type": "CallExpression",
                "callee": { "type": "Identifier", "name": "g" },
                "params": [{ "type": "Identifier", "name": "p" }]
            }},
            { "type": "ExpressionStatement", "expression": {
                "type": "CallExpression",
                "callee": { "type": "Identifier", "name": "h" }
            }}
        ]}));
        assert_eq!(
            statements(&ast),
            [
                "(ExpressionStatement (Call f [a]))",
                "(ExpressionStatement (Call g [p]))",
                "(ExpressionStatement (Call h []))",
            ]
        );
    }

    #[test]
    fn pipe_becomes_a_plain_call() {
        let ast = lower(json!({ "type": "Program", "body": [
            { "type": "ExpressionStatement", "expression": {
                "type": "PipeExpression",
                "callee": { "type": "Identifier", "name": "log" },
                "params": [
                    { "type": "Literal", "value": 1 },
                    { "type": "Literal", "value": 2 }
                ]
            }}
        ]}));
        assert_eq!(statements(&ast), ["(ExpressionStatement (Call log [1 2]))"]);
    }

    #[test]
    fn keyword_arguments_gather_into_a_leading_object() {
        let ast = lower(json!({ "type": "Program", "body": [
            { "type": "ExpressionStatement", "expression": {
                "type": "CallExpression",
                "callee": { "type": "Identifier", "name": "draw" },
                "arguments": [
                    { "type": "Identifier", "name": "shape" },
                    { "type": "AssignmentPattern",
                      "left": { "type": "Identifier", "name": "color" },
                      "right": { "type": "Literal", "value": "red" } },
                    { "type": "Literal", "value": 3 },
                    { "type": "AssignmentPattern",
                      "left": { "type": "Identifier", "name": "fill" },
                      "right": { "type": "Literal", "value": true } }
                ]
            }}
        ]}));
        assert_eq!(
            statements(&ast),
            [concat!(
                "(ExpressionStatement (Call draw [",
                "(ObjectExpression [(Property color \"red\") (Property fill true)]) ",
                "shape 3]))"
            )]
        );
    }
}

//! Parameter sugar.
//!
//! A function body may declare its inputs as statements, positional
//! (`ArgumentDeclaration`) or named (`ParamDeclaration`), each with an
//! optional default. Each declaration is removed from the body and turned
//! into a parameter of the nearest enclosing arrow function. Named
//! parameters share one object pattern in the first parameter slot.
//!
//! The body is walked before the parameter list and its statements are
//! walked last to first, so prepending keeps the parameters in declaration
//! order.

use cb_ast::{Ast, Kind, Loc, NodeId};

use crate::build;
use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

struct Declared {
    kind: &'static str,
    name: String,
    default: Option<NodeId>,
    loc: Loc,
}

/// Positional declaration → leading parameter `x` or `x = d`.
pub(crate) fn positional_argument(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let Some(decl) = declared(ast, path, |kind| match kind {
        Kind::ArgumentDeclaration { id, init, .. } => Some((id, *init)),
        _ => None,
    }) else {
        return Ok(false);
    };
    let function = enclosing_function(ast, path, &decl)?;
    detach(ast, path, &decl)?;

    let param = binding(ast, &decl);
    if let Kind::ArrowFunction { params, .. } = ast.kind_mut(function) {
        params.insert(0, param);
    }
    Ok(true)
}

/// Named declaration → `{ y }` or `{ y = d }` entry in the first parameter
/// slot.
pub(crate) fn named_parameter(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let Some(decl) = declared(ast, path, |kind| match kind {
        Kind::ParamDeclaration { id, init, .. } => Some((id, *init)),
        _ => None,
    }) else {
        return Ok(false);
    };
    let function = enclosing_function(ast, path, &decl)?;
    detach(ast, path, &decl)?;

    let pattern = leading_pattern(ast, function, decl.loc);
    let key = build::ident(ast, decl.loc, &decl.name);
    let value = binding(ast, &decl);
    let property = build::property(ast, decl.loc, key, value, true);
    if let Kind::ObjectPattern { properties } = ast.kind_mut(pattern) {
        properties.insert(0, property);
    }
    Ok(true)
}

fn declared(
    ast: &Ast,
    path: &Path<'_>,
    pick: impl Fn(&Kind) -> Option<(&String, Option<NodeId>)>,
) -> Option<Declared> {
    let kind = ast.kind(path.node());
    let (name, default) = pick(kind)?;
    Some(Declared {
        kind: kind.name(),
        name: name.clone(),
        default,
        loc: ast.loc(path.node()),
    })
}

fn enclosing_function(ast: &Ast, path: &Path<'_>, decl: &Declared) -> Result<NodeId, RuleError> {
    path.enclosing(ast, |kind| matches!(kind, Kind::ArrowFunction { .. }))
        .ok_or_else(|| RuleError::NoEnclosingFunction {
            kind: decl.kind,
            name: decl.name.clone(),
        })
}

fn detach(ast: &mut Ast, path: &Path<'_>, decl: &Declared) -> Result<(), RuleError> {
    let (siblings, index) = path
        .siblings_mut(ast)
        .ok_or_else(|| RuleError::NotInSequence {
            kind: decl.kind,
            name: decl.name.clone(),
        })?;
    siblings.remove(index);
    Ok(())
}

/// `name`, or `name = default`.
fn binding(ast: &mut Ast, decl: &Declared) -> NodeId {
    let name = build::ident(ast, decl.loc, &decl.name);
    match decl.default {
        Some(right) => ast.alloc(Kind::AssignmentPattern { left: name, right }, decl.loc),
        None => name,
    }
}

/// The object pattern in `function`'s first parameter slot, inserted empty
/// if that slot holds anything else.
fn leading_pattern(ast: &mut Ast, function: NodeId, loc: Loc) -> NodeId {
    let first = match ast.kind(function) {
        Kind::ArrowFunction { params, .. } => params.first().copied(),
        _ => None,
    };
    if let Some(first) = first.filter(|&id| matches!(ast.kind(id), Kind::ObjectPattern { .. })) {
        return first;
    }
    let pattern = ast.alloc(
        Kind::ObjectPattern {
            properties: Vec::new(),
        },
        loc,
    );
    if let Kind::ArrowFunction { params, .. } = ast.kind_mut(function) {
        params.insert(0, pattern);
    }
    pattern
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::testing::{lower, statements, try_lower};

    fn decl(tag: &str, name: &str, default: Option<Value>) -> Value {
        let mut decl = json!({ "type": tag, "id": name });
        if let Some(default) = default {
            decl["init"] = default;
        }
        decl
    }

    fn function(body: Vec<Value>) -> Value {
        json!({ "type": "Program", "body": [
            { "type": "VariableDeclaration", "typing": "function", "id": "f",
              "init": { "type": "Block", "body": body } }
        ]})
    }

    fn ret(name: &str) -> Value {
        json!({ "type": "ReturnStatement", "argument": { "type": "Identifier", "name": name } })
    }

    #[test]
    fn positional_parameters_keep_declaration_order() {
        let ast = lower(function(vec![
            decl("ArgumentDeclaration", "x", None),
            decl("ArgumentDeclaration", "y", Some(json!({ "type": "Literal", "value": 2 }))),
            ret("x"),
        ]));
        assert_eq!(
            statements(&ast),
            [concat!(
                "(VariableDeclaration let [(VariableDeclarator f (ArrowFunction ",
                "[x (AssignmentPattern y 2)] (BlockStatement [(ReturnStatement x)])))])"
            )]
        );
    }

    #[test]
    fn named_parameters_share_one_leading_pattern() {
        let ast = lower(function(vec![
            decl("ArgumentDeclaration", "a", None),
            decl("ParamDeclaration", "x", None),
            decl("ParamDeclaration", "y", Some(json!({ "type": "Literal", "value": true }))),
            ret("a"),
        ]));
        assert_eq!(
            statements(&ast),
            [concat!(
                "(VariableDeclaration let [(VariableDeclarator f (ArrowFunction ",
                "[a (ObjectPattern [(Property shorthand x x) ",
                "(Property shorthand y (AssignmentPattern y true))])] ",
                "(BlockStatement [(ReturnStatement a)])))])"
            )]
        );
    }

    #[test]
    fn named_parameter_goes_in_front_of_existing_parameters() {
        let ast = lower(json!({ "type": "Program", "body": [
            { "type": "VariableDeclaration", "id": "f", "init": {
                "type": "FunctionExpression",
                "params": [{ "type": "Identifier", "name": "a" }],
                "body": { "type": "Block", "body": [decl("ParamDeclaration", "x", None)] } } }
        ]}));
        assert_eq!(
            statements(&ast),
            [concat!(
                "(VariableDeclaration let [(VariableDeclarator f (ArrowFunction ",
                "[(ObjectPattern [(Property shorthand x x)]) a] (BlockStatement [])))])"
            )]
        );
    }

    #[test]
    fn declaration_outside_a_statement_list_is_rejected() {
        let err = try_lower(function(vec![json!({
            "type": "IfStatement",
            "test": { "type": "Identifier", "name": "ok" },
            "then": { "type": "ParamDeclaration", "id": "x", "loc": { "ln": 4, "col": 2 } }
        })]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[4:2] ParamDeclaration `x` must appear directly inside a statement list"
        );
    }

    #[test]
    fn declaration_outside_a_function_is_rejected() {
        let err = try_lower(json!({ "type": "Program", "body": [
            { "type": "ArgumentDeclaration", "id": "x", "loc": { "ln": 3, "col": 1 } }
        ]}))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[3:1] ArgumentDeclaration `x` is not inside a function"
        );
    }
}

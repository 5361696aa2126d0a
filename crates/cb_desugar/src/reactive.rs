//! Reactive variables.
//!
//! A reactive declaration `x = init` with change callback `cb` is lowered in
//! two stages. During the walk the declaration becomes
//!
//! ```js
//! $.x = init;
//! $$.x = cb;
//! ```
//!
//! and `x` is recorded in the session. Once the walk is over, [`finalize`]
//! routes every remaining reference to a recorded name through the store,
//! declares both containers at the top of the program, and re-binds the
//! store to a proxy that calls `$$[p](old, new)` after each write.
//!
//! `$` and `$$` are the default names; see [`cb_ast::LowerOptions`].

use std::collections::HashSet;

use cb_ast::{Ast, Field, Kind, Loc, NodeId, Slot};

use crate::build;
use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

/// Every run starts with an empty registry.
pub(crate) fn reset_registry(
    ast: &mut Ast,
    session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    if matches!(ast.kind(path.node()), Kind::Program { .. }) {
        session.reset_registry();
    }
    Ok(false)
}

pub(crate) fn reactive_declaration(
    ast: &mut Ast,
    session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let node = path.node();
    let Kind::ReactiveDeclaration {
        id, init, callback, ..
    } = ast.kind(node)
    else {
        return Ok(false);
    };
    let (name, init, callback) = (id.clone(), *init, *callback);
    let callback = callback.ok_or_else(|| RuleError::MissingCallback { name: name.clone() })?;
    if !path.in_sequence() {
        return Err(RuleError::NotInSequence {
            kind: "ReactiveDeclaration",
            name,
        });
    }

    let loc = ast.loc(node);
    let options = session.options().clone();

    let value = match init {
        Some(init) => init,
        None => build::ident(ast, loc, "undefined"),
    };
    let slot = build::static_member(ast, loc, &options.store, &name);
    let store_write = build::assign(ast, loc, slot, value);
    ast.replace(
        node,
        Kind::ExpressionStatement {
            expression: store_write,
        },
    );

    let handler = build::static_member(ast, loc, &options.callbacks, &name);
    let register = build::assign(ast, loc, handler, callback);
    let register = build::expr_stmt(ast, loc, register);
    if let Some((siblings, index)) = path.siblings_mut(ast) {
        siblings.insert(index + 1, register);
    }

    session.mark_reactive(name);
    Ok(true)
}

/// Program-level rewrite run once after the walk, only when something was
/// declared reactive. Returns whether it changed the tree.
pub fn finalize(ast: &mut Ast, session: &Session) -> Result<bool, RuleError> {
    if !session.has_reactive() {
        return Ok(false);
    }
    let root = ast.root().ok_or(RuleError::EmptyTree)?;
    if !matches!(ast.kind(root), Kind::Program { .. }) {
        return Err(RuleError::NotAProgram {
            found: ast.kind(root).name(),
        });
    }
    let options = session.options();
    let loc = ast.loc(root);

    let routed = StoreRouting::new(session.reactive(), &options.store).route(ast, root);

    let empty = build::object(ast, loc, Vec::new());
    let store = build::let_decl(ast, loc, &options.store, empty);
    let empty = build::object(ast, loc, Vec::new());
    let callbacks = build::let_decl(ast, loc, &options.callbacks, empty);
    let proxy = proxy_rebinding(ast, loc, &options.store, &options.callbacks);

    if let Kind::Program { body } = ast.kind_mut(root) {
        body.splice(0..0, [store, callbacks]);
        body.push(proxy);
    }
    tracing::debug!(
        routed,
        names = session.reactive().len(),
        store = %options.store,
        "injected reactive store"
    );
    Ok(true)
}

/// `$ = new Proxy($, { set: (o, p, v) => { let c = o[p]; o[p] = v; $$[p](c, v); return true; } });`
fn proxy_rebinding(ast: &mut Ast, loc: Loc, store: &str, callbacks: &str) -> NodeId {
    let ident = |ast: &mut Ast, name: &str| build::ident(ast, loc, name);

    // let c = o[p];
    let (o, p) = (ident(ast, "o"), ident(ast, "p"));
    let previous = build::index(ast, loc, o, p);
    let save = build::let_decl(ast, loc, "c", previous);

    // o[p] = v;
    let (o, p, v) = (ident(ast, "o"), ident(ast, "p"), ident(ast, "v"));
    let slot = build::index(ast, loc, o, p);
    let write = build::assign(ast, loc, slot, v);
    let write = build::expr_stmt(ast, loc, write);

    // $$[p](c, v);
    let (handlers, p) = (ident(ast, callbacks), ident(ast, "p"));
    let handler = build::index(ast, loc, handlers, p);
    let (c, v) = (ident(ast, "c"), ident(ast, "v"));
    let notify = build::call(ast, loc, handler, vec![c, v]);
    let notify = build::expr_stmt(ast, loc, notify);

    // return true;
    let yes = build::bool_lit(ast, loc, true);
    let accept = ast.alloc(Kind::ReturnStatement { argument: Some(yes) }, loc);

    let trap_body = build::block(ast, loc, vec![save, write, notify, accept]);
    let params = vec![ident(ast, "o"), ident(ast, "p"), ident(ast, "v")];
    let trap = build::arrow(ast, loc, params, trap_body);
    let key = ident(ast, "set");
    let set = build::property(ast, loc, key, trap, false);
    let handler = build::object(ast, loc, vec![set]);

    let proxy = ident(ast, "Proxy");
    let target = ident(ast, store);
    let wrapped = ast.alloc(
        Kind::New {
            callee: proxy,
            arguments: vec![target, handler],
        },
        loc,
    );
    let rebind_target = ident(ast, store);
    let rebind = build::assign(ast, loc, rebind_target, wrapped);
    build::expr_stmt(ast, loc, rebind)
}

/// Rewrites references to reactive names into `store.name`.
///
/// Binding positions (declarator ids, parameters, catch parameters and
/// pattern targets), non-computed member properties, property keys and
/// statement labels name things rather than read them, and are left alone.
pub struct StoreRouting<'a> {
    names: &'a HashSet<String>,
    store: &'a str,
    routed: usize,
}

impl<'a> StoreRouting<'a> {
    pub fn new(names: &'a HashSet<String>, store: &'a str) -> Self {
        Self {
            names,
            store,
            routed: 0,
        }
    }

    /// Rewrite the subtree at `id`; returns the number of references routed.
    pub fn route(mut self, ast: &mut Ast, id: NodeId) -> usize {
        self.visit(ast, id);
        self.routed
    }

    fn visit(&mut self, ast: &mut Ast, id: NodeId) {
        let kind = ast.kind(id);
        if let Kind::Identifier { name } = kind {
            if self.names.contains(name) {
                let name = name.clone();
                let loc = ast.loc(id);
                let object = build::ident(ast, loc, self.store);
                let member = build::member_kind(ast, loc, object, &name);
                ast.replace(id, member);
                self.routed += 1;
            }
            return;
        }

        let mut reads = Vec::new();
        let mut binds = Vec::new();
        for &field in kind.fields() {
            let children: Vec<NodeId> = match kind.slot(field) {
                Some(Slot::One(Some(child))) => vec![child],
                Some(Slot::Many(children)) => children.to_vec(),
                Some(Slot::One(None)) | None => continue,
            };
            match position(kind, field) {
                Position::Read => reads.extend(children),
                Position::Bind => binds.extend(children),
                Position::Name => {}
            }
        }
        for child in reads {
            self.visit(ast, child);
        }
        for child in binds {
            self.visit_binding(ast, child);
        }
    }

    /// Walk a binding target: names stay, default values are reads.
    fn visit_binding(&mut self, ast: &mut Ast, id: NodeId) {
        match ast.kind(id) {
            Kind::Identifier { .. } => {}
            &Kind::AssignmentPattern { left, right } => {
                self.visit_binding(ast, left);
                self.visit(ast, right);
            }
            Kind::ObjectPattern { properties } => {
                for property in properties.clone() {
                    self.visit_binding(ast, property);
                }
            }
            &Kind::Property { value, .. } => self.visit_binding(ast, value),
            _ => self.visit(ast, id),
        }
    }
}

enum Position {
    Read,
    Bind,
    Name,
}

fn position(kind: &Kind, field: Field) -> Position {
    match (kind, field) {
        (Kind::VariableDeclarator { .. }, Field::Id)
        | (Kind::ArrowFunction { .. }, Field::Params)
        | (Kind::CatchClause { .. }, Field::Param)
        | (Kind::AssignmentPattern { .. }, Field::Left) => Position::Bind,
        (Kind::Member {
            computed: false, ..
        }, Field::Property)
        | (Kind::Property { .. }, Field::Key)
        | (Kind::BreakStatement { .. }, Field::Label)
        | (Kind::ContinueStatement { .. }, Field::Label) => Position::Name,
        (Kind::ObjectPattern { .. }, Field::Properties) => Position::Bind,
        _ => Position::Read,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use cb_ast::{LitValue, LowerOptions};

    use super::*;
    use crate::testing::{lower, lower_with, statements, try_lower};

    fn is_true(ast: &Ast, id: NodeId) -> bool {
        matches!(
            ast.kind(id),
            Kind::Literal {
                value: LitValue::Bool(true)
            }
        )
    }

    fn ident(name: &str) -> Value {
        json!({ "type": "Identifier", "name": name })
    }

    fn stmt(expression: Value) -> Value {
        json!({ "type": "ExpressionStatement", "expression": expression })
    }

    fn reactive(name: &str, init: i64, callback: &str) -> Value {
        json!({
            "type": "ReactiveVariableDeclaration",
            "id": name,
            "init": { "type": "Literal", "value": init },
            "callback": ident(callback)
        })
    }

    const PROXY: &str = concat!(
        "(ExpressionStatement (Assignment = $ (New Proxy [$ (ObjectExpression [(Property set ",
        "(ArrowFunction [o p v] (BlockStatement [",
        "(VariableDeclaration let [(VariableDeclarator c (Member computed o p))]) ",
        "(ExpressionStatement (Assignment = (Member computed o p) v)) ",
        "(ExpressionStatement (Call (Member computed $$ p) [c v])) ",
        "(ReturnStatement true)])))])])))"
    );

    #[test]
    fn declaration_lowers_to_store_and_callback_writes() {
        let ast = lower(json!({ "type": "Program", "body": [
            reactive("x", 1, "cb"),
            stmt(json!({ "type": "CallExpression",
                         "callee": ident("log"), "arguments": [ident("x")] }))
        ]}));
        assert_eq!(
            statements(&ast),
            [
                "(VariableDeclaration let [(VariableDeclarator $ (ObjectExpression []))])",
                "(VariableDeclaration let [(VariableDeclarator $$ (ObjectExpression []))])",
                "(ExpressionStatement (Assignment = (Member $ x) 1))",
                "(ExpressionStatement (Assignment = (Member $$ x) cb))",
                "(ExpressionStatement (Call log [(Member $ x)]))",
                PROXY,
            ]
        );
    }

    #[test]
    fn binding_positions_and_property_names_are_not_routed() {
        let ast = lower(json!({ "type": "Program", "body": [
            reactive("a", 1, "onA"),
            reactive("b", 2, "onB"),
            { "type": "VariableDeclaration", "typing": "function", "id": "f", "init": {
                "type": "Block", "body": [
                    { "type": "ArgumentDeclaration", "id": "a" },
                    { "type": "ReturnStatement", "argument": {
                        "type": "BinaryExpression", "operator": "+",
                        "left": { "type": "MemberExpression",
                                  "object": ident("obj"), "property": ident("b") },
                        "right": { "type": "MemberExpression", "computed": true,
                                   "object": ident("obj"), "property": ident("b") }
                    }}
                ]
            }},
            stmt(json!({ "type": "ObjectExpression", "properties": [
                { "type": "Property", "key": ident("a"), "value": ident("b") }
            ]}))
        ]}));

        let body = statements(&ast);
        assert_eq!(
            body[6],
            concat!(
                "(VariableDeclaration let [(VariableDeclarator f (ArrowFunction [a] ",
                "(BlockStatement [(ReturnStatement (Binary + (Member obj b) ",
                "(Member computed obj (Member $ b))))])))])"
            )
        );
        assert_eq!(
            body[7],
            "(ExpressionStatement (ObjectExpression [(Property a (Member $ b))]))"
        );
    }

    #[test]
    fn no_bare_reference_survives_outside_the_injected_code() {
        let ast = lower(json!({ "type": "Program", "body": [
            reactive("a", 1, "onA"),
            reactive("b", 2, "onB"),
            stmt(json!({ "type": "AssignmentExpression", "operator": "=",
                         "left": ident("a"), "right": ident("b") })),
            { "type": "IfStatement", "test": ident("a"), "then": {
                "type": "Block", "body": [stmt(ident("b"))]
            }}
        ]}));
        let root = ast.root().unwrap();
        let property_names: Vec<NodeId> = ast
            .descendants(root)
            .into_iter()
            .filter(|&id| matches!(ast.kind(id), Kind::Member { computed: false, .. }))
            .map(|id| match ast.kind(id) {
                Kind::Member { property, .. } => *property,
                _ => unreachable!(),
            })
            .collect();
        let bare = ast
            .descendants(root)
            .into_iter()
            .filter(|id| !property_names.contains(id))
            .filter(|&id| {
                matches!(ast.kind(id), Kind::Identifier { name } if name == "a" || name == "b")
            })
            .count();
        assert_eq!(bare, 0);
    }

    #[test]
    fn container_names_follow_the_options() {
        let options = LowerOptions {
            store: "state".into(),
            callbacks: "watchers".into(),
        };
        let ast = lower_with(
            json!({ "type": "Program", "body": [reactive("n", 0, "changed")] }),
            &options,
        );
        let body = statements(&ast);
        assert_eq!(
            &body[..4],
            [
                "(VariableDeclaration let [(VariableDeclarator state (ObjectExpression []))])",
                "(VariableDeclaration let [(VariableDeclarator watchers (ObjectExpression []))])",
                "(ExpressionStatement (Assignment = (Member state n) 0))",
                "(ExpressionStatement (Assignment = (Member watchers n) changed))",
            ]
        );
        assert!(body[4].contains("(Member computed watchers p)"));
    }

    #[test]
    fn trap_reports_the_write_as_accepted() {
        let ast = lower(json!({ "type": "Program", "body": [reactive("x", 1, "cb")] }));
        let root = ast.root().unwrap();
        let accepted = ast.descendants(root).into_iter().any(|id| match ast.kind(id) {
            Kind::ReturnStatement { argument: Some(arg) } => is_true(&ast, *arg),
            _ => false,
        });
        assert!(accepted);
    }

    #[test]
    fn callback_is_required() {
        let err = try_lower(json!({ "type": "Program", "body": [
            { "type": "ReactiveVariableDeclaration", "id": "x",
              "loc": { "ln": 5, "col": 0 } }
        ]}))
        .unwrap_err();
        assert_eq!(err.to_string(), "[5:0] reactive variable `x` has no onchange callback");
    }

    #[test]
    fn declaration_must_sit_in_a_statement_list() {
        let err = try_lower(json!({ "type": "Program", "body": [
            { "type": "IfStatement", "test": ident("ready"),
              "then": { "type": "ReactiveVariableDeclaration", "id": "x",
                        "callback": ident("cb"), "loc": { "ln": 6, "col": 2 } } }
        ]}))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[6:2] ReactiveDeclaration `x` must appear directly inside a statement list"
        );
    }

    #[test]
    fn program_without_reactive_names_is_untouched() {
        let ast = lower(json!({ "type": "Program", "body": [stmt(ident("x"))] }));
        assert_eq!(statements(&ast), ["(ExpressionStatement x)"]);
    }
}

//! Whole-pipeline properties of the desugarer, checked through the public API.

use std::collections::HashSet;

use cb_ast::{Ast, Input, Kind, Loc, LowerOptions, NodeId};
use cb_desugar::{desugar_program, RuleError};
use cb_emit::emit_script;
use serde_json::{json, Value};

fn load(value: Value) -> Ast {
    serde_json::from_value::<Input>(value)
        .expect("valid input tree")
        .into_ast()
}

fn lower(value: Value) -> Ast {
    lower_with(value, &LowerOptions::default())
}

fn lower_with(value: Value, options: &LowerOptions) -> Ast {
    let mut ast = load(value);
    desugar_program(&mut ast, options).expect("tree lowers");
    ast
}

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn stmt(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

fn reactive(name: &str, init: i64, callback: &str) -> Value {
    json!({ "type": "ReactiveVariableDeclaration", "id": name,
            "init": { "type": "Literal", "value": init }, "callback": ident(callback) })
}

fn program(body: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": body })
}

/// Identifiers reachable from the root, excluding names of non-computed
/// member properties.
fn bare_identifiers(ast: &Ast) -> Vec<String> {
    let root = ast.root().expect("tree has a root");
    let reachable = ast.descendants(root);
    let names: HashSet<NodeId> = reachable
        .iter()
        .filter_map(|&id| match ast.kind(id) {
            Kind::Member {
                property,
                computed: false,
                ..
            } => Some(*property),
            _ => None,
        })
        .collect();
    reachable
        .into_iter()
        .filter(|id| !names.contains(id))
        .filter_map(|id| match ast.kind(id) {
            Kind::Identifier { name } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

/// A program using every surface construct at least once.
fn busy_program() -> Value {
    program(vec![
        reactive("score", 0, "onScore"),
        json!({ "type": "VariableDeclaration", "typing": "function", "id": "bump",
                "init": { "type": "Block", "body": [
                    { "type": "ArgumentDeclaration", "id": "by",
                      "init": { "type": "Literal", "value": 1 } },
                    { "type": "ParamDeclaration", "id": "loud" },
                    { "type": "WhileStatement", "test": ident("loud"), "body": [
                        stmt(json!({ "type": "UnaryExpression", "operator": "--",
                                     "argument": ident("loud") }))
                    ]},
                    { "type": "TryStatement", "id": "e",
                      "body": [stmt(json!({ "type": "PipeExpression", "callee": ident("save"),
                                            "params": [ident("score")] }))],
                      "handler": [stmt(json!({ "type": "ConcatExpression",
                                               "expressions": [ident("e"), ident("by")] }))] },
                    { "type": "ReturnStatement", "argument": {
                        "type": "AssignmentExpression", "operator": "+=",
                        "left": ident("score"), "right": ident("by") } }
                ]}
        }),
        json!({ "type": "VariableDeclaration", "id": "WORD",
                "init": { "type": "RegExp", "value": "/\\w+/" } }),
        stmt(json!({ "type": "AsyncExpression", "operator": "&|", "expressions": [
            { "type": "AsyncExpression", "operator": "&?",
              "expressions": [ident("a"), ident("b"), ident("c")] },
            { "type": "CallExpression", "callee": ident("bump"), "params": [
                { "type": "AssignmentPattern", "left": ident("loud"),
                  "right": { "type": "Literal", "value": false } }
            ]},
            { "type": "FunctionExpression", "params": [ident("r")],
              "body": { "type": "Block", "body": [stmt(ident("r"))] } }
        ]})),
    ])
}

#[test]
fn no_surface_tag_survives_lowering() {
    let ast = lower(busy_program());
    assert_eq!(ast.first_surface(), None);
}

#[test]
fn lowering_is_idempotent() {
    let mut ast = lower(busy_program());
    let once = ast.clone();
    let report = desugar_program(&mut ast, &LowerOptions::default()).unwrap();
    assert_eq!(report.stats.rewrites, 0);
    assert_eq!(ast, once);
}

#[test]
fn lowering_is_deterministic() {
    let first = emit_script(&lower(busy_program())).unwrap();
    let second = emit_script(&lower(busy_program())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reactive_names_are_never_referenced_bare() {
    let ast = lower(program(vec![
        reactive("a", 1, "onA"),
        reactive("b", 2, "onB"),
        stmt(json!({ "type": "BinaryExpression", "operator": "+",
                     "left": ident("a"), "right": ident("b") })),
        stmt(json!({ "type": "AssignmentExpression", "operator": "=",
                     "left": ident("a"), "right": ident("b") })),
        stmt(json!({ "type": "CallExpression", "callee": ident("show"),
                     "arguments": [ident("a"), { "type": "ArrayExpression",
                                                 "elements": [ident("b")] }] })),
    ]));

    let bare = bare_identifiers(&ast);
    assert!(!bare.iter().any(|n| n == "a" || n == "b"), "{bare:?}");
}

#[test]
fn custom_container_names_flow_into_output() {
    let options = LowerOptions {
        store: "state".into(),
        callbacks: "watchers".into(),
    };
    let ast = lower_with(
        program(vec![reactive("x", 1, "cb"), stmt(ident("x"))]),
        &options,
    );
    let js = emit_script(&ast).unwrap();
    assert!(js.contains("let state = {}"), "{js}");
    assert!(js.contains("let watchers = {}"), "{js}");
    assert!(js.contains("state.x = 1"), "{js}");
    assert!(js.contains("watchers.x = cb"), "{js}");
    assert!(!js.contains('$'), "{js}");
}

#[test]
fn then_chains_nest_to_the_left() {
    let ast = lower(program(vec![stmt(json!({
        "type": "AsyncExpression", "operator": "&>",
        "expressions": [ident("e1"), ident("e2"), ident("e3"), ident("e4")]
    }))]));
    let root = ast.root().unwrap();
    let Kind::Program { body } = ast.kind(root) else {
        panic!("root is a program");
    };
    assert_eq!(
        ast.outline(body[0]),
        concat!(
            "(ExpressionStatement (Call (Member (Call (Member (Call (Member e1 then) ",
            "[(ArrowFunction [] e2)]) then) [(ArrowFunction [] e3)]) then) ",
            "[(ArrowFunction [] e4)]))"
        )
    );
}

#[test]
fn declared_parameters_keep_declaration_order() {
    let ast = lower(program(vec![json!({
        "type": "VariableDeclaration", "typing": "function", "id": "f",
        "init": { "type": "Block", "body": [
            { "type": "ArgumentDeclaration", "id": "x" },
            { "type": "ArgumentDeclaration", "id": "y" },
            { "type": "ArgumentDeclaration", "id": "z" }
        ]}
    })]));
    let js: String = emit_script(&ast)
        .unwrap()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    assert_eq!(js, "letf=(x,y,z)=>{};");
}

#[test]
fn errors_carry_the_failing_location() {
    let mut ast = load(program(vec![stmt(json!({
        "type": "AsyncExpression", "operator": "&", "loc": { "ln": 7, "col": 3 },
        "expressions": [ident("only")]
    }))]));
    let err = desugar_program(&mut ast, &LowerOptions::default()).unwrap_err();
    assert_eq!(err.loc, Loc::new(7, 3));
    assert!(matches!(err.source, RuleError::TooFewOperands { .. }));
}

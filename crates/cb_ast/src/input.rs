//! JSON tree format produced by the external cobalt parser.
//!
//! Every object carries a `"type"` tag naming its constructor, the
//! constructor's fields, and an optional `"loc": {"ln": .., "col": ..}`.
//! Surface constructors load into surface [`Kind`]s; the target-grammar
//! constructors the parser already emits load into target kinds directly.

use serde::Deserialize;

use crate::{AsyncOp, Ast, Kind, LitValue, Loc, NodeId};

/// One node of the parser's output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Input {
    #[serde(flatten)]
    pub kind: InputKind,
    /// Absent on nodes the parser synthesised; they take their parent's.
    #[serde(default)]
    pub loc: Option<Loc>,
}

type Child = Box<Input>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum InputKind {
    Program {
        body: Vec<Input>,
    },
    Identifier {
        name: String,
    },
    Literal {
        #[serde(default)]
        value: LitValue,
    },
    RegExp {
        value: String,
    },
    Block {
        body: Vec<Input>,
    },
    BlockStatement {
        body: Vec<Input>,
    },
    IfStatement {
        test: Child,
        then: Child,
        #[serde(default)]
        otherwise: Option<Child>,
    },
    WhileStatement {
        test: Child,
        body: Vec<Input>,
    },
    TryStatement {
        body: Vec<Input>,
        id: String,
        handler: Vec<Input>,
    },
    SwitchStatement {
        test: Child,
        cases: Vec<Input>,
    },
    SwitchCase {
        #[serde(default)]
        test: Option<Child>,
        then: Vec<Input>,
    },
    ExpressionStatement {
        expression: Child,
    },
    ReturnStatement {
        #[serde(default)]
        argument: Option<Child>,
    },
    ContinueStatement {
        #[serde(default)]
        argument: Option<Child>,
    },
    BreakStatement {
        #[serde(default)]
        argument: Option<Child>,
    },
    ThrowStatement {
        argument: Child,
    },
    VariableDeclaration {
        #[serde(default)]
        typing: Option<String>,
        id: String,
        #[serde(default)]
        init: Option<Child>,
    },
    ParamDeclaration {
        #[serde(default)]
        typing: Option<String>,
        id: String,
        #[serde(default)]
        init: Option<Child>,
    },
    ArgumentDeclaration {
        #[serde(default)]
        typing: Option<String>,
        id: String,
        #[serde(default)]
        init: Option<Child>,
    },
    ReactiveVariableDeclaration {
        #[serde(default)]
        typing: Option<String>,
        id: String,
        #[serde(default)]
        init: Option<Child>,
        #[serde(default)]
        callback: Option<Child>,
    },
    ArrayExpression {
        elements: Vec<Input>,
    },
    ObjectExpression {
        properties: Vec<Input>,
    },
    Property {
        key: Child,
        value: Child,
    },
    FunctionExpression {
        #[serde(default)]
        params: Vec<Input>,
        body: Child,
    },
    UnaryExpression {
        operator: String,
        argument: Child,
        #[serde(default = "prefix_default")]
        prefix: bool,
    },
    BinaryExpression {
        operator: String,
        left: Child,
        right: Child,
    },
    AssignmentExpression {
        operator: String,
        left: Child,
        right: Child,
    },
    LogicalExpression {
        operator: String,
        left: Child,
        right: Child,
    },
    MemberExpression {
        object: Child,
        property: Child,
        #[serde(default)]
        computed: bool,
    },
    ConditionalExpression {
        test: Child,
        then: Child,
        otherwise: Child,
    },
    CallExpression {
        callee: Child,
        #[serde(default)]
        params: Option<Vec<Input>>,
        #[serde(default)]
        arguments: Option<Vec<Input>>,
    },
    PipeExpression {
        callee: Child,
        params: Vec<Input>,
    },
    NewExpression {
        callee: Child,
        #[serde(default)]
        arguments: Vec<Input>,
    },
    AsyncExpression {
        operator: AsyncOp,
        expressions: Vec<Input>,
    },
    ConcatExpression {
        expressions: Vec<Input>,
    },
    SpreadElement {
        argument: Child,
    },
    AssignmentPattern {
        left: Child,
        right: Child,
    },
}

fn prefix_default() -> bool {
    true
}

impl Input {
    /// Allocate this tree into a fresh arena rooted at it.
    pub fn into_ast(self) -> Ast {
        let mut ast = Ast::new();
        let root = self.load(&mut ast, Loc::default());
        ast.set_root(root);
        ast
    }

    fn load(self, ast: &mut Ast, parent: Loc) -> NodeId {
        let loc = self.loc.unwrap_or(parent);
        let many = |ast: &mut Ast, items: Vec<Input>| -> Vec<NodeId> {
            items.into_iter().map(|item| item.load(ast, loc)).collect()
        };
        let one = |ast: &mut Ast, item: Child| -> NodeId { item.load(ast, loc) };
        let opt = |ast: &mut Ast, item: Option<Child>| -> Option<NodeId> {
            item.map(|item| item.load(ast, loc))
        };

        let kind = match self.kind {
            InputKind::Program { body } => Kind::Program {
                body: many(ast, body),
            },
            InputKind::Identifier { name } => Kind::Identifier { name },
            InputKind::Literal { value } => Kind::Literal { value },
            InputKind::RegExp { value } => Kind::RegExp { value },
            InputKind::Block { body } => Kind::Block {
                body: many(ast, body),
            },
            InputKind::BlockStatement { body } => Kind::BlockStatement {
                body: many(ast, body),
            },
            InputKind::IfStatement {
                test,
                then,
                otherwise,
            } => Kind::IfStatement {
                test: one(ast, test),
                consequent: one(ast, then),
                alternate: opt(ast, otherwise),
            },
            InputKind::WhileStatement { test, body } => Kind::While {
                test: one(ast, test),
                body: many(ast, body),
            },
            InputKind::TryStatement { body, id, handler } => Kind::Try {
                body: many(ast, body),
                id,
                handler: many(ast, handler),
            },
            InputKind::SwitchStatement { test, cases } => Kind::SwitchStatement {
                discriminant: one(ast, test),
                cases: many(ast, cases),
            },
            InputKind::SwitchCase { test, then } => Kind::SwitchCase {
                test: opt(ast, test),
                consequent: many(ast, then),
            },
            InputKind::ExpressionStatement { expression } => Kind::ExpressionStatement {
                expression: one(ast, expression),
            },
            InputKind::ReturnStatement { argument } => Kind::ReturnStatement {
                argument: opt(ast, argument),
            },
            InputKind::ContinueStatement { argument } => Kind::ContinueStatement {
                label: opt(ast, argument),
            },
            InputKind::BreakStatement { argument } => Kind::BreakStatement {
                label: opt(ast, argument),
            },
            InputKind::ThrowStatement { argument } => Kind::ThrowStatement {
                argument: one(ast, argument),
            },
            InputKind::VariableDeclaration { typing, id, init } => Kind::TypedDeclaration {
                typing,
                id,
                init: opt(ast, init),
            },
            InputKind::ParamDeclaration { typing, id, init } => Kind::ParamDeclaration {
                typing,
                id,
                init: opt(ast, init),
            },
            InputKind::ArgumentDeclaration { typing, id, init } => Kind::ArgumentDeclaration {
                typing,
                id,
                init: opt(ast, init),
            },
            InputKind::ReactiveVariableDeclaration {
                typing,
                id,
                init,
                callback,
            } => Kind::ReactiveDeclaration {
                typing,
                id,
                init: opt(ast, init),
                callback: opt(ast, callback),
            },
            InputKind::ArrayExpression { elements } => Kind::ArrayExpression {
                elements: many(ast, elements),
            },
            InputKind::ObjectExpression { properties } => Kind::ObjectExpression {
                properties: many(ast, properties),
            },
            InputKind::Property { key, value } => Kind::Property {
                key: one(ast, key),
                value: one(ast, value),
                shorthand: false,
            },
            InputKind::FunctionExpression { params, body } => Kind::FunctionExpression {
                params: many(ast, params),
                body: one(ast, body),
            },
            InputKind::UnaryExpression {
                operator,
                argument,
                prefix,
            } => Kind::PrefixOp {
                operator,
                argument: one(ast, argument),
                prefix,
            },
            InputKind::BinaryExpression {
                operator,
                left,
                right,
            } => Kind::Binary {
                operator,
                left: one(ast, left),
                right: one(ast, right),
            },
            InputKind::AssignmentExpression {
                operator,
                left,
                right,
            } => Kind::Assignment {
                operator,
                left: one(ast, left),
                right: one(ast, right),
            },
            InputKind::LogicalExpression {
                operator,
                left,
                right,
            } => Kind::Logical {
                operator,
                left: one(ast, left),
                right: one(ast, right),
            },
            InputKind::MemberExpression {
                object,
                property,
                computed,
            } => Kind::Member {
                object: one(ast, object),
                property: one(ast, property),
                computed,
            },
            InputKind::ConditionalExpression {
                test,
                then,
                otherwise,
            } => Kind::Conditional {
                test: one(ast, test),
                consequent: one(ast, then),
                alternate: one(ast, otherwise),
            },
            InputKind::CallExpression {
                callee,
                params,
                arguments,
            } => Kind::RawCall {
                callee: one(ast, callee),
                params: params.map(|params| many(ast, params)),
                arguments: arguments.map(|arguments| many(ast, arguments)),
            },
            InputKind::PipeExpression { callee, params } => Kind::Pipe {
                callee: one(ast, callee),
                params: many(ast, params),
            },
            InputKind::NewExpression { callee, arguments } => Kind::New {
                callee: one(ast, callee),
                arguments: many(ast, arguments),
            },
            InputKind::AsyncExpression {
                operator,
                expressions,
            } => Kind::Async {
                operator,
                expressions: many(ast, expressions),
            },
            InputKind::ConcatExpression { expressions } => Kind::Concat {
                expressions: many(ast, expressions),
            },
            InputKind::SpreadElement { argument } => Kind::Spread {
                argument: one(ast, argument),
            },
            InputKind::AssignmentPattern { left, right } => Kind::AssignmentPattern {
                left: one(ast, left),
                right: one(ast, right),
            },
        };
        ast.alloc(kind, loc)
    }
}

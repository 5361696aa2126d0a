//! The closed set of node variants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AsyncOp, NodeId};

/// Binding mode of a target variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    Let,
    Const,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::Let => write!(f, "let"),
            BindingKind::Const => write!(f, "const"),
        }
    }
}

/// Primitive literal value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LitValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// Name of a child slot on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Alternate,
    Argument,
    Arguments,
    Block,
    Body,
    Callback,
    Callee,
    Cases,
    Consequent,
    Declarations,
    Discriminant,
    Elements,
    Expression,
    Expressions,
    Handler,
    Id,
    Init,
    Key,
    Label,
    Left,
    Object,
    Param,
    Params,
    Properties,
    Property,
    Quasis,
    Right,
    Test,
    Value,
}

/// Borrowed view of one child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// A single child, absent when the field is optional and unset.
    One(Option<NodeId>),
    /// An ordered sequence of children.
    Many(&'a [NodeId]),
}

/// A node variant.
///
/// The first group is the ECMAScript target grammar; everything from
/// [`Kind::RegExp`] on is cobalt surface syntax that must be rewritten away
/// before printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Kind {
    Program {
        body: Vec<NodeId>,
    },
    Identifier {
        name: String,
    },
    Literal {
        value: LitValue,
    },
    RegexLiteral {
        pattern: String,
        flags: String,
    },
    BlockStatement {
        body: Vec<NodeId>,
    },
    ExpressionStatement {
        expression: NodeId,
    },
    IfStatement {
        test: NodeId,
        consequent: NodeId,
        alternate: Option<NodeId>,
    },
    WhileStatement {
        test: NodeId,
        body: NodeId,
    },
    TryStatement {
        block: NodeId,
        handler: NodeId,
    },
    CatchClause {
        param: NodeId,
        body: NodeId,
    },
    SwitchStatement {
        discriminant: NodeId,
        cases: Vec<NodeId>,
    },
    SwitchCase {
        test: Option<NodeId>,
        consequent: Vec<NodeId>,
    },
    ReturnStatement {
        argument: Option<NodeId>,
    },
    BreakStatement {
        label: Option<NodeId>,
    },
    ContinueStatement {
        label: Option<NodeId>,
    },
    ThrowStatement {
        argument: NodeId,
    },
    VariableDeclaration {
        kind: BindingKind,
        declarations: Vec<NodeId>,
    },
    VariableDeclarator {
        id: NodeId,
        init: Option<NodeId>,
    },
    ArrayExpression {
        elements: Vec<NodeId>,
    },
    ObjectExpression {
        properties: Vec<NodeId>,
    },
    ObjectPattern {
        properties: Vec<NodeId>,
    },
    Property {
        key: NodeId,
        value: NodeId,
        shorthand: bool,
    },
    AssignmentPattern {
        left: NodeId,
        right: NodeId,
    },
    ArrowFunction {
        params: Vec<NodeId>,
        body: NodeId,
    },
    Unary {
        operator: String,
        argument: NodeId,
    },
    Update {
        operator: String,
        argument: NodeId,
        prefix: bool,
    },
    Binary {
        operator: String,
        left: NodeId,
        right: NodeId,
    },
    Logical {
        operator: String,
        left: NodeId,
        right: NodeId,
    },
    Assignment {
        operator: String,
        left: NodeId,
        right: NodeId,
    },
    Member {
        object: NodeId,
        property: NodeId,
        computed: bool,
    },
    Conditional {
        test: NodeId,
        consequent: NodeId,
        alternate: NodeId,
    },
    Call {
        callee: NodeId,
        arguments: Vec<NodeId>,
    },
    New {
        callee: NodeId,
        arguments: Vec<NodeId>,
    },
    TemplateLiteral {
        quasis: Vec<NodeId>,
        expressions: Vec<NodeId>,
    },
    TemplateElement {
        raw: String,
        tail: bool,
    },
    Spread {
        argument: NodeId,
    },

    // cobalt surface syntax
    RegExp {
        value: String,
    },
    TypedDeclaration {
        typing: Option<String>,
        id: String,
        init: Option<NodeId>,
    },
    Block {
        body: Vec<NodeId>,
    },
    While {
        test: NodeId,
        body: Vec<NodeId>,
    },
    Try {
        body: Vec<NodeId>,
        id: String,
        handler: Vec<NodeId>,
    },
    FunctionExpression {
        params: Vec<NodeId>,
        body: NodeId,
    },
    /// Call whose argument list arrives under either `params` or `arguments`.
    RawCall {
        callee: NodeId,
        params: Option<Vec<NodeId>>,
        arguments: Option<Vec<NodeId>>,
    },
    Pipe {
        callee: NodeId,
        params: Vec<NodeId>,
    },
    PrefixOp {
        operator: String,
        argument: NodeId,
        prefix: bool,
    },
    ArgumentDeclaration {
        typing: Option<String>,
        id: String,
        init: Option<NodeId>,
    },
    ParamDeclaration {
        typing: Option<String>,
        id: String,
        init: Option<NodeId>,
    },
    ReactiveDeclaration {
        typing: Option<String>,
        id: String,
        init: Option<NodeId>,
        callback: Option<NodeId>,
    },
    Async {
        operator: AsyncOp,
        expressions: Vec<NodeId>,
    },
    Concat {
        expressions: Vec<NodeId>,
    },
}

impl Kind {
    /// Tag name, used in diagnostics and outlines.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Program { .. } => "Program",
            Kind::Identifier { .. } => "Identifier",
            Kind::Literal { .. } => "Literal",
            Kind::RegexLiteral { .. } => "RegexLiteral",
            Kind::BlockStatement { .. } => "BlockStatement",
            Kind::ExpressionStatement { .. } => "ExpressionStatement",
            Kind::IfStatement { .. } => "IfStatement",
            Kind::WhileStatement { .. } => "WhileStatement",
            Kind::TryStatement { .. } => "TryStatement",
            Kind::CatchClause { .. } => "CatchClause",
            Kind::SwitchStatement { .. } => "SwitchStatement",
            Kind::SwitchCase { .. } => "SwitchCase",
            Kind::ReturnStatement { .. } => "ReturnStatement",
            Kind::BreakStatement { .. } => "BreakStatement",
            Kind::ContinueStatement { .. } => "ContinueStatement",
            Kind::ThrowStatement { .. } => "ThrowStatement",
            Kind::VariableDeclaration { .. } => "VariableDeclaration",
            Kind::VariableDeclarator { .. } => "VariableDeclarator",
            Kind::ArrayExpression { .. } => "ArrayExpression",
            Kind::ObjectExpression { .. } => "ObjectExpression",
            Kind::ObjectPattern { .. } => "ObjectPattern",
            Kind::Property { .. } => "Property",
            Kind::AssignmentPattern { .. } => "AssignmentPattern",
            Kind::ArrowFunction { .. } => "ArrowFunction",
            Kind::Unary { .. } => "Unary",
            Kind::Update { .. } => "Update",
            Kind::Binary { .. } => "Binary",
            Kind::Logical { .. } => "Logical",
            Kind::Assignment { .. } => "Assignment",
            Kind::Member { .. } => "Member",
            Kind::Conditional { .. } => "Conditional",
            Kind::Call { .. } => "Call",
            Kind::New { .. } => "New",
            Kind::TemplateLiteral { .. } => "TemplateLiteral",
            Kind::TemplateElement { .. } => "TemplateElement",
            Kind::Spread { .. } => "Spread",
            Kind::RegExp { .. } => "RegExp",
            Kind::TypedDeclaration { .. } => "TypedDeclaration",
            Kind::Block { .. } => "Block",
            Kind::While { .. } => "While",
            Kind::Try { .. } => "Try",
            Kind::FunctionExpression { .. } => "FunctionExpression",
            Kind::RawCall { .. } => "RawCall",
            Kind::Pipe { .. } => "Pipe",
            Kind::PrefixOp { .. } => "PrefixOp",
            Kind::ArgumentDeclaration { .. } => "ArgumentDeclaration",
            Kind::ParamDeclaration { .. } => "ParamDeclaration",
            Kind::ReactiveDeclaration { .. } => "ReactiveDeclaration",
            Kind::Async { .. } => "Async",
            Kind::Concat { .. } => "Concat",
        }
    }

    /// True for cobalt-only variants that the printer cannot render.
    pub fn is_surface(&self) -> bool {
        match self {
            Kind::RegExp { .. }
            | Kind::TypedDeclaration { .. }
            | Kind::Block { .. }
            | Kind::While { .. }
            | Kind::Try { .. }
            | Kind::FunctionExpression { .. }
            | Kind::RawCall { .. }
            | Kind::Pipe { .. }
            | Kind::PrefixOp { .. }
            | Kind::ArgumentDeclaration { .. }
            | Kind::ParamDeclaration { .. }
            | Kind::ReactiveDeclaration { .. }
            | Kind::Async { .. }
            | Kind::Concat { .. } => true,
            Kind::Program { .. }
            | Kind::Identifier { .. }
            | Kind::Literal { .. }
            | Kind::RegexLiteral { .. }
            | Kind::BlockStatement { .. }
            | Kind::ExpressionStatement { .. }
            | Kind::IfStatement { .. }
            | Kind::WhileStatement { .. }
            | Kind::TryStatement { .. }
            | Kind::CatchClause { .. }
            | Kind::SwitchStatement { .. }
            | Kind::SwitchCase { .. }
            | Kind::ReturnStatement { .. }
            | Kind::BreakStatement { .. }
            | Kind::ContinueStatement { .. }
            | Kind::ThrowStatement { .. }
            | Kind::VariableDeclaration { .. }
            | Kind::VariableDeclarator { .. }
            | Kind::ArrayExpression { .. }
            | Kind::ObjectExpression { .. }
            | Kind::ObjectPattern { .. }
            | Kind::Property { .. }
            | Kind::AssignmentPattern { .. }
            | Kind::ArrowFunction { .. }
            | Kind::Unary { .. }
            | Kind::Update { .. }
            | Kind::Binary { .. }
            | Kind::Logical { .. }
            | Kind::Assignment { .. }
            | Kind::Member { .. }
            | Kind::Conditional { .. }
            | Kind::Call { .. }
            | Kind::New { .. }
            | Kind::TemplateLiteral { .. }
            | Kind::TemplateElement { .. }
            | Kind::Spread { .. } => false,
        }
    }

    /// Child fields in declaration order.
    pub fn fields(&self) -> &'static [Field] {
        use Field as F;
        match self {
            Kind::Identifier { .. }
            | Kind::Literal { .. }
            | Kind::RegexLiteral { .. }
            | Kind::TemplateElement { .. }
            | Kind::RegExp { .. } => &[],
            Kind::Program { .. } | Kind::BlockStatement { .. } | Kind::Block { .. } => &[F::Body],
            Kind::ExpressionStatement { .. } => &[F::Expression],
            Kind::IfStatement { .. } | Kind::Conditional { .. } => {
                &[F::Test, F::Consequent, F::Alternate]
            }
            Kind::WhileStatement { .. } | Kind::While { .. } => &[F::Test, F::Body],
            Kind::TryStatement { .. } => &[F::Block, F::Handler],
            Kind::CatchClause { .. } => &[F::Param, F::Body],
            Kind::SwitchStatement { .. } => &[F::Discriminant, F::Cases],
            Kind::SwitchCase { .. } => &[F::Test, F::Consequent],
            Kind::ReturnStatement { .. }
            | Kind::ThrowStatement { .. }
            | Kind::Unary { .. }
            | Kind::Update { .. }
            | Kind::Spread { .. }
            | Kind::PrefixOp { .. } => &[F::Argument],
            Kind::BreakStatement { .. } | Kind::ContinueStatement { .. } => &[F::Label],
            Kind::VariableDeclaration { .. } => &[F::Declarations],
            Kind::VariableDeclarator { .. } => &[F::Id, F::Init],
            Kind::ArrayExpression { .. } => &[F::Elements],
            Kind::ObjectExpression { .. } | Kind::ObjectPattern { .. } => &[F::Properties],
            Kind::Property { .. } => &[F::Key, F::Value],
            Kind::AssignmentPattern { .. }
            | Kind::Binary { .. }
            | Kind::Logical { .. }
            | Kind::Assignment { .. } => &[F::Left, F::Right],
            Kind::ArrowFunction { .. } | Kind::FunctionExpression { .. } => &[F::Params, F::Body],
            Kind::Member { .. } => &[F::Object, F::Property],
            Kind::Call { .. } | Kind::New { .. } => &[F::Callee, F::Arguments],
            Kind::TemplateLiteral { .. } => &[F::Quasis, F::Expressions],
            Kind::TypedDeclaration { .. }
            | Kind::ArgumentDeclaration { .. }
            | Kind::ParamDeclaration { .. } => &[F::Init],
            Kind::Try { .. } => &[F::Body, F::Handler],
            Kind::RawCall { .. } => &[F::Callee, F::Params, F::Arguments],
            Kind::Pipe { .. } => &[F::Callee, F::Params],
            Kind::ReactiveDeclaration { .. } => &[F::Init, F::Callback],
            Kind::Async { .. } | Kind::Concat { .. } => &[F::Expressions],
        }
    }

    /// The child slot named `field`, or `None` if this variant has no such field.
    pub fn slot(&self, field: Field) -> Option<Slot<'_>> {
        use Field as F;
        use Slot::{Many, One};

        let slot = match (self, field) {
            (Kind::Program { body }, F::Body)
            | (Kind::BlockStatement { body }, F::Body)
            | (Kind::Block { body }, F::Body)
            | (Kind::While { body, .. }, F::Body)
            | (Kind::Try { body, .. }, F::Body) => Many(body),
            (Kind::Try { handler, .. }, F::Handler) => Many(handler),
            (Kind::ExpressionStatement { expression }, F::Expression) => One(Some(*expression)),
            (Kind::IfStatement { test, .. }, F::Test)
            | (Kind::Conditional { test, .. }, F::Test)
            | (Kind::WhileStatement { test, .. }, F::Test)
            | (Kind::While { test, .. }, F::Test) => One(Some(*test)),
            (Kind::IfStatement { consequent, .. }, F::Consequent)
            | (Kind::Conditional { consequent, .. }, F::Consequent) => One(Some(*consequent)),
            (Kind::IfStatement { alternate, .. }, F::Alternate) => One(*alternate),
            (Kind::Conditional { alternate, .. }, F::Alternate) => One(Some(*alternate)),
            (Kind::WhileStatement { body, .. }, F::Body)
            | (Kind::CatchClause { body, .. }, F::Body)
            | (Kind::ArrowFunction { body, .. }, F::Body)
            | (Kind::FunctionExpression { body, .. }, F::Body) => One(Some(*body)),
            (Kind::TryStatement { block, .. }, F::Block) => One(Some(*block)),
            (Kind::TryStatement { handler, .. }, F::Handler) => One(Some(*handler)),
            (Kind::CatchClause { param, .. }, F::Param) => One(Some(*param)),
            (Kind::SwitchStatement { discriminant, .. }, F::Discriminant) => {
                One(Some(*discriminant))
            }
            (Kind::SwitchStatement { cases, .. }, F::Cases) => Many(cases),
            (Kind::SwitchCase { test, .. }, F::Test) => One(*test),
            (Kind::SwitchCase { consequent, .. }, F::Consequent) => Many(consequent),
            (Kind::ReturnStatement { argument }, F::Argument) => One(*argument),
            (Kind::ThrowStatement { argument }, F::Argument)
            | (Kind::Unary { argument, .. }, F::Argument)
            | (Kind::Update { argument, .. }, F::Argument)
            | (Kind::Spread { argument }, F::Argument)
            | (Kind::PrefixOp { argument, .. }, F::Argument) => One(Some(*argument)),
            (Kind::BreakStatement { label }, F::Label)
            | (Kind::ContinueStatement { label }, F::Label) => One(*label),
            (Kind::VariableDeclaration { declarations, .. }, F::Declarations) => {
                Many(declarations)
            }
            (Kind::VariableDeclarator { id, .. }, F::Id) => One(Some(*id)),
            (Kind::VariableDeclarator { init, .. }, F::Init)
            | (Kind::TypedDeclaration { init, .. }, F::Init)
            | (Kind::ArgumentDeclaration { init, .. }, F::Init)
            | (Kind::ParamDeclaration { init, .. }, F::Init)
            | (Kind::ReactiveDeclaration { init, .. }, F::Init) => One(*init),
            (Kind::ReactiveDeclaration { callback, .. }, F::Callback) => One(*callback),
            (Kind::ArrayExpression { elements }, F::Elements) => Many(elements),
            (Kind::ObjectExpression { properties }, F::Properties)
            | (Kind::ObjectPattern { properties }, F::Properties) => Many(properties),
            (Kind::Property { key, .. }, F::Key) => One(Some(*key)),
            (Kind::Property { value, .. }, F::Value) => One(Some(*value)),
            (Kind::AssignmentPattern { left, .. }, F::Left)
            | (Kind::Binary { left, .. }, F::Left)
            | (Kind::Logical { left, .. }, F::Left)
            | (Kind::Assignment { left, .. }, F::Left) => One(Some(*left)),
            (Kind::AssignmentPattern { right, .. }, F::Right)
            | (Kind::Binary { right, .. }, F::Right)
            | (Kind::Logical { right, .. }, F::Right)
            | (Kind::Assignment { right, .. }, F::Right) => One(Some(*right)),
            (Kind::ArrowFunction { params, .. }, F::Params)
            | (Kind::FunctionExpression { params, .. }, F::Params)
            | (Kind::Pipe { params, .. }, F::Params) => Many(params),
            (Kind::Member { object, .. }, F::Object) => One(Some(*object)),
            (Kind::Member { property, .. }, F::Property) => One(Some(*property)),
            (Kind::Call { callee, .. }, F::Callee)
            | (Kind::New { callee, .. }, F::Callee)
            | (Kind::RawCall { callee, .. }, F::Callee)
            | (Kind::Pipe { callee, .. }, F::Callee) => One(Some(*callee)),
            (Kind::Call { arguments, .. }, F::Arguments)
            | (Kind::New { arguments, .. }, F::Arguments) => Many(arguments),
            (Kind::RawCall { params, .. }, F::Params) => Many(params.as_deref().unwrap_or(&[])),
            (Kind::RawCall { arguments, .. }, F::Arguments) => {
                Many(arguments.as_deref().unwrap_or(&[]))
            }
            (Kind::TemplateLiteral { quasis, .. }, F::Quasis) => Many(quasis),
            (Kind::TemplateLiteral { expressions, .. }, F::Expressions)
            | (Kind::Async { expressions, .. }, F::Expressions)
            | (Kind::Concat { expressions }, F::Expressions) => Many(expressions),
            _ => return None,
        };
        Some(slot)
    }

    /// Mutable access to the sequence named `field`.
    ///
    /// Returns `None` for single-child fields, for fields this variant does not
    /// have, and for an absent optional sequence.
    pub fn seq_mut(&mut self, field: Field) -> Option<&mut Vec<NodeId>> {
        use Field as F;

        let seq = match (self, field) {
            (Kind::Program { body }, F::Body)
            | (Kind::BlockStatement { body }, F::Body)
            | (Kind::Block { body }, F::Body)
            | (Kind::While { body, .. }, F::Body)
            | (Kind::Try { body, .. }, F::Body) => body,
            (Kind::Try { handler, .. }, F::Handler) => handler,
            (Kind::SwitchStatement { cases, .. }, F::Cases) => cases,
            (Kind::SwitchCase { consequent, .. }, F::Consequent) => consequent,
            (Kind::VariableDeclaration { declarations, .. }, F::Declarations) => declarations,
            (Kind::ArrayExpression { elements }, F::Elements) => elements,
            (Kind::ObjectExpression { properties }, F::Properties)
            | (Kind::ObjectPattern { properties }, F::Properties) => properties,
            (Kind::ArrowFunction { params, .. }, F::Params)
            | (Kind::FunctionExpression { params, .. }, F::Params)
            | (Kind::Pipe { params, .. }, F::Params) => params,
            (Kind::Call { arguments, .. }, F::Arguments)
            | (Kind::New { arguments, .. }, F::Arguments) => arguments,
            (Kind::RawCall { params, .. }, F::Params) => params.as_mut()?,
            (Kind::RawCall { arguments, .. }, F::Arguments) => arguments.as_mut()?,
            (Kind::TemplateLiteral { quasis, .. }, F::Quasis) => quasis,
            (Kind::TemplateLiteral { expressions, .. }, F::Expressions)
            | (Kind::Async { expressions, .. }, F::Expressions)
            | (Kind::Concat { expressions }, F::Expressions) => expressions,
            _ => return None,
        };
        Some(seq)
    }

    /// Every present child, fields in declaration order.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &field in self.fields() {
            match self.slot(field) {
                Some(Slot::One(Some(id))) => out.push(id),
                Some(Slot::Many(ids)) => out.extend_from_slice(ids),
                Some(Slot::One(None)) | None => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> NodeId {
        NodeId::from_raw(n)
    }

    #[test]
    fn every_declared_field_has_a_slot() {
        let kinds = [
            Kind::IfStatement {
                test: id(0),
                consequent: id(1),
                alternate: None,
            },
            Kind::RawCall {
                callee: id(0),
                params: None,
                arguments: Some(vec![id(1)]),
            },
            Kind::ReactiveDeclaration {
                typing: None,
                id: "x".into(),
                init: Some(id(0)),
                callback: None,
            },
            Kind::TemplateLiteral {
                quasis: vec![id(0), id(1)],
                expressions: vec![id(2)],
            },
        ];
        for kind in &kinds {
            for &field in kind.fields() {
                assert!(kind.slot(field).is_some(), "{} lacks {field:?}", kind.name());
            }
        }
    }

    #[test]
    fn absent_optional_child_is_a_leaf() {
        let kind = Kind::IfStatement {
            test: id(0),
            consequent: id(1),
            alternate: None,
        };
        assert_eq!(kind.slot(Field::Alternate), Some(Slot::One(None)));
        assert_eq!(kind.children(), vec![id(0), id(1)]);
    }

    #[test]
    fn raw_call_sequences_default_to_empty() {
        let mut kind = Kind::RawCall {
            callee: id(0),
            params: None,
            arguments: None,
        };
        assert_eq!(kind.slot(Field::Params), Some(Slot::Many(&[])));
        assert!(kind.seq_mut(Field::Params).is_none());
    }

    #[test]
    fn single_child_fields_have_no_mutable_sequence() {
        let mut kind = Kind::Member {
            object: id(0),
            property: id(1),
            computed: false,
        };
        assert!(kind.seq_mut(Field::Object).is_none());
        assert!(kind.slot(Field::Body).is_none());
    }

    #[test]
    fn surface_partition() {
        assert!(Kind::Concat { expressions: vec![] }.is_surface());
        assert!(Kind::RegExp { value: "/a/".into() }.is_surface());
        assert!(!Kind::TemplateLiteral {
            quasis: vec![],
            expressions: vec![]
        }
        .is_surface());
        assert!(!Kind::ArrowFunction {
            params: vec![],
            body: id(0)
        }
        .is_surface());
    }
}

//! Constructors for the target nodes rules synthesize.
//!
//! Every helper allocates a fresh node carrying `loc`, the position of the
//! surface node being lowered.

use cb_ast::{Ast, BindingKind, Kind, LitValue, Loc, NodeId};

pub(crate) fn ident(ast: &mut Ast, loc: Loc, name: &str) -> NodeId {
    ast.alloc(
        Kind::Identifier {
            name: name.to_string(),
        },
        loc,
    )
}

/// `object.name`, with `object` given as a bare identifier.
pub(crate) fn static_member(ast: &mut Ast, loc: Loc, object: &str, name: &str) -> NodeId {
    let object = ident(ast, loc, object);
    member_of(ast, loc, object, name)
}

/// `object.name` over an existing node.
pub(crate) fn member_of(ast: &mut Ast, loc: Loc, object: NodeId, name: &str) -> NodeId {
    let kind = member_kind(ast, loc, object, name);
    ast.alloc(kind, loc)
}

/// The `object.name` variant, for replacing a node in place.
pub(crate) fn member_kind(ast: &mut Ast, loc: Loc, object: NodeId, name: &str) -> Kind {
    Kind::Member {
        object,
        property: ident(ast, loc, name),
        computed: false,
    }
}

/// `object[property]`.
pub(crate) fn index(ast: &mut Ast, loc: Loc, object: NodeId, property: NodeId) -> NodeId {
    ast.alloc(
        Kind::Member {
            object,
            property,
            computed: true,
        },
        loc,
    )
}

pub(crate) fn assign(ast: &mut Ast, loc: Loc, left: NodeId, right: NodeId) -> NodeId {
    ast.alloc(assign_kind(left, right), loc)
}

pub(crate) fn assign_kind(left: NodeId, right: NodeId) -> Kind {
    Kind::Assignment {
        operator: "=".to_string(),
        left,
        right,
    }
}

pub(crate) fn expr_stmt(ast: &mut Ast, loc: Loc, expression: NodeId) -> NodeId {
    ast.alloc(Kind::ExpressionStatement { expression }, loc)
}

/// `let name = init;`
pub(crate) fn let_decl(ast: &mut Ast, loc: Loc, name: &str, init: NodeId) -> NodeId {
    let id = ident(ast, loc, name);
    let declarator = ast.alloc(
        Kind::VariableDeclarator {
            id,
            init: Some(init),
        },
        loc,
    );
    ast.alloc(
        Kind::VariableDeclaration {
            kind: BindingKind::Let,
            declarations: vec![declarator],
        },
        loc,
    )
}

pub(crate) fn call(ast: &mut Ast, loc: Loc, callee: NodeId, arguments: Vec<NodeId>) -> NodeId {
    ast.alloc(Kind::Call { callee, arguments }, loc)
}

pub(crate) fn arrow(ast: &mut Ast, loc: Loc, params: Vec<NodeId>, body: NodeId) -> NodeId {
    ast.alloc(Kind::ArrowFunction { params, body }, loc)
}

pub(crate) fn block(ast: &mut Ast, loc: Loc, body: Vec<NodeId>) -> NodeId {
    ast.alloc(Kind::BlockStatement { body }, loc)
}

pub(crate) fn object(ast: &mut Ast, loc: Loc, properties: Vec<NodeId>) -> NodeId {
    ast.alloc(Kind::ObjectExpression { properties }, loc)
}

pub(crate) fn property(
    ast: &mut Ast,
    loc: Loc,
    key: NodeId,
    value: NodeId,
    shorthand: bool,
) -> NodeId {
    ast.alloc(
        Kind::Property {
            key,
            value,
            shorthand,
        },
        loc,
    )
}

pub(crate) fn bool_lit(ast: &mut Ast, loc: Loc, value: bool) -> NodeId {
    ast.alloc(
        Kind::Literal {
            value: LitValue::Bool(value),
        },
        loc,
    )
}

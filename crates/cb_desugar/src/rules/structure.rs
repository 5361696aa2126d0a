//! Statement-level forms whose bodies arrive as bare statement lists.

use std::mem;

use cb_ast::{Ast, Kind};

use crate::build;
use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

pub(crate) fn block(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let body = match ast.kind_mut(path.node()) {
        Kind::Block { body } => mem::take(body),
        _ => return Ok(false),
    };
    ast.replace(path.node(), Kind::BlockStatement { body });
    Ok(true)
}

/// `while test { .. }` gets its statement list wrapped in a block.
pub(crate) fn while_body(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let node = path.node();
    let (test, body) = match ast.kind_mut(node) {
        Kind::While { test, body } => (*test, mem::take(body)),
        _ => return Ok(false),
    };
    let loc = ast.loc(node);
    let body = build::block(ast, loc, body);
    ast.replace(node, Kind::WhileStatement { test, body });
    Ok(true)
}

/// `try { .. } catch e { .. }` → protected block plus a catch clause binding `e`.
pub(crate) fn try_catch(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let node = path.node();
    let (body, id, handler) = match ast.kind_mut(node) {
        Kind::Try { body, id, handler } => (mem::take(body), mem::take(id), mem::take(handler)),
        _ => return Ok(false),
    };
    let loc = ast.loc(node);
    let block = build::block(ast, loc, body);
    let param = build::ident(ast, loc, &id);
    let handler_body = build::block(ast, loc, handler);
    let handler = ast.alloc(
        Kind::CatchClause {
            param,
            body: handler_body,
        },
        loc,
    );
    ast.replace(node, Kind::TryStatement { block, handler });
    Ok(true)
}

pub(crate) fn function_expression(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let (params, body) = match ast.kind_mut(path.node()) {
        Kind::FunctionExpression { params, body } => (mem::take(params), *body),
        _ => return Ok(false),
    };
    ast.replace(path.node(), Kind::ArrowFunction { params, body });
    Ok(true)
}

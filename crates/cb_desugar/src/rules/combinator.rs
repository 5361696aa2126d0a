//! Asynchronous composition operators.
//!
//! `&` and `&?` run their operands concurrently through `Promise.all` and
//! `Promise.race`. `&|` and `&>` chain them with `.then`, associating left
//! to right: `a &> b &> c` is `a.then(() => b).then(() => c)`.

use std::mem;

use cb_ast::{AsyncOp, Ast, Kind, NodeId};

use crate::build;
use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

pub(crate) fn parallel(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let Some((operator, expressions)) = take_operands(ast, path.node(), AsyncOp::is_parallel)?
    else {
        return Ok(false);
    };
    let loc = ast.loc(path.node());
    let method = match operator {
        AsyncOp::All => "all",
        _ => "race",
    };
    let callee = build::static_member(ast, loc, "Promise", method);
    let array = ast.alloc(
        Kind::ArrayExpression {
            elements: expressions,
        },
        loc,
    );
    ast.replace(
        path.node(),
        Kind::Call {
            callee,
            arguments: vec![array],
        },
    );
    Ok(true)
}

pub(crate) fn sequential(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let node = path.node();
    let Some((operator, expressions)) = take_operands(ast, node, |op| !op.is_parallel())? else {
        return Ok(false);
    };
    let loc = ast.loc(node);

    let mut operands = expressions.into_iter();
    let Some(mut chain) = operands.next() else {
        return Ok(false);
    };
    let mut rest = operands.peekable();
    while let Some(next) = rest.next() {
        let argument = match operator {
            AsyncOp::Then => build::arrow(ast, loc, Vec::new(), next),
            _ => next,
        };
        let callee = build::member_of(ast, loc, chain, "then");
        let step = Kind::Call {
            callee,
            arguments: vec![argument],
        };
        if rest.peek().is_some() {
            chain = ast.alloc(step, loc);
        } else {
            ast.replace(node, step);
        }
    }
    Ok(true)
}

/// Empty the operand list of an `Async` node whose operator satisfies
/// `accept`. Fewer than two operands is an error.
fn take_operands(
    ast: &mut Ast,
    node: NodeId,
    accept: impl Fn(AsyncOp) -> bool,
) -> Result<Option<(AsyncOp, Vec<NodeId>)>, RuleError> {
    let Kind::Async {
        operator,
        expressions,
    } = ast.kind_mut(node)
    else {
        return Ok(None);
    };
    if !accept(*operator) {
        return Ok(None);
    }
    if expressions.len() < 2 {
        return Err(RuleError::TooFewOperands {
            operator: *operator,
            found: expressions.len(),
        });
    }
    Ok(Some((*operator, mem::take(expressions))))
}

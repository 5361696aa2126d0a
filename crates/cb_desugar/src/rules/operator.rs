//! Prefix and postfix operators.

use cb_ast::{Ast, Kind};

use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

/// `++`/`--` become update expressions, keeping their fixity; everything
/// else is a plain unary operator.
pub(crate) fn update_operator(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let node = path.node();
    let Kind::PrefixOp {
        operator,
        argument,
        prefix,
    } = ast.kind(node)
    else {
        return Ok(false);
    };
    let (operator, argument, prefix) = (operator.clone(), *argument, *prefix);
    let lowered = match operator.as_str() {
        "++" | "--" => Kind::Update {
            operator,
            argument,
            prefix,
        },
        _ => Kind::Unary { operator, argument },
    };
    ast.replace(node, lowered);
    Ok(true)
}

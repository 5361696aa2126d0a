//! Typed variable declarations.

use cb_ast::{Ast, BindingKind, Kind};

use crate::build;
use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

/// `function f = { .. }` → `let f = () => { .. }`; any other typed
/// declaration becomes a single-declarator `let` or `const`.
pub(crate) fn typed_declaration(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let node = path.node();
    let Kind::TypedDeclaration { typing, id, init } = ast.kind(node) else {
        return Ok(false);
    };
    let (typing, name, mut init) = (typing.clone(), id.clone(), *init);
    let loc = ast.loc(node);

    if typing.as_deref() == Some("function") {
        if let Some(body) = init.filter(|&body| matches!(ast.kind(body), Kind::Block { .. })) {
            init = Some(build::arrow(ast, loc, Vec::new(), body));
        }
    }

    let id = build::ident(ast, loc, &name);
    let declarator = ast.alloc(Kind::VariableDeclarator { id, init }, loc);
    ast.replace(
        node,
        Kind::VariableDeclaration {
            kind: binding_kind(&name),
            declarations: vec![declarator],
        },
    );
    Ok(true)
}

/// All-caps names are constants; digits and underscores don't count.
pub(crate) fn binding_kind(name: &str) -> BindingKind {
    let mut letters = name.chars().filter(|c| !c.is_ascii_digit() && *c != '_');
    let mut any = false;
    let all_upper = letters.all(|c| {
        any = true;
        c.is_ascii_uppercase()
    });
    if any && all_upper {
        BindingKind::Const
    } else {
        BindingKind::Let
    }
}

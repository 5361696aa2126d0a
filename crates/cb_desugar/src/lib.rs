//! Desugaring pass that rewrites cobalt syntax into standard ECMAScript nodes.
//!
//! Transforms:
//! - regex text, typed declarations, statement-list bodies, function
//!   expressions, raw and piped calls, prefix operators and concatenation
//!   → their direct ECMAScript forms
//! - parameter declarations in a function body → the function's parameters
//! - keyword arguments at a call site → a leading object argument
//! - reactive declarations → writes to a proxied store (see [`reactive`])
//! - `&`, `&?`, `&|`, `&>` → `Promise.all` / `Promise.race` / `.then` chains
//!
//! Everything runs in one walk ([`traverse`]) plus a program-level
//! [`reactive::finalize`] step; [`desugar_program`] does both.

mod build;
pub mod desugar;
pub mod error;
pub mod path;
pub mod reactive;
pub mod rules;
pub mod session;
pub mod traverse;

pub use desugar::desugar_program;
pub use error::{DesugarError, RuleError};
pub use path::{Edge, Path};
pub use session::{Report, Session, Stats};
pub use traverse::{Rule, RuleFn, Walker};

#[cfg(test)]
pub(crate) mod testing {
    use cb_ast::{Ast, Input, LowerOptions};
    use serde_json::Value;

    use crate::{desugar_program, DesugarError};

    pub fn load(value: Value) -> Ast {
        serde_json::from_value::<Input>(value)
            .expect("valid input tree")
            .into_ast()
    }

    pub fn try_lower(value: Value) -> Result<Ast, DesugarError> {
        let mut ast = load(value);
        desugar_program(&mut ast, &LowerOptions::default())?;
        Ok(ast)
    }

    pub fn lower(value: Value) -> Ast {
        lower_with(value, &LowerOptions::default())
    }

    pub fn lower_with(value: Value, options: &LowerOptions) -> Ast {
        let mut ast = load(value);
        if let Err(err) = desugar_program(&mut ast, options) {
            panic!("lowering failed: {err}");
        }
        ast
    }

    /// Outline of each top-level statement.
    pub fn statements(ast: &Ast) -> Vec<String> {
        let root = ast.root().expect("tree has a root");
        ast.kind(root)
            .children()
            .into_iter()
            .map(|id| ast.outline(id))
            .collect()
    }
}

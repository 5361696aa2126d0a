//! Top-level desugaring entry point.

use cb_ast::{Ast, Kind, Loc, LowerOptions};

use crate::error::{DesugarError, RuleError};
use crate::reactive;
use crate::rules::PIPELINE;
use crate::session::{Report, Session};
use crate::traverse::Walker;

/// Lower every cobalt construct in `ast` to ECMAScript, in place.
///
/// The root must be a `Program`. On success only target kinds are reachable
/// from the root; on failure the tree is left partially rewritten and should
/// be discarded.
pub fn desugar_program(ast: &mut Ast, options: &LowerOptions) -> Result<Report, DesugarError> {
    let root = ast
        .root()
        .ok_or_else(|| DesugarError::new(Loc::default(), RuleError::EmptyTree))?;
    if !matches!(ast.kind(root), Kind::Program { .. }) {
        let found = ast.kind(root).name();
        return Err(DesugarError::new(
            ast.loc(root),
            RuleError::NotAProgram { found },
        ));
    }

    let mut session = Session::new(options.clone());
    Walker::new(PIPELINE).walk(ast, &mut session, root)?;

    if reactive::finalize(ast, &session)
        .map_err(|source| DesugarError::new(session.last_loc(), source))?
    {
        session.record_rewrite();
    }

    let report = session.into_report();
    tracing::debug!(
        visits = report.stats.visits,
        rewrites = report.stats.rewrites,
        reactive = report.reactive.len(),
        "lowered program"
    );
    Ok(report)
}

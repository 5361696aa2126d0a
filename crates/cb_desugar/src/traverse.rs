//! Depth-first walk that runs the rule pipeline over every node.
//!
//! At each node every rule runs once, in registration order, against the
//! node's current state; a rule may retag the node, splice the sequence that
//! holds it, or edit an ancestor. Only then does the walk descend.
//!
//! Sequences are walked from the highest index down. A rule may only remove
//! the element being visited or insert right after it, so indices below the
//! current one never move. Elements a visit inserts after itself are walked
//! immediately, before the walk continues downwards.

use std::fmt;

use cb_ast::{Ast, Field, Kind, NodeId, Slot};

use crate::error::{DesugarError, RuleError};
use crate::path::{Edge, Path};
use crate::session::Session;

/// Signature of a rewrite rule. Returns whether the rule changed the tree.
pub type RuleFn = fn(&mut Ast, &mut Session, &Path<'_>) -> Result<bool, RuleError>;

/// A named rewrite rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Walker<'r> {
    rules: &'r [Rule],
}

enum Step {
    One(NodeId),
    Many,
}

impl<'r> Walker<'r> {
    pub fn new(rules: &'r [Rule]) -> Self {
        Self { rules }
    }

    /// Walk the tree below `root`, which is visited first.
    pub fn walk(
        &self,
        ast: &mut Ast,
        session: &mut Session,
        root: NodeId,
    ) -> Result<(), DesugarError> {
        self.visit(ast, session, &Path::root(root))
    }

    fn visit(
        &self,
        ast: &mut Ast,
        session: &mut Session,
        path: &Path<'_>,
    ) -> Result<(), DesugarError> {
        let node = path.node();
        session.observe(ast.loc(node));
        tracing::trace!(%node, kind = ast.kind(node).name(), depth = path.depth(), "visit");

        for rule in self.rules {
            let fired = (rule.apply)(ast, session, path)
                .map_err(|source| DesugarError::new(session.last_loc(), source))?;
            if fired {
                session.record_rewrite();
                tracing::debug!(rule = rule.name, %node, now = ast.kind(node).name(), "rule fired");
            }
        }

        // Absorbed into an ancestor; its children went with it.
        if !path.is_attached(ast) {
            return Ok(());
        }

        for &field in visit_order(ast.kind(node)) {
            let step = match ast.kind(node).slot(field) {
                Some(Slot::One(Some(child))) => Step::One(child),
                Some(Slot::Many(_)) => Step::Many,
                Some(Slot::One(None)) | None => continue,
            };
            match step {
                Step::One(child) => {
                    self.visit(ast, session, &path.child(Edge::Field(field), child))?;
                }
                Step::Many => {
                    let mut index = seq_len(ast, node, field);
                    while index > 0 {
                        index -= 1;
                        if index < seq_len(ast, node, field) {
                            self.visit_element(ast, session, path, field, index)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn visit_element(
        &self,
        ast: &mut Ast,
        session: &mut Session,
        parent: &Path<'_>,
        field: Field,
        index: usize,
    ) -> Result<(), DesugarError> {
        let before = seq_len(ast, parent.node(), field);
        let child = seq(ast, parent.node(), field)[index];
        self.visit(ast, session, &parent.child(Edge::Index(field, index), child))?;

        let inserted = seq_len(ast, parent.node(), field).saturating_sub(before);
        for at in (index + 1..=index + inserted).rev() {
            self.visit_element(ast, session, parent, field, at)?;
        }
        Ok(())
    }
}

/// Field order for descent. A function's body goes before its parameter
/// list: declarations in the body prepend parameters, and those must be
/// walked too.
fn visit_order(kind: &Kind) -> &'static [Field] {
    match kind {
        Kind::ArrowFunction { .. } | Kind::FunctionExpression { .. } => &[Field::Body, Field::Params],
        _ => kind.fields(),
    }
}

fn seq(ast: &Ast, node: NodeId, field: Field) -> &[NodeId] {
    match ast.kind(node).slot(field) {
        Some(Slot::Many(ids)) => ids,
        _ => &[],
    }
}

fn seq_len(ast: &Ast, node: NodeId, field: Field) -> usize {
    seq(ast, node, field).len()
}

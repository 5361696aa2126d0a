//! Errors raised while lowering a tree.

use cb_ast::{AsyncOp, Loc};
use thiserror::Error;

/// A rule found a node whose shape it cannot lower.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("tree has no root node")]
    EmptyTree,
    #[error("expected a Program root, found {found}")]
    NotAProgram { found: &'static str },
    #[error("{kind} `{name}` must appear directly inside a statement list")]
    NotInSequence { kind: &'static str, name: String },
    #[error("{kind} `{name}` is not inside a function")]
    NoEnclosingFunction { kind: &'static str, name: String },
    #[error("reactive variable `{name}` has no onchange callback")]
    MissingCallback { name: String },
    #[error("`{operator}` needs at least two operands, found {found}")]
    TooFewOperands { operator: AsyncOp, found: usize },
    #[error("malformed regular expression literal `{value}`")]
    MalformedRegex { value: String },
}

/// A [`RuleError`] tagged with the last source position the walk observed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{loc}] {source}")]
pub struct DesugarError {
    pub loc: Loc,
    #[source]
    pub source: RuleError,
}

impl DesugarError {
    pub fn new(loc: Loc, source: RuleError) -> Self {
        Self { loc, source }
    }
}

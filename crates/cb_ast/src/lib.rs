//! Node model for cobalt.
//!
//! Surface syntax and the ECMAScript target grammar share one arena: the
//! parser hands over a tree of surface nodes, and the desugarer replaces
//! them slot by slot with target nodes until only target tags remain.
//!
//! - [`Ast`] / [`NodeId`]: the arena and its indices
//! - [`Kind`]: the closed set of node variants (surface and target)
//! - [`Input`]: the JSON tree format produced by the external parser

mod arena;
mod input;
mod kind;
mod outline;

pub use arena::{Ast, Loc, Node, NodeId};
pub use input::{Input, InputKind};
pub use kind::{BindingKind, Field, Kind, LitValue, Slot};

use serde::{Deserialize, Serialize};

/// Asynchronous composition operators added by cobalt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsyncOp {
    /// `&`: wait for every operand.
    #[serde(rename = "&")]
    All,
    /// `&?`: first operand to settle wins.
    #[serde(rename = "&?")]
    Race,
    /// `&|`: pass each settled value straight to the next operand.
    #[serde(rename = "&|")]
    Chain,
    /// `&>`: continue with the next operand once the previous one settles.
    #[serde(rename = "&>")]
    Then,
}

impl AsyncOp {
    /// Whether the operands run concurrently rather than one after another.
    pub fn is_parallel(self) -> bool {
        matches!(self, AsyncOp::All | AsyncOp::Race)
    }
}

impl std::fmt::Display for AsyncOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsyncOp::All => write!(f, "&"),
            AsyncOp::Race => write!(f, "&?"),
            AsyncOp::Chain => write!(f, "&|"),
            AsyncOp::Then => write!(f, "&>"),
        }
    }
}

/// Options controlling the names the lowering introduces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LowerOptions {
    /// Shared container holding the value of every reactive variable.
    pub store: String,
    /// Container mapping each reactive variable to its change callback.
    pub callbacks: String,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self {
            store: "$".to_string(),
            callbacks: "$$".to_string(),
        }
    }
}

//! Per-run compilation state.

use std::collections::HashSet;

use cb_ast::{Loc, LowerOptions};

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Nodes the walk visited.
    pub visits: usize,
    /// Rule applications that changed the tree.
    pub rewrites: usize,
}

/// Summary handed back by [`crate::desugar_program`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub stats: Stats,
    /// Reactive variable names, sorted.
    pub reactive: Vec<String>,
}

/// State threaded through one compilation: options, the reactive registry,
/// and the last source position seen.
///
/// The registry is flat: a name declared reactive anywhere is reactive
/// everywhere for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: LowerOptions,
    reactive: HashSet<String>,
    last_loc: Loc,
    stats: Stats,
}

impl Session {
    pub fn new(options: LowerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &LowerOptions {
        &self.options
    }

    pub fn reset_registry(&mut self) {
        self.reactive.clear();
    }

    pub fn mark_reactive(&mut self, name: impl Into<String>) {
        self.reactive.insert(name.into());
    }

    pub fn has_reactive(&self) -> bool {
        !self.reactive.is_empty()
    }

    pub fn reactive(&self) -> &HashSet<String> {
        &self.reactive
    }

    pub fn last_loc(&self) -> Loc {
        self.last_loc
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub(crate) fn observe(&mut self, loc: Loc) {
        self.last_loc = loc;
        self.stats.visits += 1;
    }

    pub(crate) fn record_rewrite(&mut self) {
        self.stats.rewrites += 1;
    }

    pub fn into_report(self) -> Report {
        let mut reactive: Vec<String> = self.reactive.into_iter().collect();
        reactive.sort();
        Report {
            stats: self.stats,
            reactive,
        }
    }
}

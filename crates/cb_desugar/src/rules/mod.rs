//! The rewrite rules, in the order the walker applies them.

mod call;
mod combinator;
mod concat;
mod declaration;
mod literal;
mod operator;
mod params;
mod structure;

use crate::reactive;
use crate::traverse::Rule;

/// Every rule runs at every node, top to bottom. A rule sees the node as the
/// rules above it left it, so a multi-step lowering such as a raw call that
/// then gathers its keyword arguments finishes within a single visit.
pub const PIPELINE: &[Rule] = &[
    Rule {
        name: "reset-registry",
        apply: reactive::reset_registry,
    },
    Rule {
        name: "regex-literal",
        apply: literal::regex_literal,
    },
    Rule {
        name: "typed-declaration",
        apply: declaration::typed_declaration,
    },
    Rule {
        name: "block",
        apply: structure::block,
    },
    Rule {
        name: "while-body",
        apply: structure::while_body,
    },
    Rule {
        name: "try-catch",
        apply: structure::try_catch,
    },
    Rule {
        name: "function-expression",
        apply: structure::function_expression,
    },
    Rule {
        name: "call-arguments",
        apply: call::call_arguments,
    },
    Rule {
        name: "pipe",
        apply: call::pipe,
    },
    Rule {
        name: "update-operator",
        apply: operator::update_operator,
    },
    Rule {
        name: "positional-argument",
        apply: params::positional_argument,
    },
    Rule {
        name: "named-parameter",
        apply: params::named_parameter,
    },
    Rule {
        name: "keyword-arguments",
        apply: call::keyword_arguments,
    },
    Rule {
        name: "reactive-declaration",
        apply: reactive::reactive_declaration,
    },
    Rule {
        name: "parallel-combinator",
        apply: combinator::parallel,
    },
    Rule {
        name: "sequential-combinator",
        apply: combinator::sequential,
    },
    Rule {
        name: "concatenation",
        apply: concat::concatenation,
    },
];

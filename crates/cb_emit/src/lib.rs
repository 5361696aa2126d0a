//! Printer boundary for lowered cobalt trees.
//!
//! [`to_script`] converts an arena holding only target kinds into an
//! `swc_ecma_ast::Script`; [`emit_script`] also renders it to text with
//! `swc_ecma_codegen`. Reaching a surface kind here means the desugarer left
//! something behind, and is reported rather than printed.

mod convert;
mod precedence;

use cb_ast::{Ast, Loc};
use swc_common::{sync::Lrc, SourceMap};
use swc_ecma_ast as ast;
use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("tree has no root node")]
    EmptyTree,
    #[error("expected a Program root, found {found}")]
    NotAProgram { found: &'static str },
    #[error("[{at}] {kind} was not lowered before printing")]
    Surface { kind: &'static str, at: Loc },
    #[error("[{at}] {kind} cannot appear as {expected}")]
    Misplaced {
        kind: &'static str,
        expected: &'static str,
        at: Loc,
    },
    #[error("unknown {position} operator `{operator}`")]
    Operator {
        operator: String,
        position: &'static str,
    },
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
    #[error("printer produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Convert a lowered tree into SWC's script AST.
pub fn to_script(tree: &Ast) -> Result<ast::Script, EmitError> {
    convert::Converter::new(tree).script()
}

/// Print a lowered tree as ECMAScript source.
pub fn emit_script(tree: &Ast) -> Result<String, EmitError> {
    let script = to_script(tree)?;
    let cm: Lrc<SourceMap> = Default::default();

    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default().with_target(ast::EsVersion::latest()),
            cm,
            comments: None,
            wr: writer,
        };
        script.emit_with(&mut emitter)?;
    }

    Ok(String::from_utf8(buf)?)
}

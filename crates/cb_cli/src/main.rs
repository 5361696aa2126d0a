use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cb_ast::{Ast, Input, LowerOptions};
use cb_desugar::desugar_program;
use cb_emit::emit_script;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cb", about = "cobalt: lower a parsed cobalt tree to ECMAScript")]
struct Cli {
    /// Log rule activity to stderr (repeat for per-node tracing).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Desugar a tree and print it as ECMAScript.
    Compile {
        /// Input tree (.json) produced by the cobalt parser.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// JSON file with lowering options.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Name of the reactive value store.
        #[arg(long)]
        store: Option<String>,
        /// Name of the reactive callback table.
        #[arg(long)]
        callbacks: Option<String>,
    },
    /// Desugar the tree and report any structural errors.
    Check { input: PathBuf },
    /// Print the tree outline.
    Tree {
        input: PathBuf,
        /// Show the tree after lowering.
        #[arg(long)]
        lowered: bool,
        /// Dump the flat arena as JSON instead.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compile {
            input,
            output,
            config,
            store,
            callbacks,
        } => {
            let mut options = match &config {
                Some(path) => load_options(path)?,
                None => LowerOptions::default(),
            };
            if let Some(store) = store {
                options.store = store;
            }
            if let Some(callbacks) = callbacks {
                options.callbacks = callbacks;
            }

            let mut ast = load_tree(&input)?;
            desugar_program(&mut ast, &options)
                .with_context(|| format!("failed to lower {}", input.display()))?;
            let js = emit_script(&ast)?;

            match &output {
                Some(path) => std::fs::write(path, &js)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{js}"),
            }
        }
        Commands::Check { input } => {
            let filename = input.display().to_string();
            let mut ast = load_tree(&input)?;
            let report = desugar_program(&mut ast, &LowerOptions::default())
                .with_context(|| format!("failed to lower {filename}"))?;
            tracing::info!(
                rewrites = report.stats.rewrites,
                reactive = ?report.reactive,
                "checked"
            );
            eprintln!("OK: {filename}");
        }
        Commands::Tree {
            input,
            lowered,
            json,
        } => {
            let mut ast = load_tree(&input)?;
            if lowered {
                desugar_program(&mut ast, &LowerOptions::default())
                    .with_context(|| format!("failed to lower {}", input.display()))?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&ast)?);
            } else {
                let root = ast.root().context("tree has no root node")?;
                println!("{}", ast.outline(root));
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` enables debug and `-vv` trace.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "cb=info,cb_desugar=debug",
        _ => "cb=debug,cb_desugar=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_tree(path: &Path) -> Result<Ast> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let input: Input = serde_json::from_str(&source)
        .with_context(|| format!("{} is not a cobalt tree", path.display()))?;
    Ok(input.into_ast())
}

fn load_options(path: &Path) -> Result<LowerOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("invalid options in {}", path.display()))
}

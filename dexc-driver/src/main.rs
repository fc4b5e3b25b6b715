//! Debug Expression Compiler Driver
//!
//! Reads a debug expression syntax tree and the scopes of a stopped frame,
//! both as JSON, and prints the typed evaluation tree the compiler builds.

use clap::{Parser, Subcommand, ValueEnum};
use dexc_common::{DebugExprError, MapScope, Scope, ScopeChain};
use dexc_frontend::{CompiledExpr, DebugExprFrontend, Expr};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "dexc")]
#[command(about = "Debug Expression Compiler")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log compiler decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an expression and print its evaluation tree
    Compile {
        /// Syntax tree of the expression (JSON)
        #[arg(short, long)]
        expr: PathBuf,

        /// Lexical and global scopes (JSON); no symbols if omitted
        #[arg(short, long)]
        scopes: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Type-check an expression and print its static type
    Check {
        #[arg(short, long)]
        expr: PathBuf,

        #[arg(short, long)]
        scopes: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Error, Debug)]
enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Compile(#[from] DebugExprError),
}

/// Scope description of a stopped frame. Both lists are ordered innermost
/// first.
#[derive(Debug, Default, Deserialize)]
struct ScopeFile {
    #[serde(default)]
    lexical: Vec<MapScope>,
    #[serde(default)]
    global: Vec<MapScope>,
}

impl ScopeFile {
    fn into_chains(self) -> (ScopeChain, ScopeChain) {
        (to_chain(self.lexical), to_chain(self.global))
    }
}

fn to_chain(scopes: Vec<MapScope>) -> ScopeChain {
    scopes
        .into_iter()
        .map(|scope| Arc::new(scope) as Arc<dyn Scope>)
        .collect()
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let result = match cli.command {
        Commands::Compile { expr, scopes, format, output } => {
            compile_command(&expr, scopes.as_deref(), format, output.as_deref())
        }
        Commands::Check { expr, scopes } => check_command(&expr, scopes.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn compile_command(
    expr_path: &Path,
    scopes_path: Option<&Path>,
    format: OutputFormat,
    output_path: Option<&Path>,
) -> Result<(), DriverError> {
    let compiled = compile_files(expr_path, scopes_path)?;
    let rendered = render(&compiled, format)?;

    if let Some(path) = output_path {
        fs::write(path, &rendered)?;
        info!("Tree written to: {}", path.display());
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn check_command(expr_path: &Path, scopes_path: Option<&Path>) -> Result<(), DriverError> {
    let compiled = compile_files(expr_path, scopes_path)?;
    println!("{}", compiled.expr_type);
    Ok(())
}

fn compile_files(expr_path: &Path, scopes_path: Option<&Path>) -> Result<CompiledExpr, DriverError> {
    let expr_json = fs::read_to_string(expr_path)?;
    let scopes_json = scopes_path.map(fs::read_to_string).transpose()?;
    debug!("Compiling {}", expr_path.display());
    compile_json(&expr_json, scopes_json.as_deref())
}

fn compile_json(expr_json: &str, scopes_json: Option<&str>) -> Result<CompiledExpr, DriverError> {
    let expr: Expr = serde_json::from_str(expr_json)?;
    let scope_file = match scopes_json {
        Some(json) => serde_json::from_str::<ScopeFile>(json)?,
        None => ScopeFile::default(),
    };
    debug!(
        "{} lexical and {} global scopes",
        scope_file.lexical.len(),
        scope_file.global.len()
    );

    let (scopes, global_scopes) = scope_file.into_chains();
    Ok(DebugExprFrontend::compile_to_tree(&expr, scopes, global_scopes)?)
}

fn render(compiled: &CompiledExpr, format: OutputFormat) -> Result<String, DriverError> {
    match format {
        OutputFormat::Pretty => Ok(format!("type: {}\n{:#?}", compiled.expr_type, compiled.tree)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(compiled)?),
    }
}

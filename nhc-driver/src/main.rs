//! Nighthawk Compiler Driver
//!
//! Reads the JSON syntax tree written by the parser, lowers it to IR and
//! writes the IR text for the external assembler.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use nhc_frontend::Frontend;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nhc")]
#[command(about = "Nighthawk Compiler")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lower a syntax tree to IR
    Compile {
        /// Input syntax tree (JSON array of declarations)
        input: PathBuf,

        /// Output IR file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fold a constant expression and print its value
    Eval {
        /// Input expression (JSON)
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compile { input, output } => compile_file(&input, output.as_deref()),
        Commands::Eval { input } => eval_file(&input).map(|value| println!("{value}")),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn compile_file(input_path: &Path, output_path: Option<&Path>) -> Result<()> {
    info!("Compiling {}", input_path.display());

    let source = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;
    let ir_text = Frontend::compile_json_to_text(&source)
        .with_context(|| format!("failed to compile {}", input_path.display()))?;

    match output_path {
        Some(path) => {
            fs::write(path, &ir_text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("IR written to {}", path.display());
        }
        None => print!("{ir_text}"),
    }
    Ok(())
}

fn eval_file(input_path: &Path) -> Result<String> {
    let source = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;
    let value = Frontend::evaluate_json(&source)
        .with_context(|| format!("failed to evaluate {}", input_path.display()))?;
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nhc_common::CompilerError;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_compile_to_file() {
        let input = write_temp(
            r#"[ { "function": { "name": "main", "body": [ { "print": "hi" } ] } } ]"#,
        );
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("main.ssa");

        compile_file(input.path(), Some(&output)).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("export function $main() {\n@entry\n"));
        assert!(text.contains("data $str.0 = { b \"hi\", b 0 }"));
    }

    #[test]
    fn test_compile_reports_unknown_declaration() {
        let input = write_temp(r#"[ { "enum": { "name": "color" } } ]"#);
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.ssa");

        let err = compile_file(input.path(), Some(&output)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CompilerError>(),
            Some(&CompilerError::UnknownDeclarationKind { kind: "enum".to_string() })
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_eval_file() {
        let input = write_temp(
            r#"{ "binary": { "op": "less", "lhs": { "int_literal": 1 }, "rhs": { "int_literal": 2 } } }"#,
        );
        assert_eq!(eval_file(input.path()).unwrap(), "true");
    }

    #[test]
    fn test_missing_input() {
        let err = eval_file(Path::new("/nonexistent/expr.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}

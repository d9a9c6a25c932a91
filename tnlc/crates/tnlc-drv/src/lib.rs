//! tnlc-drv - Pipeline driver and CLI definition.
//!
//! ============================================================================
//! OVERVIEW
//! ============================================================================
//!
//! The driver strings the phases together and stops at the stage the user
//! asked for:
//!
//! ```text
//! source ─▶ [Lexer] ─▶ tokens          --print-tokens stops here
//!              │
//!              ▼
//!           [Parser] ─▶ module         --print-ast / --print-code stop here
//!              │
//!              ▼
//!        [SemanticAnalyzer]            --check stops here (never fatal)
//!              │
//!              ▼
//!  data ─▶ [VM over CSV frame]         --interpret stops here
//!              │
//!              ▼
//!          [--compile]                 reserved, reports not implemented
//! ```
//!
//! [`run`] returns the stage's stdout text; all failures travel as
//! `anyhow::Error` and the binary maps them to exit code 1. Semantic
//! findings are output, not errors: the caller decides what to make of them.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser as ClapParser};
use tracing::debug;

use tnlc_lex::Lexer;
use tnlc_par::ast_printer::print_module_ast;
use tnlc_par::code_printer::print_module_code;
use tnlc_par::Parser;
use tnlc_table::Frame;

/// TNL - Table Normalization Language.
#[derive(Debug, ClapParser)]
#[command(name = "tnlc", version, about = "TNL - Table Normalization Language.")]
pub struct Cli {
    /// A tnl source file.
    pub source_file: PathBuf,

    /// A data file containing data to transform.
    pub data_file: PathBuf,

    #[command(flatten)]
    pub stage: StageArgs,
}

/// Mutually exclusive stage flags.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct StageArgs {
    /// Print the token stream and stop.
    #[arg(long)]
    pub print_tokens: bool,

    /// Print the parsed AST and stop.
    #[arg(long)]
    pub print_ast: bool,

    /// Pretty-print the parsed module as canonical source and stop.
    #[arg(long)]
    pub print_code: bool,

    /// Run static checks and report findings.
    #[arg(long)]
    pub check: bool,

    /// Interpret the transform against the data file and print CSV.
    #[arg(long)]
    pub interpret: bool,

    /// Compile for the given target (reserved; not implemented).
    #[arg(long, value_name = "TARGET")]
    pub compile: Option<String>,
}

/// The stage the invocation stops at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    PrintTokens,
    PrintAst,
    PrintCode,
    Check,
    Interpret,
    Compile(String),
}

impl StageArgs {
    /// Resolves the flag group; no flag at all means the default compile
    /// target.
    pub fn stage(&self) -> Stage {
        if self.print_tokens {
            Stage::PrintTokens
        } else if self.print_ast {
            Stage::PrintAst
        } else if self.print_code {
            Stage::PrintCode
        } else if self.check {
            Stage::Check
        } else if self.interpret {
            Stage::Interpret
        } else {
            Stage::Compile(
                self.compile
                    .clone()
                    .unwrap_or_else(|| "pandas".to_string()),
            )
        }
    }
}

/// Runs the pipeline up to the requested stage and returns its output text.
pub fn run(cli: &Cli) -> Result<String> {
    let stage = cli.stage.stage();

    if !cli.source_file.exists() {
        bail!("Can't find source_file {}.", cli.source_file.display());
    }
    let source = std::fs::read_to_string(&cli.source_file)
        .with_context(|| format!("failed to read {}", cli.source_file.display()))?;
    let file_name = cli.source_file.display().to_string();

    let tokens = Lexer::new(&source, &file_name).lex()?;
    debug!(count = tokens.len(), "lexed tokens");

    if stage == Stage::PrintTokens {
        let mut out = String::new();
        for token in &tokens {
            writeln!(out, "{token}").expect("writing to a String cannot fail");
        }
        return Ok(out);
    }

    let module = Parser::new(tokens, &file_name).parse()?;
    debug!(definitions = module.definitions.len(), "parsed module");

    match stage {
        Stage::PrintAst => return Ok(print_module_ast(&module)),
        Stage::PrintCode => return Ok(print_module_code(&module)),
        Stage::Check => {
            let findings = tnlc_sem::analyze(&module);
            debug!(count = findings.len(), "collected semantic findings");
            let mut out = String::new();
            for finding in findings {
                writeln!(out, "{finding}").expect("writing to a String cannot fail");
            }
            return Ok(out);
        }
        _ => {}
    }

    let frame = read_frame(&cli.data_file)?;
    debug!(rows = frame.len(), columns = frame.width(), "loaded data");

    match stage {
        Stage::Interpret => {
            let result = tnlc_vm::transform(&module, frame)?;
            Ok(result.to_csv())
        }
        Stage::Compile(target) => {
            // Reserved back-end; report instead of guessing semantics.
            Ok(format!("`compile` to target '{target}' is not implemented yet.\n"))
        }
        // Earlier stages returned above.
        Stage::PrintTokens | Stage::PrintAst | Stage::PrintCode | Stage::Check => {
            unreachable!("stage handled before data loading")
        }
    }
}

fn read_frame(data_file: &Path) -> Result<Frame> {
    if !data_file.exists() {
        bail!("Can't find data_file {}.", data_file.display());
    }
    let text = std::fs::read_to_string(data_file)
        .with_context(|| format!("failed to read {}", data_file.display()))?;
    Ok(Frame::from_csv(&text)?)
}

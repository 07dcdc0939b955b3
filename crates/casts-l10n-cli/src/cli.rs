use std::io::{self, Write};

use clap::{Parser, Subcommand};

use crate::coverage::{CoverageArgs, run_coverage};
use crate::error::Result;
use crate::generate::{GenerateArgs, run_generate};
use crate::keys::{KeysArgs, run_keys};
use crate::lint::{LintArgs, run_lint};
use crate::render::{RenderArgs, run_render};

#[derive(Debug, Parser)]
#[command(
    name = "casts-l10n",
    about = "Generate, lint, and inspect the Pocket Casts Localizable string table",
    version
)]
pub struct Cli {
    /// Machine-readable output, including errors and log lines.
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise log verbosity (repeatable). `RUST_LOG` overrides it.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Regenerate the accessor table from a base `.strings` file.
    Generate(GenerateArgs),

    /// Check translations for placeholder and key mismatches.
    Lint(LintArgs),

    /// Report per-locale translation coverage.
    Coverage(CoverageArgs),

    /// Resolve one key, as the app would.
    Render(RenderArgs),

    /// List the compiled keys with their arity and fallback text.
    Keys(KeysArgs),
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Dispatch a parsed command, writing its output to `out`.
pub fn run_to(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Generate(args) => run_generate(args, out),
        Commands::Lint(args) => run_lint(args, json, out),
        Commands::Coverage(args) => run_coverage(args, json, out),
        Commands::Render(args) => run_render(args, json, out),
        Commands::Keys(args) => run_keys(args, json, out),
    }
}

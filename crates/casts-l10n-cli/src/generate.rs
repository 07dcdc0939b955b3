use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use casts_l10n::codegen::{GenerateOptions, generate};
use clap::Args;
use tracing::info;

use crate::error::{CliError, EXIT_CHECK_FAILED, Result};
use crate::util::read_strings;

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Base `.strings` file (usually `en.lproj/Localizable.strings`).
    #[arg(long)]
    pub input: PathBuf,

    /// Destination `.rs` file. Printed to stdout when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Resource table name. Defaults to the input file stem.
    #[arg(long)]
    pub table: Option<String>,

    /// Path of the `localizable!` macro as seen from the generated file.
    #[arg(long = "macro-path", default_value = "crate::localizable")]
    pub macro_path: String,

    /// Accessor trait for tables generated outside `casts-l10n`.
    /// Defaults to `<Table>Strings` when `--macro-path` is not `crate::`.
    #[arg(long = "accessor-trait")]
    pub accessor_trait: Option<String>,

    /// Fail instead of writing when `--output` is out of date.
    #[arg(long, requires = "output")]
    pub check: bool,
}

pub fn run_generate(args: GenerateArgs, out: &mut dyn Write) -> Result<()> {
    let entries = read_strings(&args.input)?;
    let source_name = args
        .input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::invalid(format!("bad input path {}", args.input.display())))?
        .to_string();
    let table = match args.table {
        Some(table) => table,
        None => args
            .input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(casts_l10n::TABLE)
            .to_string(),
    };
    let options = GenerateOptions {
        table,
        source_name,
        macro_path: args.macro_path,
        accessor_trait: args.accessor_trait,
    };
    let generated = generate(&entries, &options)?;

    match &args.output {
        Some(path) if args.check => {
            let current = match fs::read_to_string(path) {
                Ok(current) => current,
                Err(error) if error.kind() == ErrorKind::NotFound => String::new(),
                Err(error) => return Err(error.into()),
            };
            if current != generated {
                return Err(CliError::exit(
                    EXIT_CHECK_FAILED,
                    format!("{} is stale; rerun `casts-l10n generate`", path.display()),
                ));
            }
            info!(path = %path.display(), keys = entries.len(), "generated table is up to date");
        }
        Some(path) => {
            fs::write(path, &generated)?;
            info!(path = %path.display(), keys = entries.len(), "wrote generated table");
        }
        None => out.write_all(generated.as_bytes())?,
    }
    Ok(())
}

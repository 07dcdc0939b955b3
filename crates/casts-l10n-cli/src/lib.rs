#![forbid(unsafe_code)]

//! The `casts-l10n` command-line tool.

pub mod cli;
pub mod coverage;
pub mod error;
pub mod generate;
pub mod keys;
pub mod lint;
pub mod render;
pub mod telemetry;
pub mod util;

pub use cli::{Cli, run, run_to};
pub use error::{CliError, Result};

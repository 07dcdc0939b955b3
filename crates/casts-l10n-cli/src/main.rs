#![forbid(unsafe_code)]

use clap::Parser;

use casts_l10n_cli::{Cli, telemetry};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    if let Err(error) = telemetry::init(cli.verbose, json) {
        eprintln!("{error}");
    }
    if let Err(error) = casts_l10n_cli::run(cli) {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}

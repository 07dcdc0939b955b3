use std::io::Write;
use std::path::PathBuf;

use casts_l10n::lint::{LintReport, lint_catalog, lint_entries};
use casts_l10n::resources::load_dir;
use casts_l10n::strings::ENTRIES;
use clap::Args;
use tracing::{info, warn};

use crate::error::{CliError, Result};
use crate::util::{base_pairs, write_json};

#[derive(Debug, Clone, Args)]
pub struct LintArgs {
    /// Directory of `<locale>.lproj` bundles and `<locale>.json` files.
    #[arg(long)]
    pub resources: PathBuf,

    /// Base `.strings` file. Defaults to the compiled table.
    #[arg(long)]
    pub base: Option<PathBuf>,

    #[arg(long, default_value = casts_l10n::TABLE)]
    pub table: String,
}

pub fn lint_report(args: &LintArgs) -> Result<LintReport> {
    let catalog = load_dir(&args.resources, &args.table)?;
    let base = base_pairs(args.base.as_deref())?;

    let mut report = match args.base {
        Some(_) => LintReport::default(),
        None => lint_entries(ENTRIES),
    };
    report.merge(lint_catalog(
        base.iter().map(|(key, text)| (key.as_str(), text.as_str())),
        &catalog,
    ));
    Ok(report)
}

pub fn run_lint(args: LintArgs, json: bool, out: &mut dyn Write) -> Result<()> {
    let report = lint_report(&args)?;
    for issue in &report.issues {
        warn!(key = issue.key(), %issue, "lint issue");
    }
    info!(
        locales = report.checked_locales.len(),
        keys = report.checked_keys,
        issues = report.issues.len(),
        "lint finished"
    );

    if json {
        write_json(out, &report)?;
    } else {
        for issue in &report.issues {
            writeln!(out, "{issue}")?;
        }
        writeln!(
            out,
            "checked {} key(s) across {} locale(s): {} issue(s)",
            report.checked_keys,
            report.checked_locales.len(),
            report.issues.len()
        )?;
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::LintFailed {
            issues: report.issues.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::error::EXIT_CHECK_FAILED;

    fn bundle(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, body).unwrap();
        }
        dir
    }

    #[test]
    fn clean_bundle_passes() {
        let dir = bundle(&[(
            "de.lproj/Localizable.strings",
            "\"app_version\" = \"Version %1$@ (%2$@)\";",
        )]);
        let args = LintArgs {
            resources: dir.path().to_path_buf(),
            base: None,
            table: "Localizable".into(),
        };
        let mut out = Vec::new();
        run_lint(args, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("across 1 locale(s): 0 issue(s)"), "{text}");
    }

    #[test]
    fn arity_mismatch_fails_with_check_exit_code() {
        let dir = bundle(&[("fr.json", r#"{"app_version": "Version %1$@"}"#)]);
        let args = LintArgs {
            resources: dir.path().to_path_buf(),
            base: None,
            table: "Localizable".into(),
        };
        let mut out = Vec::new();
        let err = run_lint(args, true, &mut out).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_CHECK_FAILED);

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["issues"][0]["kind"], "arity_mismatch");
        assert_eq!(json["issues"][0]["locale"], "fr");
    }

    #[test]
    fn explicit_base_file_is_used() {
        let dir = bundle(&[
            ("base/Localizable.strings", "\"greeting\" = \"Hi %1$@\";"),
            ("res/es.lproj/Localizable.strings", "\"greeting\" = \"Hola %1$@\";"),
        ]);
        let args = LintArgs {
            resources: dir.path().join("res"),
            base: Some(dir.path().join("base/Localizable.strings")),
            table: "Localizable".into(),
        };
        let report = lint_report(&args).unwrap();
        assert!(report.is_clean(), "{:?}", report.issues);
        assert_eq!(report.checked_keys, 1);
    }
}

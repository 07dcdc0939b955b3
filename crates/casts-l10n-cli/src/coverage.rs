use std::io::Write;
use std::path::PathBuf;

use casts_l10n::CoverageReport;
use casts_l10n::resources::load_dir;
use clap::Args;

use crate::error::{CliError, EXIT_CHECK_FAILED, Result};
use crate::util::{base_pairs, write_json};

#[derive(Debug, Clone, Args)]
pub struct CoverageArgs {
    #[arg(long)]
    pub resources: PathBuf,

    /// Base `.strings` file. Defaults to the compiled table.
    #[arg(long)]
    pub base: Option<PathBuf>,

    #[arg(long, default_value = casts_l10n::TABLE)]
    pub table: String,

    /// Fail when any locale is below this percentage.
    #[arg(long = "fail-under")]
    pub fail_under: Option<f32>,
}

pub fn coverage_report(args: &CoverageArgs) -> Result<CoverageReport> {
    let catalog = load_dir(&args.resources, &args.table)?;
    let base = base_pairs(args.base.as_deref())?;
    let reference: Vec<&str> = base.iter().map(|(key, _)| key.as_str()).collect();
    Ok(catalog.coverage_report(&reference))
}

pub fn run_coverage(args: CoverageArgs, json: bool, out: &mut dyn Write) -> Result<()> {
    let report = coverage_report(&args)?;

    if json {
        write_json(out, &report)?;
    } else {
        writeln!(out, "{} ({} keys)", report.table, report.total_keys)?;
        for locale in &report.locales {
            writeln!(
                out,
                "{:<8} {:>6.1}%  {:>5} translated  {:>5} via fallback  {:>5} missing",
                locale.locale,
                locale.coverage_percent,
                locale.present,
                locale.via_fallback,
                locale.missing.len()
            )?;
        }
    }

    if let Some(threshold) = args.fail_under {
        let below: Vec<&str> = report
            .locales
            .iter()
            .filter(|locale| locale.coverage_percent < threshold)
            .map(|locale| locale.locale.as_str())
            .collect();
        if !below.is_empty() {
            return Err(CliError::exit(
                EXIT_CHECK_FAILED,
                format!("coverage below {threshold}%: {}", below.join(", ")),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("base.strings"), "\"a\" = \"A\";\n\"b\" = \"B\";\n\"c\" = \"C\";\n\"d\" = \"D\";").unwrap();
        let res = dir.path().join("res");
        fs::create_dir_all(res.join("pt.lproj")).unwrap();
        fs::write(res.join("pt.lproj/Localizable.strings"), "\"a\" = \"1\";\n\"b\" = \"2\";").unwrap();
        fs::write(res.join("pt-BR.json"), r#"{"a": "um"}"#).unwrap();
        dir
    }

    fn args(dir: &tempfile::TempDir, fail_under: Option<f32>) -> CoverageArgs {
        CoverageArgs {
            resources: dir.path().join("res"),
            base: Some(dir.path().join("base.strings")),
            table: "Localizable".into(),
            fail_under,
        }
    }

    #[test]
    fn reports_direct_and_fallback_coverage() {
        let dir = fixture();
        let report = coverage_report(&args(&dir, None)).unwrap();
        assert_eq!(report.total_keys, 4);
        let pt_br = report.locales.iter().find(|l| l.locale == "pt-BR").unwrap();
        assert_eq!(pt_br.present, 1);
        assert_eq!(pt_br.via_fallback, 1);
        assert_eq!(pt_br.missing, vec!["b", "c", "d"]);
    }

    #[test]
    fn text_output_lists_locales() {
        let dir = fixture();
        let mut out = Vec::new();
        run_coverage(args(&dir, None), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Localizable (4 keys)\n"));
        assert!(text.contains("pt-BR"));
        assert!(text.contains(" 50.0%"));
    }

    #[test]
    fn threshold_failure_names_locales() {
        let dir = fixture();
        let err = run_coverage(args(&dir, Some(40.0)), true, &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_CHECK_FAILED);
        assert_eq!(err.to_string(), "coverage below 40%: pt-BR");
    }
}

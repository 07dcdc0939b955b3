use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

use casts_l10n::{L10nConfig, Locale, Localizer, table};
use clap::Args;
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::util::write_json;

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Key in the compiled table.
    pub key: String,

    /// Positional arguments, in `%1$@`, `%2$@` order.
    pub args: Vec<String>,

    /// Locale to render in. Defaults to the configured or system locale.
    #[arg(long)]
    pub locale: Option<String>,

    /// Translation bundles. Defaults to `CASTS_L10N_RESOURCES`.
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Extra fallback locales, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub fallbacks: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Rendered<'a> {
    key: &'a str,
    locale: Option<String>,
    text: String,
}

pub fn render(args: &RenderArgs, config: L10nConfig) -> Result<(Option<Locale>, String)> {
    let entry = table::find(&args.key).ok_or_else(|| CliError::UnknownKey {
        key: args.key.clone(),
    })?;
    if args.args.len() != entry.arity {
        return Err(CliError::invalid(format!(
            "{} takes {} argument(s), got {}",
            entry.key,
            entry.arity,
            args.args.len()
        )));
    }

    let mut config = config;
    if let Some(raw) = &args.locale {
        config = config.with_locale(Locale::parse(raw)?);
    }
    if let Some(dir) = &args.resources {
        config = config.with_resources(dir.clone());
    }
    if !args.fallbacks.is_empty() {
        let fallbacks = args
            .fallbacks
            .iter()
            .map(|raw| Locale::parse(raw))
            .collect::<casts_l10n::Result<Vec<_>>>()?;
        config = config.with_fallbacks(fallbacks);
    }

    // Unlike the runtime path, a bundle that fails to load is an error here.
    let catalog = config.load_catalog()?;
    let localizer = Localizer::new(catalog, config.resolved_locale(), config.fallbacks.clone());
    let values: Vec<&dyn Display> = args.args.iter().map(|arg| arg as &dyn Display).collect();
    let text = localizer.text(entry.key, &values);
    Ok((localizer.chain().primary().cloned(), text))
}

pub fn run_render(args: RenderArgs, json: bool, out: &mut dyn Write) -> Result<()> {
    let (locale, text) = render(&args, L10nConfig::from_env())?;
    if json {
        write_json(
            out,
            &Rendered {
                key: &args.key,
                locale: locale.map(String::from),
                text,
            },
        )?;
    } else {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args(key: &str, values: &[&str]) -> RenderArgs {
        RenderArgs {
            key: key.to_string(),
            args: values.iter().map(|v| (*v).to_string()).collect(),
            locale: None,
            resources: None,
            fallbacks: Vec::new(),
        }
    }

    #[test]
    fn renders_fallback_without_resources() {
        let (_, text) = render(&args("app_version", &["7.20", "415"]), L10nConfig::default()).unwrap();
        assert_eq!(text, "Version 7.20 (415)");
        let (_, text) = render(&args("plus_offer_badge", &[]), L10nConfig::default()).unwrap();
        assert_eq!(text, "50% off");
    }

    #[test]
    fn renders_translation_for_locale() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("ja.json"),
            r#"{"podcast_by_author_format": "%2$@ の %1$@"}"#,
        )
        .unwrap();
        let mut request = args("podcast_by_author_format", &["Daily", "NPR"]);
        request.locale = Some("ja_JP".into());
        request.resources = Some(dir.path().to_path_buf());

        let (locale, text) = render(&request, L10nConfig::default()).unwrap();
        assert_eq!(text, "NPR の Daily");
        assert_eq!(locale.map(String::from).as_deref(), Some("ja-JP"));
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        let err = render(&args("app_version", &["7.20"]), L10nConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: app_version takes 2 argument(s), got 1");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = render(&args("no_such_key", &[]), L10nConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::UnknownKey { .. }));
    }

    #[test]
    fn unreadable_resources_are_rejected() {
        let mut request = args("discover", &[]);
        request.resources = Some(PathBuf::from("/definitely/not/here"));
        let err = render(&request, L10nConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::L10n(_)), "{err}");

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ja.json"), r#"{"discover": "#).unwrap();
        request.resources = Some(dir.path().to_path_buf());
        assert!(matches!(
            render(&request, L10nConfig::default()),
            Err(CliError::L10n(_))
        ));
    }

    #[test]
    fn invalid_locale_is_rejected() {
        let mut request = args("discover", &[]);
        request.locale = Some("POSIX".into());
        assert!(render(&request, L10nConfig::default()).is_err());
    }
}

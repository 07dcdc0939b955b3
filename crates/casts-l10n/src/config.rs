//! Localizer configuration.
//!
//! Values come from, in increasing precedence: [`Default`], a JSON file, and
//! the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `CASTS_L10N_LOCALE` | `locale` |
//! | `CASTS_L10N_FALLBACKS` | `fallbacks` (comma separated) |
//! | `CASTS_L10N_RESOURCES` | `resources` |
//! | `CASTS_L10N_TABLE` | `table` |

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::catalog::StringCatalog;
use crate::error::Result;
use crate::locale::{LOCALE_ENV, Locale, detect_system_locale};
use crate::resources;
use crate::table::TABLE;

pub const FALLBACKS_ENV: &str = "CASTS_L10N_FALLBACKS";
pub const RESOURCES_ENV: &str = "CASTS_L10N_RESOURCES";
pub const TABLE_ENV: &str = "CASTS_L10N_TABLE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct L10nConfig {
    /// Requested locale; detected from the system when unset.
    pub locale: Option<Locale>,
    /// Locales tried after the requested one and its truncations.
    pub fallbacks: Vec<Locale>,
    /// Directory of translation bundles. Without it only fallback text is used.
    pub resources: Option<PathBuf>,
    /// Resource table name; `Localizable` when unset.
    pub table: Option<String>,
}

impl L10nConfig {
    /// Defaults overlaid with the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().overlay_env(|name| std::env::var(name).ok())
    }

    /// Read a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Unparseable locale values are logged and ignored.
    #[must_use]
    pub fn overlay_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(raw) = present(LOCALE_ENV) {
            match Locale::parse(&raw) {
                Ok(locale) => self.locale = Some(locale),
                Err(error) => warn!(%error, variable = LOCALE_ENV, "ignoring locale override"),
            }
        }
        if let Some(raw) = present(FALLBACKS_ENV) {
            self.fallbacks = raw
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .filter_map(|part| match Locale::parse(part) {
                    Ok(locale) => Some(locale),
                    Err(error) => {
                        warn!(%error, variable = FALLBACKS_ENV, "ignoring fallback locale");
                        None
                    }
                })
                .collect();
        }
        if let Some(raw) = present(RESOURCES_ENV) {
            self.resources = Some(PathBuf::from(raw.trim()));
        }
        if let Some(raw) = present(TABLE_ENV) {
            self.table = Some(raw.trim().to_string());
        }
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    #[must_use]
    pub fn with_fallbacks(mut self, fallbacks: Vec<Locale>) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    #[must_use]
    pub fn with_resources(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources = Some(dir.into());
        self
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(TABLE)
    }

    /// The configured locale, or the detected system locale.
    #[must_use]
    pub fn resolved_locale(&self) -> Option<Locale> {
        self.locale.clone().or_else(detect_system_locale)
    }

    /// Load the configured bundles; an empty catalog when none are configured.
    ///
    /// Any malformed bundle is an error.
    pub fn load_catalog(&self) -> Result<StringCatalog> {
        match &self.resources {
            Some(dir) => resources::load_dir(dir, self.table_name()),
            None => Ok(StringCatalog::new(self.table_name())),
        }
    }

    /// Load the configured bundles for display, leaving out malformed ones.
    pub fn load_runtime_catalog(&self) -> Result<StringCatalog> {
        match &self.resources {
            Some(dir) => resources::load_dir_lenient(dir, self.table_name()),
            None => Ok(StringCatalog::new(self.table_name())),
        }
    }
}

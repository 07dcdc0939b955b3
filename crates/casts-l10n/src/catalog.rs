//! Per-locale string tables with chain lookup and coverage reporting.
//!
//! # Invariants
//!
//! 1. **Chain walk terminates**: every lookup visits each locale of the
//!    chain at most once and returns `None` if none provides the key.
//! 2. **Immutable once shared**: a catalog is built, then wrapped in an
//!    `Arc` by the localizer and never mutated again.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | No locale in the chain has it | Returns `None` |
//! | Missing locale | Locale never loaded | Skipped during the walk |
//! | Plural lookup on simple entry | Key translated without forms | Simple text returned |
//! | Simple lookup on plural entry | Key translated with forms | `other` form returned |

use std::collections::HashMap;

use serde::Serialize;

use crate::locale::{Locale, LocaleChain};
use crate::plural::{PluralCategory, PluralForms, PluralRule};

/// A single translation: plain text or plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringEntry {
    Simple(String),
    Plural(PluralForms),
}

impl StringEntry {
    /// The text used when no count is known.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Simple(s) => s.as_str(),
            Self::Plural(forms) => forms.other.as_str(),
        }
    }

    /// Text for a plural category.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &str {
        match self {
            Self::Simple(s) => s.as_str(),
            Self::Plural(forms) => forms.select(category),
        }
    }
}

/// Translations for one locale of one table.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, StringEntry>,
}

impl LocaleStrings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert plain text, returning the previous entry for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<StringEntry> {
        self.strings
            .insert(key.into(), StringEntry::Simple(value.into()))
    }

    pub fn insert_plural(&mut self, key: impl Into<String>, forms: PluralForms) -> Option<StringEntry> {
        self.strings.insert(key.into(), StringEntry::Plural(forms))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StringEntry> {
        self.strings.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StringEntry)> {
        self.strings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Move every entry of `other` into `self`; `other` wins on conflicts.
    pub fn extend(&mut self, other: LocaleStrings) {
        self.strings.extend(other.strings);
    }
}

/// All loaded locales of one resource table.
///
/// # Example
///
/// ```
/// use casts_l10n::catalog::{LocaleStrings, StringCatalog};
/// use casts_l10n::locale::{Locale, LocaleChain};
///
/// let mut catalog = StringCatalog::new("Localizable");
/// let mut es = LocaleStrings::new();
/// es.insert("account_login", "Iniciar sesión");
/// catalog.add_locale(Locale::parse("es").unwrap(), es);
///
/// let chain = LocaleChain::for_locale(&Locale::parse("es-MX").unwrap(), &[]);
/// assert_eq!(catalog.lookup(&chain, "account_login"), Some("Iniciar sesión"));
/// assert_eq!(catalog.lookup(&chain, "account_logout"), None);
/// ```
#[derive(Debug, Clone)]
pub struct StringCatalog {
    table: String,
    locales: HashMap<Locale, LocaleStrings>,
    plural_rules: HashMap<Locale, PluralRule>,
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::new(crate::table::TABLE)
    }
}

impl StringCatalog {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            locales: HashMap::new(),
            plural_rules: HashMap::new(),
        }
    }

    /// Resource table name (`Localizable`).
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Add strings for a locale, merging into any already loaded.
    ///
    /// The plural rule is derived from the tag unless one was set.
    pub fn add_locale(&mut self, locale: Locale, strings: LocaleStrings) {
        self.plural_rules
            .entry(locale.clone())
            .or_insert_with(|| PluralRule::for_locale(locale.as_str()));
        self.locales.entry(locale).or_default().extend(strings);
    }

    /// Override the plural rule of `locale`, before or after it is added.
    pub fn set_plural_rule(&mut self, locale: Locale, rule: PluralRule) {
        self.plural_rules.insert(locale, rule);
    }

    #[must_use]
    pub fn locale(&self, locale: &Locale) -> Option<&LocaleStrings> {
        self.locales.get(locale)
    }

    /// Look up a key in exactly one locale.
    #[must_use]
    pub fn get(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.entry(locale, key).map(StringEntry::text)
    }

    fn entry(&self, locale: &Locale, key: &str) -> Option<&StringEntry> {
        self.locales.get(locale).and_then(|ls| ls.get(key))
    }

    /// First translation of `key` along `chain`.
    #[must_use]
    pub fn lookup(&self, chain: &LocaleChain, key: &str) -> Option<&str> {
        chain.iter().find_map(|locale| self.get(locale, key))
    }

    /// Locale that supplied `key` along `chain`, with its entry.
    #[must_use]
    pub fn lookup_entry<'s, 'c>(
        &'s self,
        chain: &'c LocaleChain,
        key: &str,
    ) -> Option<(&'c Locale, &'s StringEntry)> {
        chain
            .iter()
            .find_map(|locale| self.entry(locale, key).map(|entry| (locale, entry)))
    }

    /// Plural-aware lookup along `chain`.
    ///
    /// The category is computed with the rule of the locale that supplies
    /// the entry, not the head of the chain.
    #[must_use]
    pub fn get_plural(&self, chain: &LocaleChain, key: &str, count: i64) -> Option<&str> {
        let (locale, entry) = self.lookup_entry(chain, key)?;
        Some(entry.select(self.plural_rule(locale).categorize(count)))
    }

    #[must_use]
    pub fn plural_rule(&self, locale: &Locale) -> PluralRule {
        self.plural_rules
            .get(locale)
            .cloned()
            .unwrap_or_else(|| PluralRule::for_locale(locale.as_str()))
    }

    /// Loaded locales, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&Locale> {
        let mut tags: Vec<&Locale> = self.locales.keys().collect();
        tags.sort_unstable();
        tags
    }

    /// Every key of every locale, sorted and deduplicated.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|ls| ls.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys of `reference` that `chain` cannot resolve, sorted.
    #[must_use]
    pub fn missing_keys(&self, chain: &LocaleChain, reference: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference
            .iter()
            .filter(|key| self.lookup(chain, key).is_none())
            .map(|key| (*key).to_string())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Coverage of `reference` keys for every loaded locale.
    ///
    /// Each locale is checked on its own (no chain walk), so the report shows
    /// what translators actually delivered.
    #[must_use]
    pub fn coverage_report(&self, reference: &[&str]) -> CoverageReport {
        let total = reference.len();
        let locales = self
            .locales()
            .into_iter()
            .map(|locale| {
                let chain = LocaleChain::for_locale(locale, &[]);
                let mut missing: Vec<String> = reference
                    .iter()
                    .filter(|key| self.get(locale, key).is_none())
                    .map(|key| (*key).to_string())
                    .collect();
                missing.sort_unstable();
                let present = total.saturating_sub(missing.len());
                let via_fallback = missing
                    .iter()
                    .filter(|key| self.lookup(&chain, key).is_some())
                    .count();
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale: locale.to_string(),
                    present,
                    via_fallback,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            table: self.table.clone(),
            total_keys: total,
            locales,
        }
    }
}

/// Translation coverage of a catalog against a reference key set.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub table: String,
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Reference keys translated directly in this locale.
    pub present: usize,
    /// Missing keys a shorter tag (`pt` for `pt-BR`) still covers.
    pub via_fallback: usize,
    pub missing: Vec<String>,
    /// 0.0 to 100.0.
    pub coverage_percent: f32,
}

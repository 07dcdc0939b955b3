//! Placeholder consistency checks between the base table and translations.
//!
//! An accessor's arity is fixed by its English fallback. A translation that
//! references a different number of arguments would render raw `%2$@`
//! tokens or drop values at runtime, so these checks turn that into a
//! build-time failure instead.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{StringCatalog, StringEntry};
use crate::format::analyze;
use crate::table::LocalizationEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintIssue {
    /// Declared accessor arity differs from its fallback text.
    DeclaredArity {
        key: String,
        declared: usize,
        found: usize,
    },
    /// A translation needs a different number of arguments than the base.
    ArityMismatch {
        locale: String,
        key: String,
        expected: usize,
        found: usize,
    },
    /// Translated key that the base table does not define.
    UnknownKey { locale: String, key: String },
    /// Positional indices skip a number (`%1$@ … %3$@`).
    PlaceholderGap {
        locale: Option<String>,
        key: String,
        missing: Vec<usize>,
    },
    /// `%1$@` and `%@` used in the same template.
    MixedPlaceholders { locale: Option<String>, key: String },
}

impl LintIssue {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::DeclaredArity { key, .. }
            | Self::ArityMismatch { key, .. }
            | Self::UnknownKey { key, .. }
            | Self::PlaceholderGap { key, .. }
            | Self::MixedPlaceholders { key, .. } => key,
        }
    }
}

impl std::fmt::Display for LintIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = |locale: &Option<String>| locale.clone().unwrap_or_else(|| "base".to_string());
        match self {
            Self::DeclaredArity { key, declared, found } => {
                write!(f, "base: {key}: declared {declared} argument(s), fallback uses {found}")
            }
            Self::ArityMismatch {
                locale,
                key,
                expected,
                found,
            } => write!(f, "{locale}: {key}: expects {expected} argument(s), translation uses {found}"),
            Self::UnknownKey { locale, key } => write!(f, "{locale}: {key}: not in base table"),
            Self::PlaceholderGap {
                locale,
                key,
                missing,
            } => write!(f, "{}: {key}: placeholders skip {missing:?}", scope(locale)),
            Self::MixedPlaceholders { locale, key } => write!(
                f,
                "{}: {key}: mixes positional and sequential placeholders",
                scope(locale)
            ),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub checked_keys: usize,
    pub checked_locales: Vec<String>,
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Append another report's findings.
    pub fn merge(&mut self, other: LintReport) {
        self.checked_keys = self.checked_keys.max(other.checked_keys);
        self.checked_locales.extend(other.checked_locales);
        self.checked_locales.sort();
        self.checked_locales.dedup();
        self.issues.extend(other.issues);
    }
}

fn shape_issues(locale: Option<&str>, key: &str, template: &str, out: &mut Vec<LintIssue>) {
    let shape = analyze(template);
    let gaps = shape.gaps();
    if !gaps.is_empty() {
        out.push(LintIssue::PlaceholderGap {
            locale: locale.map(str::to_string),
            key: key.to_string(),
            missing: gaps,
        });
    }
    if shape.mixed {
        out.push(LintIssue::MixedPlaceholders {
            locale: locale.map(str::to_string),
            key: key.to_string(),
        });
    }
}

/// Check the generated table against its own fallback text.
#[must_use]
pub fn lint_entries(entries: &[LocalizationEntry]) -> LintReport {
    let mut issues = Vec::new();
    for entry in entries {
        let found = analyze(entry.fallback).arity;
        if found != entry.arity {
            issues.push(LintIssue::DeclaredArity {
                key: entry.key.to_string(),
                declared: entry.arity,
                found,
            });
        }
        shape_issues(None, entry.key, entry.fallback, &mut issues);
    }
    LintReport {
        checked_keys: entries.len(),
        checked_locales: Vec::new(),
        issues,
    }
}

/// Check every translation in `catalog` against `base` (key → template).
#[must_use]
pub fn lint_catalog<'a>(
    base: impl IntoIterator<Item = (&'a str, &'a str)>,
    catalog: &StringCatalog,
) -> LintReport {
    let expected: BTreeMap<&str, usize> = base
        .into_iter()
        .map(|(key, template)| (key, analyze(template).arity))
        .collect();
    let mut report = LintReport {
        checked_keys: expected.len(),
        ..LintReport::default()
    };

    for locale in catalog.locales() {
        report.checked_locales.push(locale.to_string());
        let Some(strings) = catalog.locale(locale) else {
            continue;
        };
        let mut entries: Vec<(&str, &StringEntry)> = strings.iter().collect();
        entries.sort_by_key(|(key, _)| *key);

        for (key, entry) in entries {
            let Some(&want) = expected.get(key) else {
                report.issues.push(LintIssue::UnknownKey {
                    locale: locale.to_string(),
                    key: key.to_string(),
                });
                continue;
            };
            let found = match entry {
                StringEntry::Simple(text) => {
                    shape_issues(Some(locale.as_str()), key, text, &mut report.issues);
                    analyze(text).arity
                }
                StringEntry::Plural(forms) => forms
                    .templates()
                    .map(|text| {
                        shape_issues(Some(locale.as_str()), key, text, &mut report.issues);
                        analyze(text).arity
                    })
                    .max()
                    .unwrap_or(0),
            };
            if found != want {
                report.issues.push(LintIssue::ArityMismatch {
                    locale: locale.to_string(),
                    key: key.to_string(),
                    expected: want,
                    found,
                });
            }
        }
    }
    report
}

//! Locale tags, fallback chains, and system locale detection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{L10nError, Result};

/// Environment variable that overrides every other locale source.
pub const LOCALE_ENV: &str = "CASTS_L10N_LOCALE";

/// A normalized locale tag such as `en`, `pt-BR`, or `zh-Hans`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Normalize a POSIX or BCP 47 style tag.
    ///
    /// `pt_BR.UTF-8` becomes `pt-BR`, `en_us@euro` becomes `en-US`, and
    /// `zh-hans` becomes `zh-Hans`. `C`, `POSIX`, and empty tags are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut tag = raw.trim();
        if let Some(idx) = tag.find(['.', '@']) {
            tag = &tag[..idx];
        }
        if tag.is_empty() || tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
            return Err(L10nError::InvalidLocale(raw.to_string()));
        }

        let mut parts = Vec::new();
        for (i, part) in tag.split(['-', '_']).enumerate() {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(L10nError::InvalidLocale(raw.to_string()));
            }
            let normalized = match (i, part.len()) {
                (0, 2..=3) if part.chars().all(|c| c.is_ascii_alphabetic()) => {
                    part.to_ascii_lowercase()
                }
                (0, _) => return Err(L10nError::InvalidLocale(raw.to_string())),
                (_, 4) => {
                    let mut chars = part.chars();
                    let first = chars.next().map(|c| c.to_ascii_uppercase());
                    first
                        .into_iter()
                        .chain(chars.map(|c| c.to_ascii_lowercase()))
                        .collect()
                }
                (_, 2) | (_, 3) if part.chars().all(|c| c.is_ascii_digit()) => part.to_string(),
                (_, 2) => part.to_ascii_uppercase(),
                _ => part.to_ascii_lowercase(),
            };
            parts.push(normalized);
        }
        Ok(Self(parts.join("-")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`pt` for `pt-BR`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Progressively shorter tags: `zh-Hans-CN`, `zh-Hans`, `zh`.
    #[must_use]
    pub fn truncations(&self) -> Vec<Locale> {
        let parts: Vec<&str> = self.0.split('-').collect();
        (1..=parts.len())
            .rev()
            .map(|n| Locale(parts[..n].join("-")))
            .collect()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Locale {
    type Error = L10nError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl std::str::FromStr for Locale {
    type Err = L10nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Ordered list of locales consulted for a key before the fallback text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleChain {
    locales: Vec<Locale>,
}

impl LocaleChain {
    /// Chain for `locale`: its truncations, then `extra`, without duplicates.
    #[must_use]
    pub fn for_locale(locale: &Locale, extra: &[Locale]) -> Self {
        let mut locales: Vec<Locale> = Vec::new();
        for candidate in locale.truncations().into_iter().chain(extra.iter().cloned()) {
            if !locales.contains(&candidate) {
                locales.push(candidate);
            }
        }
        Self { locales }
    }

    /// Chain over an explicit list. Only the head is truncated.
    #[must_use]
    pub fn for_locale_list(locales: &[Locale]) -> Self {
        match locales.split_first() {
            Some((first, rest)) => Self::for_locale(first, rest),
            None => Self::empty(),
        }
    }

    /// An empty chain: every lookup resolves to the fallback text.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The requested locale (head of the chain), if any.
    #[must_use]
    pub fn primary(&self) -> Option<&Locale> {
        self.locales.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Resolve the user's locale from the environment.
///
/// Checks `CASTS_L10N_LOCALE`, `LC_ALL`, `LC_MESSAGES`, and `LANG` in order,
/// then asks the operating system. Unparseable values are skipped.
#[must_use]
pub fn detect_system_locale() -> Option<Locale> {
    detect_from(|name| std::env::var(name).ok(), sys_locale::get_locale)
}

fn detect_from(
    env: impl Fn(&str) -> Option<String>,
    os: impl FnOnce() -> Option<String>,
) -> Option<Locale> {
    for name in [LOCALE_ENV, "LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Some(locale) = env(name).and_then(|value| Locale::parse(&value).ok()) {
            return Some(locale);
        }
    }
    os().and_then(|value| Locale::parse(&value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[test]
    fn parse_normalizes_posix_tags() {
        assert_eq!(loc("pt_BR.UTF-8").as_str(), "pt-BR");
        assert_eq!(loc("en_us@euro").as_str(), "en-US");
        assert_eq!(loc("zh-hans-cn").as_str(), "zh-Hans-CN");
        assert_eq!(loc("es-419").as_str(), "es-419");
        assert_eq!(loc(" DE ").as_str(), "de");
    }

    #[test]
    fn parse_rejects_non_locales() {
        for raw in ["", "C", "POSIX", "c.UTF-8", "e", "english", "en--US", "en_$$"] {
            assert!(Locale::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn truncations_shrink_to_language() {
        let tags: Vec<String> = loc("zh-Hans-CN")
            .truncations()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tags, vec!["zh-Hans-CN", "zh-Hans", "zh"]);
        assert_eq!(loc("zh-Hans-CN").language(), "zh");
    }

    #[test]
    fn chain_appends_extra_without_duplicates() {
        let chain = LocaleChain::for_locale(&loc("es-MX"), &[loc("es"), loc("en")]);
        let tags: Vec<&str> = chain.iter().map(Locale::as_str).collect();
        assert_eq!(tags, vec!["es-MX", "es", "en"]);
        assert_eq!(chain.primary(), Some(&loc("es-MX")));
    }

    #[test]
    fn serde_round_trips_through_normalized_tag() {
        let parsed: Locale = serde_json::from_str("\"pt_BR\"").unwrap();
        assert_eq!(parsed.as_str(), "pt-BR");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"pt-BR\"");
        assert!(serde_json::from_str::<Locale>("\"C\"").is_err());
    }

    #[test]
    fn detection_prefers_override_variable() {
        let env = |name: &str| match name {
            LOCALE_ENV => Some("fr_CA".to_string()),
            "LANG" => Some("de_DE.UTF-8".to_string()),
            _ => None,
        };
        assert_eq!(detect_from(env, || None), Some(loc("fr-CA")));
    }

    #[test]
    fn detection_skips_c_locale_and_uses_os() {
        let env = |name: &str| match name {
            "LC_ALL" => Some("C".to_string()),
            _ => None,
        };
        assert_eq!(detect_from(env, || Some("ja-JP".to_string())), Some(loc("ja-JP")));
        assert_eq!(detect_from(|_: &str| None, || None), None);
    }
}

//! CLDR-style plural categories and per-language selection rules.
//!
//! Only integer counts are modelled; negative counts use their absolute
//! value for every built-in rule.

use serde::Deserialize;

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Plural selection rule for a language.
#[derive(Debug, Clone)]
pub enum PluralRule {
    /// one: n = 1; other.
    English,
    /// one: n in 0..=1; other.
    French,
    /// one/few/many by last digits (East Slavic).
    Russian,
    /// one/few/many with the Polish `one` exception.
    Polish,
    /// zero/one/two/few/many/other.
    Arabic,
    /// Always other (Chinese, Japanese, Korean, …).
    CJK,
    /// Caller-supplied rule.
    Custom(fn(u64) -> PluralCategory),
}

impl PluralRule {
    /// Pick the built-in rule for a locale tag; unknown languages use English.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "fr" | "pt" => Self::French,
            "ru" | "uk" | "be" => Self::Russian,
            "pl" => Self::Polish,
            "ar" => Self::Arabic,
            "zh" | "ja" | "ko" | "vi" | "th" | "id" | "ms" => Self::CJK,
            _ => Self::English,
        }
    }

    #[must_use]
    pub fn categorize(&self, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        match self {
            Self::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::Russian => {
                let (m10, m100) = (n % 10, n % 100);
                if m10 == 1 && m100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                let (m10, m100) = (n % 10, n % 100);
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Arabic => {
                let m100 = n % 100;
                match n {
                    0 => PluralCategory::Zero,
                    1 => PluralCategory::One,
                    2 => PluralCategory::Two,
                    _ if (3..=10).contains(&m100) => PluralCategory::Few,
                    _ if (11..=99).contains(&m100) => PluralCategory::Many,
                    _ => PluralCategory::Other,
                }
            }
            Self::CJK => PluralCategory::Other,
            Self::Custom(rule) => rule(n),
        }
    }
}

/// Templates for each plural category. Only `other` is required; CJK
/// languages supply nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluralForms {
    #[serde(default)]
    pub zero: Option<String>,
    #[serde(default)]
    pub one: Option<String>,
    #[serde(default)]
    pub two: Option<String>,
    #[serde(default)]
    pub few: Option<String>,
    #[serde(default)]
    pub many: Option<String>,
    pub other: String,
}

impl PluralForms {
    /// Template for `category`, falling back to `other` when absent.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &str {
        let form = match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => Some(self.other.as_str()),
        };
        form.unwrap_or(&self.other)
    }

    /// Every template present, for placeholder checks.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        [
            self.zero.as_deref(),
            self.one.as_deref(),
            self.two.as_deref(),
            self.few.as_deref(),
            self.many.as_deref(),
            Some(self.other.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}

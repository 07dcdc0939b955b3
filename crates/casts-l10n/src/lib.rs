#![forbid(unsafe_code)]

//! Localized strings for Pocket Casts.
//!
//! Every user-facing string lives in the `Localizable` table as a key, an
//! English fallback, and a fixed number of positional arguments. The table
//! is generated from `resources/en.lproj/Localizable.strings` into
//! [`strings`], which exposes one typed accessor per key:
//!
//! ```
//! use casts_l10n::strings;
//!
//! assert_eq!(strings::episode_shorthand_format_short("12"), "EP 12");
//! ```
//!
//! # How resolution works
//! An accessor hands `("Localizable", key, fallback, args)` to a
//! [`Localizer`]. The localizer walks its [`LocaleChain`] through the loaded
//! [`StringCatalog`], uses the fallback text when no locale has the key, and
//! substitutes `%1$@`-style placeholders by position. Resolution never
//! fails; content problems are caught by [`lint`] instead.
//!
//! # Tooling
//! [`codegen`] and [`lint`] back the `casts-l10n` command-line tool, which
//! regenerates [`strings`] and checks translations before they ship.

pub mod catalog;
pub mod codegen;
pub mod config;
pub mod error;
pub mod format;
pub mod lint;
pub mod locale;
pub mod localizer;
pub mod plural;
pub mod resources;
/// Generated accessors for the `Localizable` table.
pub mod strings;
pub mod table;

pub use catalog::{CoverageReport, LocaleCoverage, LocaleStrings, StringCatalog, StringEntry};
pub use config::L10nConfig;
pub use error::{L10nError, Result};
pub use format::format_template;
pub use lint::{LintIssue, LintReport};
pub use locale::{Locale, LocaleChain};
pub use localizer::Localizer;
pub use plural::{PluralCategory, PluralForms, PluralRule};
pub use table::{L10n, LocalizationEntry, TABLE};

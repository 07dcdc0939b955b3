//! The `Localizable` entry table and its typed accessor surface.
//!
//! Entries are declared once with [`localizable!`](crate::localizable),
//! which expands to:
//!
//! - a `static ENTRIES: &[LocalizationEntry]` in declaration order,
//! - one method per key on [`L10n`], bound to an explicit [`Localizer`],
//! - one free function per key using the process-wide localizer.
//!
//! Arity is part of the generated signature, so calling an accessor with the
//! wrong number of arguments is a compile error.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::localizer::Localizer;

/// Name of the resource table every generated entry belongs to.
pub const TABLE: &str = "Localizable";

/// One generated string: key, table, English fallback, and argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizationEntry {
    pub key: &'static str,
    pub table: &'static str,
    pub fallback: &'static str,
    pub arity: usize,
}

/// Look up a generated entry by key.
#[must_use]
pub fn find(key: &str) -> Option<&'static LocalizationEntry> {
    static INDEX: OnceLock<HashMap<&'static str, &'static LocalizationEntry>> = OnceLock::new();
    INDEX
        .get_or_init(|| {
            crate::strings::ENTRIES
                .iter()
                .map(|entry| (entry.key, entry))
                .collect()
        })
        .get(key)
        .copied()
}

/// Typed accessors bound to a [`Localizer`].
///
/// ```
/// use casts_l10n::{L10n, Localizer};
///
/// let localizer = Localizer::fallback_only();
/// let l10n = L10n::new(&localizer);
/// assert_eq!(l10n.app_version("7.20", 415), "Version 7.20 (415)");
/// assert_eq!(l10n.plus_offer_badge(), "50% off");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct L10n<'a> {
    localizer: &'a Localizer,
}

impl<'a> L10n<'a> {
    #[must_use]
    pub fn new(localizer: &'a Localizer) -> Self {
        Self { localizer }
    }

    #[must_use]
    pub fn localizer(&self) -> &'a Localizer {
        self.localizer
    }
}

impl L10n<'static> {
    /// Accessors over [`Localizer::global`].
    #[must_use]
    pub fn global() -> Self {
        Self::new(Localizer::global())
    }
}

/// Declare `Localizable` entries and their accessors.
///
/// A leading `@table "Name";` places the entries in another table.
///
/// ```ignore
/// localizable! {
///     /// Log In
///     account_login = "Log In";
///     /// Version %1$@ (%2$@)
///     app_version(p1, p2) = "Version %1$@ (%2$@)";
/// }
/// ```
///
/// Outside this crate the methods cannot be added to [`L10n`] directly, so
/// the table also names an accessor trait, implemented for [`L10n`]:
///
/// ```
/// mod info_plist {
///     casts_l10n::localizable! {
///         @table "InfoPlist";
///         @trait InfoPlistStrings;
///         app_display_name = "Pocket Casts";
///     }
/// }
/// use info_plist::InfoPlistStrings;
///
/// let localizer = casts_l10n::Localizer::fallback_only();
/// let l10n = casts_l10n::L10n::new(&localizer);
/// assert_eq!(l10n.app_display_name(), "Pocket Casts");
/// assert_eq!(info_plist::ENTRIES[0].table, "InfoPlist");
/// ```
#[macro_export]
macro_rules! localizable {
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => {
        1usize + $crate::localizable!(@count $($tail)*)
    };
    (@entries $table:expr; $( $name:ident ( $($arg:ident)* ) = $fallback:literal; )*) => {
        /// Every entry of the table, in declaration order.
        pub static ENTRIES: &[$crate::table::LocalizationEntry] = &[
            $(
                $crate::table::LocalizationEntry {
                    key: stringify!($name),
                    table: $table,
                    fallback: $fallback,
                    arity: $crate::localizable!(@count $($arg)*),
                },
            )*
        ];
    };
    (
        @table $table:expr;
        @trait $accessors:ident;
        $(
            $(#[$meta:meta])*
            $name:ident $( ( $($arg:ident),+ ) )? = $fallback:literal;
        )*
    ) => {
        $crate::localizable!(@entries $table; $( $name ( $($($arg)+)? ) = $fallback; )*);

        /// Typed accessors for this table.
        pub trait $accessors {
            $(
                $(#[$meta])*
                #[must_use]
                fn $name(&self $($(, $arg: impl ::std::fmt::Display)+)?) -> String;
            )*
        }

        impl $accessors for $crate::table::L10n<'_> {
            $(
                fn $name(&self $($(, $arg: impl ::std::fmt::Display)+)?) -> String {
                    self.localizer().resolve(
                        $table,
                        stringify!($name),
                        $fallback,
                        &[$($(&$arg as &dyn ::std::fmt::Display),+)?],
                    )
                }
            )*
        }

        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name($($($arg: impl ::std::fmt::Display),+)?) -> String {
                <$crate::table::L10n<'static> as $accessors>::$name(
                    &$crate::table::L10n::global()
                    $($(, $arg)+)?
                )
            }
        )*
    };
    (
        @table $table:expr;
        $(
            $(#[$meta:meta])*
            $name:ident $( ( $($arg:ident),+ ) )? = $fallback:literal;
        )*
    ) => {
        $crate::localizable!(@entries $table; $( $name ( $($($arg)+)? ) = $fallback; )*);

        impl $crate::table::L10n<'_> {
            $(
                $(#[$meta])*
                #[must_use]
                pub fn $name(&self $($(, $arg: impl ::std::fmt::Display)+)?) -> String {
                    self.localizer().resolve(
                        $table,
                        stringify!($name),
                        $fallback,
                        &[$($(&$arg as &dyn ::std::fmt::Display),+)?],
                    )
                }
            )*
        }

        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name($($($arg: impl ::std::fmt::Display),+)?) -> String {
                $crate::table::L10n::global().$name($($($arg),+)?)
            }
        )*
    };
    (
        $(
            $(#[$meta:meta])*
            $name:ident $( ( $($arg:ident),+ ) )? = $fallback:literal;
        )*
    ) => {
        $crate::localizable! {
            @table $crate::table::TABLE;
            $(
                $(#[$meta])*
                $name $( ( $($arg),+ ) )? = $fallback;
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::format::{analyze, template_arity};
    use crate::strings::ENTRIES;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in ENTRIES {
            assert!(seen.insert(entry.key), "duplicate key {}", entry.key);
        }
    }

    #[test]
    fn declared_arity_matches_fallback_placeholders() {
        for entry in ENTRIES {
            assert_eq!(
                entry.arity,
                template_arity(entry.fallback),
                "{}: declared arity disagrees with {:?}",
                entry.key,
                entry.fallback
            );
        }
    }

    #[test]
    fn fallbacks_have_no_placeholder_gaps() {
        for entry in ENTRIES {
            let shape = analyze(entry.fallback);
            assert!(shape.gaps().is_empty(), "{} skips {:?}", entry.key, shape.gaps());
            assert!(!shape.mixed, "{} mixes positional and sequential", entry.key);
        }
    }

    #[test]
    fn every_entry_is_in_the_localizable_table() {
        assert!(ENTRIES.iter().all(|entry| entry.table == TABLE));
    }

    #[test]
    fn find_returns_generated_entry() {
        let entry = find("app_version").expect("app_version is generated");
        assert_eq!(entry.fallback, "Version %1$@ (%2$@)");
        assert_eq!(entry.arity, 2);
        assert!(find("no_such_key").is_none());
    }

    #[test]
    fn count_helper_counts_identifiers() {
        assert_eq!(crate::localizable!(@count), 0);
        assert_eq!(crate::localizable!(@count a b c), 3);
    }
}

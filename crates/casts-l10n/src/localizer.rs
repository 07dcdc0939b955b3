//! The resolution primitive behind every accessor.
//!
//! A [`Localizer`] pairs an immutable [`StringCatalog`] with the active
//! [`LocaleChain`]. The chain lives in an [`ArcSwap`], so reads are
//! wait-free and a locale switch is a single atomic store. Each call loads
//! the chain once and uses that snapshot for the whole lookup, so a
//! concurrent switch never mixes two locales within one string.
//!
//! Resolution never fails: a key no locale provides resolves to the
//! fallback text compiled into the accessor.

use std::fmt::Display;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use tracing::{debug, warn};

use crate::catalog::StringCatalog;
use crate::config::L10nConfig;
use crate::format::{format_template, template_arity};
use crate::locale::{Locale, LocaleChain};
use crate::plural::{PluralForms, PluralRule};
use crate::table;

static GLOBAL: OnceLock<Localizer> = OnceLock::new();

pub struct Localizer {
    catalog: Arc<StringCatalog>,
    chain: ArcSwap<LocaleChain>,
    extra_fallbacks: Vec<Locale>,
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("table", &self.catalog.table())
            .field("locales", &self.catalog.locales())
            .field("chain", &*self.chain.load())
            .finish()
    }
}

impl Localizer {
    /// Localizer over `catalog`, starting in `locale`.
    #[must_use]
    pub fn new(catalog: StringCatalog, locale: Option<Locale>, extra_fallbacks: Vec<Locale>) -> Self {
        let chain = match &locale {
            Some(locale) => LocaleChain::for_locale(locale, &extra_fallbacks),
            None => LocaleChain::for_locale_list(&extra_fallbacks),
        };
        Self {
            catalog: Arc::new(catalog),
            chain: ArcSwap::from_pointee(chain),
            extra_fallbacks,
        }
    }

    /// A localizer with no translations: every accessor yields its fallback.
    #[must_use]
    pub fn fallback_only() -> Self {
        Self::new(StringCatalog::default(), None, Vec::new())
    }

    /// Build from configuration, degrading to fallback text on load errors.
    ///
    /// A malformed bundle only drops its own locale.
    #[must_use]
    pub fn from_config(config: &L10nConfig) -> Self {
        let catalog = match config.load_runtime_catalog() {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(%error, "failed to load translations; using fallback text");
                StringCatalog::default()
            }
        };
        Self::new(catalog, config.resolved_locale(), config.fallbacks.clone())
    }

    /// The process-wide localizer used by the free accessor functions.
    ///
    /// Initialized on first use from [`L10nConfig::from_env`] unless
    /// [`install_global`](Self::install_global) ran first.
    pub fn global() -> &'static Localizer {
        GLOBAL.get_or_init(|| Self::from_config(&L10nConfig::from_env()))
    }

    /// Install the process-wide localizer. Returns it back if one is
    /// already in place.
    pub fn install_global(localizer: Localizer) -> Result<(), Localizer> {
        GLOBAL.set(localizer)
    }

    #[must_use]
    pub fn catalog(&self) -> &StringCatalog {
        &self.catalog
    }

    /// Snapshot of the active chain.
    #[must_use]
    pub fn chain(&self) -> Arc<LocaleChain> {
        self.chain.load_full()
    }

    /// Switch locale. Calls already in flight finish with their snapshot.
    pub fn set_locale(&self, locale: &Locale) {
        debug!(locale = %locale, "switching active locale");
        self.chain
            .store(Arc::new(LocaleChain::for_locale(locale, &self.extra_fallbacks)));
    }

    /// Resolve `key` in `table` and substitute `args`.
    ///
    /// Uses `fallback` when no locale in the active chain has the key.
    #[must_use]
    pub fn resolve(&self, table: &str, key: &str, fallback: &str, args: &[&dyn Display]) -> String {
        let chain = self.chain.load();
        let template = self.template(&chain, table, key).unwrap_or_else(|| {
            debug!(table, key, "no translation; using fallback text");
            fallback
        });
        self.substitute(key, template, args)
    }

    /// Plural-aware variant of [`resolve`](Self::resolve).
    ///
    /// Like `resolve`, only `table` entries of the loaded catalog are used.
    /// `fallback` is selected with the English rule when no translation
    /// exists. The count is not injected; pass it in `args` if the template
    /// references it.
    #[must_use]
    pub fn resolve_plural(
        &self,
        table: &str,
        key: &str,
        count: i64,
        fallback: &PluralForms,
        args: &[&dyn Display],
    ) -> String {
        let chain = self.chain.load();
        let translated = if table == self.catalog.table() {
            self.catalog.get_plural(&chain, key, count)
        } else {
            None
        };
        let template = translated.unwrap_or_else(|| {
            debug!(table, key, count, "no plural translation; using fallback forms");
            fallback.select(PluralRule::English.categorize(count))
        });
        self.substitute(key, template, args)
    }

    /// Resolve a generated key by name. Unknown keys render as the key.
    #[must_use]
    pub fn text(&self, key: &str, args: &[&dyn Display]) -> String {
        match table::find(key) {
            Some(entry) => self.resolve(entry.table, entry.key, entry.fallback, args),
            None => {
                warn!(key, "unknown localization key");
                key.to_string()
            }
        }
    }

    fn template<'s>(&'s self, chain: &LocaleChain, table: &str, key: &str) -> Option<&'s str> {
        if table != self.catalog.table() {
            return None;
        }
        self.catalog.lookup(chain, key)
    }

    fn substitute(&self, key: &str, template: &str, args: &[&dyn Display]) -> String {
        let needed = template_arity(template);
        if args.len() < needed {
            warn!(
                key,
                needed,
                supplied = args.len(),
                "too few arguments; unmatched placeholders kept verbatim"
            );
        }
        format_template(template, args)
    }
}

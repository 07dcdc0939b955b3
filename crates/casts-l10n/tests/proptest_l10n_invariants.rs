//! Property-based invariant tests for string resolution.
//!
//! 1.  Arity-0 accessors return their fallback when no catalog is loaded
//! 2.  `%k$@` takes the k-th argument regardless of textual order
//! 3.  Resolution is deterministic for the same key, args, and locale
//! 4.  Locales without a key resolve to the substituted fallback
//! 5.  Substituted values are never re-scanned
//! 6.  Templates without `%` format to themselves
//! 7.  Too few arguments keep the unmatched placeholders verbatim
//! 8.  Locale::parse never panics and is idempotent on its output
//! 9.  Locale chains start with the locale and never repeat an entry
//! 10. Coverage percent stays within [0, 100]
//! 11. Every plural form selection yields a non-empty template
//! 12. A locale switch never mixes two locales within one string

use casts_l10n::catalog::{LocaleStrings, StringCatalog};
use casts_l10n::format::{format_template, template_arity};
use casts_l10n::locale::{Locale, LocaleChain};
use casts_l10n::plural::{PluralForms, PluralRule};
use casts_l10n::strings::ENTRIES;
use casts_l10n::{L10n, Localizer, TABLE};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn arg() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .]{0,12}"
}

fn loc(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

fn german() -> Localizer {
    let mut catalog = StringCatalog::default();
    let mut de = LocaleStrings::new();
    de.insert("account_login", "Anmelden");
    de.insert("podcast_by_author_format", "%1$@ von %2$@");
    catalog.add_locale(loc("de"), de);
    Localizer::new(catalog, Some(loc("de-DE")), Vec::new())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Arity-0 accessors return the fallback text
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn arity_zero_entries_render_fallback_without_catalog() {
    let localizer = Localizer::fallback_only();
    for entry in ENTRIES.iter().filter(|entry| entry.arity == 0) {
        let rendered = localizer.resolve(TABLE, entry.key, entry.fallback, &[]);
        assert_eq!(rendered, entry.fallback.replace("%%", "%"), "{}", entry.key);
    }
}

#[test]
fn required_examples_render() {
    let localizer = Localizer::fallback_only();
    let l10n = L10n::new(&localizer);
    assert_eq!(l10n.hours_plural_format(3), "3 hours");
    assert_eq!(l10n.episode_shorthand_format_short("12"), "EP 12");
    assert_eq!(l10n.app_version("7.20", "415"), "Version 7.20 (415)");
    assert_eq!(l10n.plus_offer_badge(), "50% off");
    assert_eq!(l10n.podcast_by_author_format("Radiolab", "WNYC"), "Radiolab by WNYC");
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Positional substitution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn positional_index_not_occurrence(a in arg(), b in arg()) {
        let out = format_template("%2$@ の %1$@", &[&a, &b]);
        prop_assert_eq!(out, format!("{b} の {a}"));
    }

    #[test]
    fn every_entry_substitutes_by_position(idx in 0..ENTRIES.len(), a in arg(), b in arg()) {
        let entry = &ENTRIES[idx];
        let args: [&dyn std::fmt::Display; 2] = [&a, &b];
        let out = Localizer::fallback_only().resolve(TABLE, entry.key, entry.fallback, &args[..entry.arity]);
        let mut expected = entry.fallback.replace("%%", "%");
        if entry.arity >= 2 {
            expected = expected.replace("%2$@", &b);
        }
        if entry.arity >= 1 {
            expected = expected.replace("%1$@", &a);
        }
        prop_assert_eq!(out, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolution_is_deterministic(idx in 0..ENTRIES.len(), a in arg(), b in arg()) {
        let localizer = german();
        let entry = &ENTRIES[idx];
        let first = localizer.resolve(TABLE, entry.key, entry.fallback, &[&a, &b]);
        let second = localizer.resolve(TABLE, entry.key, entry.fallback, &[&a, &b]);
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Missing locale entries fall back
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn untranslated_keys_match_fallback(idx in 0..ENTRIES.len(), a in arg(), b in arg()) {
        let entry = &ENTRIES[idx];
        prop_assume!(entry.key != "account_login" && entry.key != "podcast_by_author_format");
        let translated = german().resolve(TABLE, entry.key, entry.fallback, &[&a, &b]);
        let fallback = format_template(entry.fallback, &[&a, &b]);
        prop_assert_eq!(translated, fallback);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Single pass
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arguments_are_not_rescanned(a in any::<String>(), b in any::<String>()) {
        let out = format_template("[%1$@|%2$@]", &[&a, &b]);
        prop_assert_eq!(out, format!("[{a}|{b}]"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Plain text identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn text_without_percent_is_identity(text in "[^%]{0,64}") {
        prop_assert_eq!(format_template(&text, &[&"unused"]), text.clone());
        prop_assert_eq!(template_arity(&text), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Missing arguments
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_arguments_keep_tokens(a in arg()) {
        let out = format_template("%1$@ by %2$@", &[&a]);
        prop_assert_eq!(out, format!("{a} by %2$@"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Locale parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn locale_parse_never_panics(raw in any::<String>()) {
        let _ = Locale::parse(&raw);
    }

    #[test]
    fn locale_parse_is_idempotent(raw in "[a-zA-Z]{2,3}([-_][a-zA-Z0-9]{2,8}){0,2}") {
        if let Ok(locale) = Locale::parse(&raw) {
            let again = Locale::parse(locale.as_str()).unwrap();
            prop_assert_eq!(again, locale);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Chain shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn chain_starts_with_locale_without_repeats(
        raw in "[a-z]{2}(-[A-Z]{2})?",
        extra in prop::collection::vec("[a-z]{2}", 0..4),
    ) {
        let locale = loc(&raw);
        let extra: Vec<Locale> = extra.iter().map(|tag| loc(tag)).collect();
        let chain = LocaleChain::for_locale(&locale, &extra);
        prop_assert_eq!(chain.primary(), Some(&locale));
        let tags: Vec<&Locale> = chain.iter().collect();
        for (i, tag) in tags.iter().enumerate() {
            prop_assert!(!tags[..i].contains(tag), "{} repeated", tag);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Coverage bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn coverage_percent_in_range(translated in prop::collection::btree_set(0..ENTRIES.len(), 0..20)) {
        let mut catalog = StringCatalog::default();
        let mut fr = LocaleStrings::new();
        for idx in &translated {
            fr.insert(ENTRIES[*idx].key, "x");
        }
        catalog.add_locale(loc("fr"), fr);
        let reference: Vec<&str> = ENTRIES.iter().map(|entry| entry.key).collect();
        let report = catalog.coverage_report(&reference);
        let fr = &report.locales[0];
        prop_assert!((0.0..=100.0).contains(&fr.coverage_percent));
        prop_assert_eq!(fr.present, translated.len());
        prop_assert_eq!(fr.present + fr.missing.len(), ENTRIES.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 11. Plural selection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plural_selection_is_never_empty(count in any::<i64>()) {
        let forms = PluralForms {
            one: Some("%1$@ hour".into()),
            few: Some("%1$@ hours (few)".into()),
            other: "%1$@ hours".into(),
            ..Default::default()
        };
        for rule in [
            PluralRule::English,
            PluralRule::French,
            PluralRule::Russian,
            PluralRule::Polish,
            PluralRule::Arabic,
            PluralRule::CJK,
        ] {
            prop_assert!(!forms.select(rule.categorize(count)).is_empty());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 12. Locale switches are atomic per call
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn concurrent_locale_switch_never_mixes_locales() {
    let mut catalog = StringCatalog::default();
    let mut de = LocaleStrings::new();
    de.insert("podcast_by_author_format", "%1$@ von %2$@");
    catalog.add_locale(loc("de"), de);
    let mut ja = LocaleStrings::new();
    ja.insert("podcast_by_author_format", "%2$@ の %1$@");
    catalog.add_locale(loc("ja"), ja);
    let localizer = Localizer::new(catalog, Some(loc("de")), Vec::new());

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..500 {
                let tag = if i % 2 == 0 { "ja" } else { "de" };
                localizer.set_locale(&loc(tag));
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                let l10n = L10n::new(&localizer);
                for _ in 0..500 {
                    let out = l10n.podcast_by_author_format("Daily", "NPR");
                    assert!(
                        out == "Daily von NPR" || out == "NPR の Daily",
                        "unexpected render {out:?}"
                    );
                }
            });
        }
    });
}

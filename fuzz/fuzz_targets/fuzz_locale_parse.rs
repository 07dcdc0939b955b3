#![no_main]

use casts_l10n::locale::{Locale, LocaleChain};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(locale) = Locale::parse(raw) else {
        return;
    };

    // Normalized tags parse to themselves.
    let again = Locale::parse(locale.as_str()).expect("normalized tag must reparse");
    assert_eq!(again, locale);

    let chain = LocaleChain::for_locale(&locale, &[]);
    assert_eq!(chain.primary(), Some(&locale));
    assert_eq!(chain.iter().last().map(Locale::language), Some(locale.language()));
});

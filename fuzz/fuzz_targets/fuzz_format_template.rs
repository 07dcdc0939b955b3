#![no_main]

use casts_l10n::format::{analyze, format_template, placeholders, template_arity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(template) = std::str::from_utf8(data) else {
        return;
    };
    if template.len() > 4096 {
        return;
    }

    // Formatting is total.
    let empty = format_template(template, &[]);
    let full = format_template(template, &[&"a", &"b", &"c", &"d"]);

    // Without arguments nothing is substituted, only `%%` collapses.
    assert!(empty.len() <= template.len());

    // Spans are in bounds and start at '%'.
    for placeholder in placeholders(template) {
        assert!(placeholder.index >= 1);
        assert_eq!(template.as_bytes()[placeholder.span.start], b'%');
        assert!(template.is_char_boundary(placeholder.span.end));
    }

    let shape = analyze(template);
    assert_eq!(shape.arity, template_arity(template));
    assert!(shape.gaps().iter().all(|gap| *gap < shape.arity));

    // Deterministic.
    assert_eq!(full, format_template(template, &[&"a", &"b", &"c", &"d"]));
});

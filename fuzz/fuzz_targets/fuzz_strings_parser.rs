#![no_main]

use std::path::Path;

use casts_l10n::resources::{decode_strings_bytes, parse_json_bundle, parse_strings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 8192 {
        return;
    }
    let path = Path::new("fuzz.strings");

    // Decoding and parsing return errors, never panic.
    if let Ok(source) = decode_strings_bytes(data, path) {
        if let Ok(entries) = parse_strings(&source, path) {
            let line_count = source.matches('\n').count() + 1;
            for entry in &entries {
                assert!(entry.line >= 1 && entry.line <= line_count);
            }
        }
        let _ = parse_json_bundle(&source);
    }
});

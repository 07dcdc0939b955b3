#![no_main]

use arbitrary::Arbitrary;
use casts_l10n::format::format_template;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    literal: String,
    positions: Vec<u8>,
    args: Vec<String>,
}

fuzz_target!(|input: Input| {
    if input.positions.len() > 16 || input.args.len() > 16 {
        return;
    }
    let literal = input.literal.replace('%', "");

    // Build `lit%3$@lit%1$@...` and the expected rendering side by side.
    let mut template = String::new();
    let mut expected = String::new();
    for position in &input.positions {
        let index = usize::from(position % 8) + 1;
        template.push_str(&literal);
        template.push_str(&format!("%{index}$@"));
        expected.push_str(&literal);
        match input.args.get(index - 1) {
            Some(arg) => expected.push_str(arg),
            None => expected.push_str(&format!("%{index}$@")),
        }
    }

    let args: Vec<&dyn std::fmt::Display> = input
        .args
        .iter()
        .map(|arg| arg as &dyn std::fmt::Display)
        .collect();
    assert_eq!(format_template(&template, &args), expected);
});

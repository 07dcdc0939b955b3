//! Generate the `localizable!` table from a base `.strings` file.
//!
//! Accessor names are the keys themselves and parameters are named
//! `p1..pN`, so a key rename is the only change that breaks callers.
//! Output is sorted by key and carries no timestamps, so regenerating an
//! unchanged source is byte-identical.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::error::{L10nError, Result};
use crate::format::template_arity;
use crate::resources::StringsEntry;
use crate::table::TABLE;

/// Strict and reserved keywords of the 2024 edition, plus `gen`.
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Names already taken by `L10n` or by the generated module.
const RESERVED: &[&str] = &["new", "localizer", "global", "ENTRIES"];

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Resource table the entries belong to.
    pub table: String,
    /// File name quoted in the header comment.
    pub source_name: String,
    /// Path of the macro as seen from the generated file.
    pub macro_path: String,
    /// Name of the accessor trait. Required outside `casts-l10n`, where
    /// methods cannot be added to `L10n` directly; derived as
    /// `{table}Strings` when unset and `macro_path` is not `crate::`.
    pub accessor_trait: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            table: TABLE.to_string(),
            source_name: format!("{TABLE}.strings"),
            macro_path: "crate::localizable".to_string(),
            accessor_trait: None,
        }
    }
}

/// Check that `key` can be emitted verbatim as a Rust function name.
pub fn validate_key(key: &str) -> Result<()> {
    let invalid = |reason| {
        Err(L10nError::InvalidKey {
            key: key.to_string(),
            reason,
        })
    };
    let mut chars = key.chars();
    match chars.next() {
        None => return invalid("empty key"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return invalid("must start with a letter or underscore");
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return invalid("only ASCII letters, digits, and underscores are allowed");
    }
    if key == "_" {
        return invalid("`_` is not an identifier");
    }
    if KEYWORDS.contains(&key) {
        return invalid("Rust keyword");
    }
    if RESERVED.contains(&key) {
        return invalid("reserved accessor name");
    }
    Ok(())
}

/// Render the generated module source for `entries`.
pub fn generate(entries: &[StringsEntry], options: &GenerateOptions) -> Result<String> {
    let mut seen = HashSet::new();
    for entry in entries {
        validate_key(&entry.key)?;
        if !seen.insert(entry.key.as_str()) {
            return Err(L10nError::DuplicateKey {
                locale: "base".to_string(),
                key: entry.key.clone(),
            });
        }
    }

    let accessor_trait = match &options.accessor_trait {
        Some(name) => Some(name.clone()),
        None if !options.macro_path.starts_with("crate::") => {
            Some(format!("{}Strings", options.table))
        }
        None => None,
    };
    if let Some(name) = &accessor_trait {
        validate_key(name)?;
    }

    let mut sorted: Vec<&StringsEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "// Generated by `casts-l10n generate` from {}. Do not edit.",
        options.source_name
    );
    out.push('\n');
    let _ = writeln!(out, "{}! {{", options.macro_path);
    if options.table != TABLE || accessor_trait.is_some() {
        let _ = writeln!(out, "    @table {:?};", options.table);
    }
    if let Some(name) = &accessor_trait {
        let _ = writeln!(out, "    @trait {name};");
    }
    for entry in sorted {
        let doc = entry.value.replace('\r', "\\r").replace('\n', "\\n");
        let _ = writeln!(out, "    /// {doc}");
        let arity = template_arity(&entry.value);
        let params = if arity == 0 {
            String::new()
        } else {
            let names: Vec<String> = (1..=arity).map(|i| format!("p{i}")).collect();
            format!("({})", names.join(", "))
        };
        let _ = writeln!(out, "    {}{params} = {:?};", entry.key, entry.value);
    }
    out.push_str("}\n");
    Ok(out)
}

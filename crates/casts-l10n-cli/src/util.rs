use std::fs;
use std::io::Write;
use std::path::Path;

use casts_l10n::resources::{StringsEntry, decode_strings_bytes, parse_strings};
use casts_l10n::strings::ENTRIES;
use serde::Serialize;

use crate::error::Result;

/// Parse a base `.strings` file.
pub fn read_strings(path: &Path) -> Result<Vec<StringsEntry>> {
    let bytes = fs::read(path)?;
    let source = decode_strings_bytes(&bytes, path)?;
    Ok(parse_strings(&source, path)?)
}

/// Base `(key, template)` pairs: from `path` when given, else the compiled table.
pub fn base_pairs(path: Option<&Path>) -> Result<Vec<(String, String)>> {
    match path {
        Some(path) => Ok(read_strings(path)?
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect()),
        None => Ok(ENTRIES
            .iter()
            .map(|entry| (entry.key.to_string(), entry.fallback.to_string()))
            .collect()),
    }
}

pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

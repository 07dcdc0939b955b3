//! Loading translation bundles from disk.
//!
//! Two layouts are understood, and may be mixed in one directory:
//!
//! ```text
//! resources/
//!   de.lproj/Localizable.strings
//!   pt-BR.lproj/Localizable.strings
//!   ru.json
//! ```
//!
//! `.strings` files follow the Apple format (`"key" = "value";` with C
//! comments, UTF-8 or UTF-16 with BOM). JSON bundles map keys to either a
//! string or a plural-forms object.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info, warn};

use crate::catalog::{LocaleStrings, StringCatalog};
use crate::error::{L10nError, Result};
use crate::locale::Locale;
use crate::plural::PluralForms;

/// One `"key" = "value";` pair of a `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsEntry {
    pub key: String,
    pub value: String,
    /// 1-based line of the key.
    pub line: usize,
}

/// Decode `.strings` bytes, honouring a UTF-16 or UTF-8 byte order mark.
pub fn decode_strings_bytes(bytes: &[u8], path: &Path) -> Result<String> {
    let utf16 = |chunks: &[u8], big_endian: bool| -> Result<String> {
        if chunks.len() % 2 != 0 {
            return Err(L10nError::parse(path, 0, "odd byte count in UTF-16 file"));
        }
        let units: Vec<u16> = chunks
            .chunks_exact(2)
            .map(|pair| {
                if big_endian {
                    u16::from_be_bytes([pair[0], pair[1]])
                } else {
                    u16::from_le_bytes([pair[0], pair[1]])
                }
            })
            .collect();
        String::from_utf16(&units).map_err(|e| L10nError::parse(path, 0, e.to_string()))
    };

    match bytes {
        [0xFF, 0xFE, rest @ ..] => utf16(rest, false),
        [0xFE, 0xFF, rest @ ..] => utf16(rest, true),
        [0xEF, 0xBB, 0xBF, rest @ ..] => {
            String::from_utf8(rest.to_vec()).map_err(|e| L10nError::parse(path, 0, e.to_string()))
        }
        _ => String::from_utf8(bytes.to_vec()).map_err(|e| L10nError::parse(path, 0, e.to_string())),
    }
}

/// Parse the text of a `.strings` file.
///
/// `path` is only used in error messages. Duplicate keys are an error.
pub fn parse_strings(source: &str, path: &Path) -> Result<Vec<StringsEntry>> {
    let mut parser = StringsParser {
        chars: source.chars().collect(),
        pos: 0,
        line: 1,
        path,
    };
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    loop {
        parser.skip_trivia()?;
        if parser.at_end() {
            break;
        }
        let line = parser.line;
        let key = parser.token()?;
        parser.skip_trivia()?;
        parser.expect('=')?;
        parser.skip_trivia()?;
        let value = parser.token()?;
        parser.skip_trivia()?;
        parser.expect(';')?;

        if !seen.insert(key.clone()) {
            return Err(L10nError::parse(
                path,
                line,
                format!("duplicate key {key:?}"),
            ));
        }
        entries.push(StringsEntry { key, value, line });
    }
    Ok(entries)
}

struct StringsParser<'p> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    path: &'p Path,
}

impl StringsParser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> L10nError {
        L10nError::parse(self.path, self.line, message)
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match (self.peek(), self.chars.get(self.pos + 1).copied()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('*')) => {
                    let start_line = self.line;
                    self.pos += 2;
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.pos += 1;
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(L10nError::parse(
                                    self.path,
                                    start_line,
                                    "unterminated comment",
                                ));
                            }
                        }
                    }
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn expect(&mut self, wanted: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == wanted => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{wanted}', found '{c}'"))),
            None => Err(self.error(format!("expected '{wanted}', found end of file"))),
        }
    }

    /// A quoted string or a bare word.
    fn token(&mut self) -> Result<String> {
        match self.peek() {
            Some('"') => {
                self.bump();
                self.quoted()
            }
            Some(c) if is_bare(c) => {
                let mut word = String::new();
                while let Some(c) = self.peek().filter(|c| is_bare(*c)) {
                    word.push(c);
                    self.pos += 1;
                }
                Ok(word)
            }
            Some(c) => Err(self.error(format!("unexpected '{c}'"))),
            None => Err(self.error("unexpected end of file")),
        }
    }

    fn quoted(&mut self) -> Result<String> {
        let start_line = self.line;
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c) => out.push(c),
                None => {
                    return Err(L10nError::parse(
                        self.path,
                        start_line,
                        "unterminated string",
                    ));
                }
            }
        }
    }

    fn escape(&mut self) -> Result<char> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('0') => Ok('\0'),
            Some('U') | Some('u') => {
                let code = self.hex4()?;
                if !(0xD800..=0xDBFF).contains(&code) {
                    return char::from_u32(code)
                        .ok_or_else(|| self.error("invalid \\U code point"));
                }
                // Characters outside the BMP are written as a surrogate pair.
                let low = match (self.bump(), self.bump()) {
                    (Some('\\'), Some('U' | 'u')) => self.hex4()?,
                    _ => return Err(self.error("unpaired \\U surrogate")),
                };
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.error("unpaired \\U surrogate"));
                }
                let code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                char::from_u32(code).ok_or_else(|| self.error("invalid \\U code point"))
            }
            Some(c) => Ok(c),
            None => Err(self.error("dangling escape")),
        }
    }

    fn hex4(&mut self) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid \\U escape"))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }
}

fn is_bare(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '$' | ':' | '/')
}

/// Load one `.strings` file.
pub fn load_strings_file(path: &Path) -> Result<LocaleStrings> {
    let bytes = fs::read(path)?;
    let source = decode_strings_bytes(&bytes, path)?;
    let mut strings = LocaleStrings::new();
    for entry in parse_strings(&source, path)? {
        strings.insert(entry.key, entry.value);
    }
    Ok(strings)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Simple(String),
    Plural(PluralForms),
}

/// Bundle entries in file order. A repeated key is an error, as in
/// `.strings` files.
struct JsonBundle(Vec<(String, JsonEntry)>);

impl<'de> Deserialize<'de> for JsonBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct BundleVisitor;

        impl<'de> Visitor<'de> for BundleVisitor {
            type Value = JsonBundle;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of keys to strings or plural forms")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<JsonBundle, A::Error> {
                let mut seen = HashSet::new();
                let mut entries = Vec::new();
                while let Some((key, entry)) = map.next_entry::<String, JsonEntry>()? {
                    if !seen.insert(key.clone()) {
                        return Err(de::Error::custom(format_args!("duplicate key {key:?}")));
                    }
                    entries.push((key, entry));
                }
                Ok(JsonBundle(entries))
            }
        }

        deserializer.deserialize_map(BundleVisitor)
    }
}

/// Parse a JSON bundle.
pub fn parse_json_bundle(source: &str) -> Result<LocaleStrings> {
    let JsonBundle(raw) = serde_json::from_str(source)?;
    let mut strings = LocaleStrings::new();
    for (key, entry) in raw {
        match entry {
            JsonEntry::Simple(text) => strings.insert(key, text),
            JsonEntry::Plural(forms) => strings.insert_plural(key, forms),
        };
    }
    Ok(strings)
}

pub fn load_json_file(path: &Path) -> Result<LocaleStrings> {
    parse_json_bundle(&fs::read_to_string(path)?)
}

/// Load every locale found under `dir` for `table`.
///
/// Directories or files whose stem is not a locale tag (`Base.lproj`,
/// `README.json`) are skipped. The first unreadable or malformed bundle
/// fails the whole load.
pub fn load_dir(dir: &Path, table: &str) -> Result<StringCatalog> {
    load_bundles(dir, table, |_, error| Err(error))
}

/// Like [`load_dir`], but a bad bundle is logged and left out so the
/// remaining locales still load. Only an unreadable `dir` is an error.
pub fn load_dir_lenient(dir: &Path, table: &str) -> Result<StringCatalog> {
    load_bundles(dir, table, |path, error| {
        warn!(path = %path.display(), %error, "skipping unreadable translation bundle");
        Ok(())
    })
}

fn load_bundles(
    dir: &Path,
    table: &str,
    mut on_error: impl FnMut(&Path, L10nError) -> Result<()>,
) -> Result<StringCatalog> {
    let mut catalog = StringCatalog::new(table);
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    paths.sort();

    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let (stem, loaded) = if let Some(stem) = name.strip_suffix(".lproj") {
            let file = path.join(format!("{table}.strings"));
            if !file.is_file() {
                debug!(path = %path.display(), table, "no table in bundle");
                continue;
            }
            (stem, file)
        } else if let Some(stem) = name.strip_suffix(".json") {
            (stem, path.clone())
        } else {
            continue;
        };

        let locale = match Locale::parse(stem) {
            Ok(locale) => locale,
            Err(_) => {
                warn!(path = %path.display(), "skipping bundle with non-locale name");
                continue;
            }
        };
        let strings = if loaded.extension().is_some_and(|ext| ext == "json") {
            load_json_file(&loaded)
        } else {
            load_strings_file(&loaded)
        };
        match strings {
            Ok(strings) => {
                info!(locale = %locale, keys = strings.len(), path = %loaded.display(), "loaded translations");
                catalog.add_locale(locale, strings);
            }
            Err(error) => on_error(&loaded, error)?,
        }
    }
    Ok(catalog)
}

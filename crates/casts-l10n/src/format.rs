//! Positional `printf`-style template substitution.
//!
//! Templates use the Foundation placeholder dialect found in `.strings`
//! catalogs:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `%1$@`, `%2$d`, … | n-th argument, independent of textual order |
//! | `%@`, `%d`, … | next sequential argument |
//! | `%%` | literal `%` |
//!
//! Every conversion (`@ s d i u f`, with optional `h`/`l`/`ll`/`q`/`z`
//! length modifiers) renders the argument through [`Display`]; locale-aware
//! number formatting is the caller's job.
//!
//! # Invariants
//!
//! 1. **Single pass**: substituted values are never re-scanned, so an
//!    argument containing `%1$@` is emitted verbatim.
//! 2. **Positional**: `%k$@` always takes `args[k - 1]`.
//! 3. **Total**: formatting never fails. A placeholder whose argument is
//!    missing is emitted as its original text; surplus arguments are
//!    ignored; malformed `%` sequences pass through unchanged.

use std::collections::BTreeSet;
use std::fmt::{Display, Write as _};
use std::ops::Range;

/// Conversion character of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `%@`: any object.
    Object,
    /// `%s`: C string.
    CString,
    /// `%d` / `%i`: signed integer.
    Signed,
    /// `%u`: unsigned integer.
    Unsigned,
    /// `%f`: floating point.
    Float,
}

impl Conversion {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'@' => Some(Self::Object),
            b's' => Some(Self::CString),
            b'd' | b'i' => Some(Self::Signed),
            b'u' => Some(Self::Unsigned),
            b'f' => Some(Self::Float),
            _ => None,
        }
    }
}

/// A parsed argument placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// 1-based argument index.
    pub index: usize,
    /// Whether the index was written explicitly (`%2$@`).
    pub positional: bool,
    pub conversion: Conversion,
    /// Byte range of the token in the template.
    pub span: Range<usize>,
}

/// One lexical piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// `%%`.
    Percent,
    Arg(Placeholder),
}

/// Split a template into literal runs, `%%` escapes, and placeholders.
///
/// Malformed `%` sequences become part of the surrounding literal text.
#[must_use]
pub fn segments(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut out = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;
    let mut next_sequential = 1;

    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            pos += 1;
            continue;
        }
        if bytes.get(pos + 1) == Some(&b'%') {
            if literal_start < pos {
                out.push(Segment::Literal(&template[literal_start..pos]));
            }
            out.push(Segment::Percent);
            pos += 2;
            literal_start = pos;
            continue;
        }
        match parse_placeholder(bytes, pos) {
            Some((explicit, conversion, end)) => {
                if literal_start < pos {
                    out.push(Segment::Literal(&template[literal_start..pos]));
                }
                let (index, positional) = match explicit {
                    Some(index) => (index, true),
                    None => {
                        let index = next_sequential;
                        next_sequential += 1;
                        (index, false)
                    }
                };
                out.push(Segment::Arg(Placeholder {
                    index,
                    positional,
                    conversion,
                    span: pos..end,
                }));
                pos = end;
                literal_start = pos;
            }
            None => pos += 1,
        }
    }
    if literal_start < bytes.len() {
        out.push(Segment::Literal(&template[literal_start..]));
    }
    out
}

/// Parse the placeholder starting at `start` (which holds `%`).
///
/// Returns the explicit index (if any), the conversion, and the end offset.
fn parse_placeholder(bytes: &[u8], start: usize) -> Option<(Option<usize>, Conversion, usize)> {
    let mut pos = start + 1;

    let digits_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let explicit = if pos > digits_start {
        if bytes.get(pos) != Some(&b'$') {
            return None;
        }
        let digits = std::str::from_utf8(&bytes[digits_start..pos]).ok()?;
        let index: usize = digits.parse().ok()?;
        if index == 0 {
            return None;
        }
        pos += 1;
        Some(index)
    } else {
        None
    };

    match bytes.get(pos) {
        Some(b'h') | Some(b'l') => {
            let modifier = bytes[pos];
            pos += 1;
            if bytes.get(pos) == Some(&modifier) {
                pos += 1;
            }
        }
        Some(b'q') | Some(b'z') => pos += 1,
        _ => {}
    }

    let conversion = Conversion::from_byte(*bytes.get(pos)?)?;
    Some((explicit, conversion, pos + 1))
}

/// All placeholders of a template, in textual order.
#[must_use]
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Arg(p) => Some(p),
            _ => None,
        })
        .collect()
}

/// Number of arguments a template consumes.
///
/// This is the highest argument index referenced, so `"%2$@"` has arity 2
/// even though `%1$@` never appears.
#[must_use]
pub fn template_arity(template: &str) -> usize {
    placeholders(template)
        .iter()
        .map(|p| p.index)
        .max()
        .unwrap_or(0)
}

/// Structural summary of a template's placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateShape {
    pub arity: usize,
    /// Distinct argument indices referenced.
    pub indices: BTreeSet<usize>,
    /// Both `%1$@` and `%@` forms appear.
    pub mixed: bool,
}

impl TemplateShape {
    /// Indices in `1..=arity` that are never referenced.
    #[must_use]
    pub fn gaps(&self) -> Vec<usize> {
        (1..=self.arity)
            .filter(|i| !self.indices.contains(i))
            .collect()
    }
}

#[must_use]
pub fn analyze(template: &str) -> TemplateShape {
    let found = placeholders(template);
    let positional = found.iter().any(|p| p.positional);
    let sequential = found.iter().any(|p| !p.positional);
    let indices: BTreeSet<usize> = found.iter().map(|p| p.index).collect();
    TemplateShape {
        arity: indices.iter().next_back().copied().unwrap_or(0),
        indices,
        mixed: positional && sequential,
    }
}

/// Substitute `args` into `template`.
#[must_use]
pub fn format_template(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Percent => out.push('%'),
            Segment::Arg(p) => match args.get(p.index - 1) {
                Some(arg) => {
                    let _ = write!(out, "{arg}");
                }
                None => out.push_str(&template[p.span]),
            },
        }
    }
    out
}

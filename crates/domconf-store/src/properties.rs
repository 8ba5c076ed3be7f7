//! Parser for `.properties` profile files
//!
//! Accepts the classic properties syntax:
//!
//! ```text
//! # comment            ! also a comment
//! domain = acme:acme.example.com,\
//!          foo:foo.example.net
//! acme: sales,eng
//! greeting Hello\tworld \u00e9
//! ```
//!
//! - `=`, `:` or whitespace separate a key from its value
//! - a line ending in an odd number of backslashes continues on the next line
//! - `\t`, `\n`, `\r`, `\f`, `\uXXXX` and escaped separators are decoded
//! - a repeated key keeps its last value
//!
//! Files are read as UTF-8; content that is not valid UTF-8 is decoded as
//! ISO-8859-1, the historical encoding of properties files.

use std::collections::BTreeMap;

/// A syntax error in a properties document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct PropertiesError {
    pub line: usize,
    pub message: String,
}

/// Parse a properties document into a key-value table.
pub fn parse(input: &str) -> Result<BTreeMap<String, String>, PropertiesError> {
    let mut table = BTreeMap::new();
    for (line, logical) in logical_lines(input) {
        let (key, value) = split_entry(&logical);
        let key = unescape(key, line)?;
        let value = unescape(value, line)?;
        table.insert(key, value);
    }
    Ok(table)
}

/// Decode raw file content, falling back to ISO-8859-1 for non-UTF-8 input.
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join continued lines, dropping blanks and comments.
///
/// Yields the 1-based line number where each logical line starts.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim_start_matches(is_blank);

        let (start, mut buf) = match current.take() {
            Some(pending) => pending,
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                (idx + 1, String::new())
            }
        };

        if ends_with_continuation(line) {
            buf.push_str(&line[..line.len() - 1]);
            current = Some((start, buf));
        } else {
            buf.push_str(line);
            out.push((start, buf));
        }
    }

    if let Some(pending) = current {
        out.push(pending);
    }
    out
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    trailing % 2 == 1
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut explicit_separator = false;

    for (i, c) in line.char_indices() {
        if c == '\\' {
            escaped = !escaped;
            continue;
        }
        if !escaped && (c == '=' || c == ':') {
            key_end = i;
            value_start = i + c.len_utf8();
            explicit_separator = true;
            break;
        }
        if !escaped && is_blank(c) {
            key_end = i;
            value_start = i + c.len_utf8();
            break;
        }
        escaped = false;
    }

    let mut rest = line[value_start..].trim_start_matches(is_blank);
    if !explicit_separator {
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped.trim_start_matches(is_blank);
        }
    }

    (&line[..key_end], rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out);
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            break;
        };
        if next == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            let unit = (hex.len() == 4)
                .then(|| u16::from_str_radix(&hex, 16).ok())
                .flatten()
                .ok_or_else(|| PropertiesError {
                    line,
                    message: format!("malformed \\u escape: \\u{hex}"),
                })?;
            units.push(unit);
            continue;
        }
        flush_units(&mut units, &mut out);
        out.push(match next {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\x0c',
            other => other,
        });
    }
    flush_units(&mut units, &mut out);
    Ok(out)
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

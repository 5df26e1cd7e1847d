//! Reading and writing of flat key-value (`.properties` style) text.
//!
//! The grammar is the classic properties line format:
//!
//! - blank lines and lines whose first non-blank character is `#` or `!` are ignored
//! - a line ending in an odd number of backslashes continues on the next line, whose
//!   leading whitespace is dropped
//! - the key ends at the first unescaped `=`, `:` or whitespace, and at most one `=`/`:`
//!   separator is consumed together with the surrounding whitespace
//! - `\t`, `\n`, `\r`, `\f` and `\uXXXX` escapes are decoded, any other escaped
//!   character stands for itself
//!
//! When a key appears more than once the last value wins.

use crate::error::PropertiesError;
use core::fmt::Write;
use core::str::Chars;
use std::collections::HashMap;

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// Parse properties text into a key-value map.
///
/// # Errors
///
/// Returns an error if an entry contains a malformed `\uXXXX` escape.
pub fn parse_properties(text: &str) -> Result<HashMap<String, String>, PropertiesError> {
    let mut entries = HashMap::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line = raw.trim_start_matches(WHITESPACE);
        if line.is_empty() || line.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = line.to_string();
        while ends_with_continuation(&logical) {
            let _ = logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(WHITESPACE)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let error = |message| PropertiesError { line: index + 1, message };
        let key = unescape(key).map_err(error)?;
        let value = unescape(value).map_err(error)?;
        let _ = entries.insert(key, value);
    }

    Ok(entries)
}

/// Write key-value pairs as properties text, each comment line prefixed with `#`.
///
/// The output parses back to the same pairs with [`parse_properties`].
pub fn write_properties<'a, W: Write>(
    comments: &[&str],
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    writer: &mut W,
) -> core::fmt::Result {
    for comment in comments {
        for line in comment.lines() {
            writeln!(writer, "#{line}")?;
        }
    }

    for (key, value) in entries {
        writeln!(writer, "{}={}", escape(key, true), escape(value, false))?;
    }

    Ok(())
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;

    for (pos, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                let (key, rest) = line.split_at(pos);
                let mut rest = rest.chars();
                let _ = rest.next();
                return (key, rest.as_str().trim_start_matches(WHITESPACE));
            }
            ' ' | '\t' | '\x0c' => {
                let (key, rest) = line.split_at(pos);
                let rest = rest.trim_start_matches(WHITESPACE);
                let rest = rest.strip_prefix(['=', ':']).map_or(rest, |r| r.trim_start_matches(WHITESPACE));
                return (key, rest);
            }
            _ => {}
        }
    }

    (line, "")
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => out.push(read_unicode_escape(&mut chars)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_unicode_escape(chars: &mut Chars<'_>) -> Result<char, String> {
    let unit = read_code_unit(chars)?;

    // surrogate pairs arrive as two consecutive escapes
    if (0xD800..=0xDBFF).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let low = read_code_unit(&mut lookahead)?;
            if (0xDC00..=0xDFFF).contains(&low) {
                *chars = lookahead;
                let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(combined).ok_or_else(|| format!("invalid unicode escape for code point {combined:#X}"));
            }
        }
    }

    char::from_u32(unit).ok_or_else(|| format!("unpaired surrogate in unicode escape '\\u{unit:04X}'"))
}

fn read_code_unit(chars: &mut Chars<'_>) -> Result<u32, String> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() == 4
        && digits.chars().all(|c| c.is_ascii_hexdigit())
        && let Ok(unit) = u32::from_str_radix(&digits, 16)
    {
        return Ok(unit);
    }

    Err(format!("malformed \\uXXXX encoding '\\u{digits}'"))
}

fn escape(s: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(s.len());

    for (index, c) in s.chars().enumerate() {
        match c {
            ' ' if is_key || index == 0 => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiter used by list renderings when the caller has no preference.
pub const DEFAULT_DELIMITER: &str = ",";
/// Unquoted SQL null token.
pub const SQL_NULL: &str = "NULL";
/// Text of the Json kind's null-equivalent.
pub const JSON_NULL_EQUIVALENT: &str = "{}";

// Leading whitespace, then the longest numeric prefix.
static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

static INTEGER_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

pub fn format_int(i: i64) -> String {
    i.to_string()
}

/// Integral doubles print without a fraction; the rest use the shortest round-trip form.
pub fn format_double(d: f64) -> String {
    if d.is_nan() {
        "NAN".to_string()
    } else if d.is_infinite() {
        if d > 0.0 { "INF".to_string() } else { "-INF".to_string() }
    } else if d.fract() == 0.0 && d.abs() < 1e15 {
        format!("{}", d as i64)
    } else {
        format!("{}", d)
    }
}

pub fn format_float(f: f32) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "INF".to_string() } else { "-INF".to_string() }
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

pub fn format_bool(b: bool) -> String {
    if b { "1".to_string() } else { String::new() }
}

/// `""` and `"0"` are false, every other string is true.
pub fn string_truthy(s: &str) -> bool {
    !(s.is_empty() || s == "0")
}

fn numeric_prefix(s: &str) -> Option<&str> {
    NUMERIC_PREFIX
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Integer value of the leading numeric prefix; `0` if there is none.
pub fn parse_int(s: &str) -> i64 {
    let Some(prefix) = numeric_prefix(s) else {
        return 0;
    };
    if INTEGER_LITERAL.is_match(prefix) {
        prefix.parse::<i64>().unwrap_or_else(|_| {
            if prefix.starts_with('-') { i64::MIN } else { i64::MAX }
        })
    } else {
        prefix.parse::<f64>().map_or(0, |d| d as i64)
    }
}

/// Floating value of the leading numeric prefix; `0.0` if there is none.
pub fn parse_double(s: &str) -> f64 {
    numeric_prefix(s)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Backslash-escape quotes, backslashes and NUL bytes.
pub fn escape_sql(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\'' | '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out
}

pub fn quote_sql(s: &str) -> String {
    format!("'{}'", escape_sql(s))
}

/// Split `text` on `delimiter`.
///
/// A positive `limit` caps the number of pieces, the last one holding the
/// remainder; a negative `limit` drops that many pieces from the end; zero
/// behaves as one. An empty delimiter yields no pieces.
pub fn explode(text: &str, delimiter: &str, limit: Option<isize>) -> Vec<String> {
    if delimiter.is_empty() {
        return Vec::new();
    }
    match limit {
        None => text.split(delimiter).map(str::to_string).collect(),
        Some(n) if n >= 0 => text
            .splitn(n.max(1) as usize, delimiter)
            .map(str::to_string)
            .collect(),
        Some(n) => {
            let mut pieces: Vec<String> = text.split(delimiter).map(str::to_string).collect();
            let keep = pieces.len().saturating_sub(n.unsigned_abs());
            pieces.truncate(keep);
            pieces
        }
    }
}

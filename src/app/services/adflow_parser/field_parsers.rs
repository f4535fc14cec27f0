//! Text to typed value coercion
//!
//! Solver output stores numbers, words and lists as free text. These helpers
//! turn such text into [`ParsedValue`]s, preferring integer, then float, then
//! leaving the text as a string.

use crate::app::models::ParsedValue;

/// Collapse every run of whitespace to a single space and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Coerce a single token to an integer, float or string
///
/// Integers are an optional sign followed by ASCII digits only. Integers too
/// large for `i64` fall back to float.
pub fn parse_scalar(s: &str) -> ParsedValue {
    if is_integer_literal(s) {
        if let Ok(i) = s.parse::<i64>() {
            return ParsedValue::Integer(i);
        }
    }

    match s.parse::<f64>() {
        Ok(f) => ParsedValue::Float(f),
        Err(_) => ParsedValue::Text(s.to_string()),
    }
}

/// Coerce free text to a scalar or list value
///
/// Text containing `[`, `]`, `,` or an inner space is treated as a list:
/// brackets are removed and the rest is split on whitespace and commas, each
/// token coerced with [`parse_scalar`].
pub fn parse_value(raw: &str) -> ParsedValue {
    let cleaned = collapse_whitespace(raw);

    if cleaned.contains(['[', ']', ',', ' ']) {
        let unbracketed: String = cleaned.chars().filter(|c| !matches!(c, '[' | ']')).collect();
        let items = unbracketed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_scalar)
            .collect();
        return ParsedValue::List(items);
    }

    parse_scalar(&cleaned)
}

/// Coerce a results table cell, which must be numeric
pub fn parse_number(s: &str) -> Option<ParsedValue> {
    let value = parse_scalar(s);
    value.is_numeric().then_some(value)
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

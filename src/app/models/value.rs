//! Dynamically-typed values read from solver output text

use std::fmt;

/// A value coerced from free text: integer, float, string, or a list of those
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<ParsedValue>),
}

impl ParsedValue {
    /// Numeric view of the value, `None` for text and lists
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParsedValue::Integer(i) => Some(*i as f64),
            ParsedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParsedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParsedValue]> {
        match self {
            ParsedValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Integer(i) => write!(f, "{i}"),
            ParsedValue::Float(v) => write!(f, "{}", format_float(*v)),
            ParsedValue::Text(s) => write!(f, "{s}"),
            ParsedValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Shortest round-trip form that keeps integral floats as `2.0` and writes
/// exponents signed and at least two digits wide (`5e-05`, `1e+16`)
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{v:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ParsedValue::Integer(2).to_string(), "2");
        assert_eq!(ParsedValue::Float(2.0).to_string(), "2.0");
        assert_eq!(ParsedValue::Float(0.75).to_string(), "0.75");
        assert_eq!(ParsedValue::Text("euler".into()).to_string(), "euler");
        assert_eq!(
            ParsedValue::List(vec![ParsedValue::Integer(1), ParsedValue::Float(0.5)]).to_string(),
            "[1, 0.5]"
        );
    }

    #[test]
    fn test_display_exponent_floats() {
        assert_eq!(ParsedValue::Float(0.00005).to_string(), "5e-05");
        assert_eq!(ParsedValue::Float(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(ParsedValue::Float(1e16).to_string(), "1e+16");
        assert_eq!(ParsedValue::Float(2.5e123).to_string(), "2.5e+123");
        assert_eq!(ParsedValue::Float(0.0001).to_string(), "0.0001");
        assert_eq!(ParsedValue::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(ParsedValue::Float(f64::NAN).to_string(), "nan");
        assert_eq!(ParsedValue::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_numeric_views() {
        assert_eq!(ParsedValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(ParsedValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(ParsedValue::Text("x".into()).as_f64(), None);
        assert!(!ParsedValue::List(vec![]).is_numeric());
        assert_eq!(ParsedValue::Text("x".into()).as_str(), Some("x"));
    }
}

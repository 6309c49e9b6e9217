//! Text-preserving JSON numbers.
//!
//! A [`Number`] keeps the exact textual form it was constructed or parsed
//! with, so `1.50` serializes back as `1.50` rather than `1.5`. The text is
//! validated against the JSON number grammar on construction, which lets the
//! serializer emit it verbatim.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    text: String,
}

impl Number {
    pub fn from_i64(value: i64) -> Self {
        Number {
            text: value.to_string(),
        }
    }

    pub fn from_u64(value: u64) -> Self {
        Number {
            text: value.to_string(),
        }
    }

    /// Builds a number with canonical decimal text. Returns `None` for NaN
    /// and infinities, which have no JSON representation.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Number {
            text: format_canonical_f64(value),
        })
    }

    /// Accepts exactly the JSON number grammar:
    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    pub fn from_text(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if is_valid_number_text(&text) {
            Some(Number { text })
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.text.parse().ok()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.text.parse().ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.text.parse().ok()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn is_valid_number_text(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    // Integer part: a single zero, or a nonzero digit followed by digits.
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            i += 1;
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            return false;
        }
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            return false;
        }
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }

    i == bytes.len()
}

/// Format a finite f64 in canonical decimal form:
/// - no exponent notation
/// - no trailing fractional zeros (strip decimal point if none remains)
/// - -0 normalized to 0
fn format_canonical_f64(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }

    let mut sign_prefix = "";
    let mut magnitude = value;
    if magnitude < 0.0 {
        sign_prefix = "-";
        magnitude = -magnitude;
    }

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let body = if let Some(exp_index) = raw.find(['e', 'E']) {
        let mantissa = &raw[..exp_index];
        let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
        expand_exponent(mantissa, exp)
    } else {
        String::from(raw)
    };
    let trimmed = trim_fraction(body);
    if trimmed == "0" {
        return String::from("0");
    }
    if sign_prefix.is_empty() {
        trimmed
    } else {
        let mut out = String::with_capacity(sign_prefix.len() + trimmed.len());
        out.push('-');
        out.push_str(&trimmed);
        out
    }
}

fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits = Vec::with_capacity(mantissa.len());
    let mut point_index = mantissa.len();
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point_index = digits.len();
        } else {
            digits.push(b);
        }
    }
    if point_index == mantissa.len() {
        point_index = digits.len();
    }

    // Where the point lands after applying the exponent, relative to the
    // digit run.
    let target = point_index as i32 + exp;
    if target >= digits.len() as i32 {
        let mut result = String::with_capacity(target as usize);
        for &d in &digits {
            result.push(d as char);
        }
        for _ in digits.len()..target as usize {
            result.push('0');
        }
        result
    } else if target > 0 {
        splice_point(&digits, target as usize)
    } else {
        let zeros = (-target) as usize;
        let mut result = String::with_capacity(digits.len() + zeros + 2);
        result.push_str("0.");
        for _ in 0..zeros {
            result.push('0');
        }
        for &d in &digits {
            result.push(d as char);
        }
        result
    }
}

fn splice_point(digits: &[u8], split: usize) -> String {
    let mut result = String::with_capacity(digits.len() + 1);
    for (idx, &d) in digits.iter().enumerate() {
        if idx == split {
            result.push('.');
        }
        result.push(d as char);
    }
    result
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot_pos) = s.find('.') {
        let mut end = s.len();
        while end > dot_pos + 1 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        if end > dot_pos && s.as_bytes()[end - 1] == b'.' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_accepts_json_grammar() {
        for ok in ["0", "-0", "25", "1.50", "-3.14", "1e5", "2E-3", "0.5e+10"] {
            assert!(Number::from_text(ok).is_some(), "{ok} should be accepted");
        }
    }

    #[test]
    fn from_text_rejects_invalid() {
        for bad in ["", "-", "01", "1.", ".5", "+1", "1e", "1e+", "0x10", "1.5 "] {
            assert!(Number::from_text(bad).is_none(), "{bad} should be rejected");
        }
    }

    #[test]
    fn from_text_preserves_exact_form() {
        let n = Number::from_text("1.50").unwrap();
        assert_eq!(n.as_str(), "1.50");
        assert_eq!(n.as_f64(), Some(1.5));
    }

    #[test]
    fn from_f64_canonical() {
        assert_eq!(Number::from_f64(0.0).unwrap().as_str(), "0");
        assert_eq!(Number::from_f64(-0.0).unwrap().as_str(), "0");
        assert_eq!(Number::from_f64(1.0).unwrap().as_str(), "1");
        assert_eq!(Number::from_f64(1.5).unwrap().as_str(), "1.5");
        assert_eq!(Number::from_f64(-0.5).unwrap().as_str(), "-0.5");
        assert_eq!(Number::from_f64(1e5).unwrap().as_str(), "100000");
        assert_eq!(Number::from_f64(1e-3).unwrap().as_str(), "0.001");
    }

    #[test]
    fn from_f64_expands_exponent_notation() {
        assert_eq!(Number::from_f64(1e16).unwrap().as_str(), "10000000000000000");
        assert_eq!(
            Number::from_f64(-1.5e17).unwrap().as_str(),
            "-150000000000000000"
        );
        assert_eq!(Number::from_f64(2.5e-6).unwrap().as_str(), "0.0000025");
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
        assert!(Number::from_f64(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn integer_accessors() {
        let n = Number::from_i64(-42);
        assert_eq!(n.as_i64(), Some(-42));
        assert_eq!(n.as_u64(), None);
        assert_eq!(Number::from_u64(u64::MAX).as_u64(), Some(u64::MAX));
    }
}

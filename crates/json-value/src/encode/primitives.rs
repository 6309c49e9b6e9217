use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::options::EscapeMode;

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}

fn is_control(c: char) -> bool {
    (c as u32) < 0x20
}

/// Escapes `s` and writes it into `out` wrapped in double quotes.
///
/// Both modes escape `"`, `\`, tab, newline, and carriage return. Strict
/// mode additionally escapes the remaining control characters below 0x20 as
/// `\u00XX`; legacy mode passes them through raw.
pub fn escape_and_quote_into(out: &mut String, s: &str, mode: EscapeMode) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => {
                out.push('\\');
                out.push('"');
            }
            '\\' => {
                out.push('\\');
                out.push('\\');
            }
            '\t' => {
                out.push_str("\\t");
            }
            '\n' => {
                out.push_str("\\n");
            }
            '\r' => {
                out.push_str("\\r");
            }
            c if mode == EscapeMode::Strict && is_control(c) => {
                use core::fmt::Write as _;
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Base64 of `bytes` wrapped in double quotes. The standard alphabet never
/// contains characters that need escaping.
pub fn quote_base64_into(out: &mut String, bytes: &[u8]) {
    out.push('"');
    STANDARD.encode_string(bytes, out);
    out.push('"');
}

/// String escaping behavior for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Escape `"`, `\`, and every control character below 0x20. Output is
    /// always valid JSON text.
    #[default]
    Strict,
    /// Escape only `"`, `\`, tab, newline, and carriage return. Other
    /// control characters pass through raw, which is not strictly valid
    /// JSON; kept for consumers of the historical output.
    Legacy,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Emit indented multi-line output instead of the compact form.
    pub pretty: bool,
    /// Sort object keys lexicographically instead of keeping insertion order.
    pub sorted_keys: bool,
    /// Indentation size for pretty output (default: 2 spaces)
    pub indent: usize,
    pub escape: EscapeMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pretty: false,
            sorted_keys: false,
            indent: 2,
            escape: EscapeMode::default(),
        }
    }
}

/// Output buffer with a cached indentation string for pretty printing.
pub struct JsonWriter {
    out: String,
    indent_cache: String,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    pub fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn push(&mut self, ch: char) {
        self.out.push(ch);
    }

    /// Newline followed by `columns` spaces.
    pub fn newline_indent(&mut self, columns: usize) {
        self.out.push('\n');
        if columns == 0 {
            return;
        }
        if self.indent_cache.len() < columns {
            self.indent_cache
                .extend(core::iter::repeat(' ').take(columns - self.indent_cache.len()));
        }
        self.out.push_str(&self.indent_cache[..columns]);
    }

    /// Direct access for escape routines that write into the buffer.
    pub fn buf_mut(&mut self) -> &mut String {
        &mut self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out.into_bytes()
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

use crate::{
    Result,
    encode::{primitives, writer::JsonWriter},
    options::Options,
    value::Value,
};

pub fn encode_value(
    value: &Value,
    w: &mut JsonWriter,
    opts: &Options,
    depth: usize,
) -> Result<()> {
    match value {
        Value::Null => w.raw(primitives::format_null()),
        Value::Bool(b) => w.raw(primitives::format_bool(*b)),
        Value::Number(n) => w.raw(n.as_str()),
        Value::String(s) | Value::Date(s) => {
            primitives::escape_and_quote_into(w.buf_mut(), s, opts.escape)
        }
        Value::Bytes(b) => primitives::quote_base64_into(w.buf_mut(), b),
        Value::Array(items) => {
            if items.is_empty() {
                w.raw("[]");
                return Ok(());
            }
            w.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.push(',');
                }
                if opts.pretty {
                    w.newline_indent((depth + 1) * opts.indent);
                }
                encode_value(item, w, opts, depth + 1)?;
            }
            if opts.pretty {
                w.newline_indent(depth * opts.indent);
            }
            w.push(']');
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                w.raw("{}");
                return Ok(());
            }
            let mut pairs: Vec<(&str, &Value)> =
                entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
            if opts.sorted_keys {
                pairs.sort_by(|a, b| a.0.cmp(b.0));
            }
            w.push('{');
            for (i, (key, item)) in pairs.iter().enumerate() {
                if i > 0 {
                    w.push(',');
                }
                if opts.pretty {
                    w.newline_indent((depth + 1) * opts.indent);
                }
                primitives::escape_and_quote_into(w.buf_mut(), key, opts.escape);
                w.push(':');
                if opts.pretty {
                    w.push(' ');
                }
                encode_value(item, w, opts, depth + 1)?;
            }
            if opts.pretty {
                w.newline_indent(depth * opts.indent);
            }
            w.push('}');
        }
    }
    Ok(())
}

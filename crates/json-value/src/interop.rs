//! serde_json bridge: the delegated decoder and conversions between
//! [`Value`] and `serde_json::Value`.
//!
//! serde_json is built with `preserve_order` and `arbitrary_precision`:
//! object member order, significant digits, and trailing fractional zeros
//! all survive a parse. Exponent spelling is the one thing the parser
//! normalizes (lowercase `e`, explicit sign), so `2E-3` comes back as
//! `2e-3`; output is stable from the first re-serialization onward.

use std::io::Read;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};
use crate::number::Number;
use crate::value::Value;

pub fn from_str(s: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(s)?;
    Ok(Value::from(parsed))
}

pub fn from_slice(bytes: &[u8]) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(Value::from(parsed))
}

pub fn from_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    from_str(&s)
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Display on an arbitrary_precision number is the parsed token
            // (exponent spelling normalized, digits intact). A parsed number
            // always satisfies the JSON grammar, so the fallback arm is
            // unreachable in practice.
            serde_json::Value::Number(n) => match Number::from_text(n.to_string()) {
                Some(n) => Value::Number(n),
                None => Value::Null,
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = Error;

    fn try_from(value: &Value) -> Result<serde_json::Value> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => {
                let parsed: serde_json::Number =
                    serde_json::from_str(n.as_str()).map_err(|e| {
                        Error::Encoding(format!("unrepresentable number {}: {e}", n.as_str()))
                    })?;
                serde_json::Value::Number(parsed)
            }
            Value::String(s) | Value::Date(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => serde_json::Value::String(STANDARD.encode(b)),
            Value::Array(items) => {
                let converted = items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<Vec<serde_json::Value>>>()?;
                serde_json::Value::Array(converted)
            }
            Value::Object(entries) => {
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (k, v) in entries {
                    map.insert(k.clone(), serde_json::Value::try_from(v)?);
                }
                serde_json::Value::Object(map)
            }
        })
    }
}

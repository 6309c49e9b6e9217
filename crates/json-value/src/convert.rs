//! Conversion contracts between domain types and [`Value`].
//!
//! [`ToJson`] and [`FromJson`] are the two halves; a type wanting both just
//! implements both. The `including`/`excluding` projections are free
//! functions over [`ToJson`] rather than provided methods, so implementors
//! pick up the derived behavior without inheriting anything.

use crate::error::{Error, Result};
use crate::value::Value;

pub trait ToJson {
    fn to_json(&self) -> Result<Value>;
}

pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Result<Self>;
}

impl ToJson for Value {
    fn to_json(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl FromJson for Value {
    fn from_json(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

/// A sequence of representable elements is representable as an array.
impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> Result<Value> {
        let items = self.iter().map(T::to_json).collect::<Result<Vec<_>>>()?;
        Ok(Value::Array(items))
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Result<Value> {
        self.as_slice().to_json()
    }
}

fn mismatch(expected: &'static str, found: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value))
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl FromJson for i64 {
    fn from_json(value: &Value) -> Result<Self> {
        value.as_i64().ok_or_else(|| mismatch("number", value))
    }
}

impl FromJson for u64 {
    fn from_json(value: &Value) -> Result<Self> {
        value.as_u64().ok_or_else(|| mismatch("number", value))
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Result<Self> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }
}

impl FromJson for Vec<u8> {
    fn from_json(value: &Value) -> Result<Self> {
        value
            .as_bytes()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| mismatch("bytes", value))
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| mismatch("array", value))?;
        items.iter().map(T::from_json).collect()
    }
}

/// Typed field access on an object value: `MissingKey` when the key is
/// absent, the element's own conversion error otherwise.
pub fn get_field<T: FromJson>(value: &Value, key: &str) -> Result<T> {
    let field = value.get(key).ok_or_else(|| Error::MissingKey {
        key: key.to_string(),
    })?;
    T::from_json(field)
}

/// Projects a representable value down to the named keys. An array maps
/// element-wise; anything else is treated as one object. Missing keys are
/// an error.
pub fn to_json_including<T: ToJson + ?Sized>(value: &T, keys: &[&str]) -> Result<Value> {
    match value.to_json()? {
        Value::Array(items) => {
            let filtered = items
                .iter()
                .map(|item| include_keys(item, keys))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(filtered))
        }
        other => include_keys(&other, keys),
    }
}

/// Projects a representable value down to everything but the named keys.
/// An array maps element-wise; absent keys are ignored.
pub fn to_json_excluding<T: ToJson + ?Sized>(value: &T, keys: &[&str]) -> Result<Value> {
    match value.to_json()? {
        Value::Array(items) => Ok(Value::Array(
            items
                .into_iter()
                .map(|item| exclude_keys(item, keys))
                .collect(),
        )),
        other => Ok(exclude_keys(other, keys)),
    }
}

fn include_keys(json: &Value, keys: &[&str]) -> Result<Value> {
    let mut out = Value::Object(Vec::new());
    for key in keys {
        let field = json.get(key).ok_or_else(|| Error::MissingKey {
            key: (*key).to_string(),
        })?;
        out.set(*key, field.clone())?;
    }
    Ok(out)
}

fn exclude_keys(mut json: Value, keys: &[&str]) -> Value {
    for key in keys {
        json.remove_key(key);
    }
    json
}

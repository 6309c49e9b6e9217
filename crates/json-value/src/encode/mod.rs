//! Serialization pipeline: variant dispatch, token rendering, escaping.

pub mod encoders;
pub mod primitives;
pub mod writer;

use crate::{Result, options::Options, value::Value};

pub fn encode_value_to_string(value: &Value, options: &Options) -> Result<String> {
    let mut w = writer::JsonWriter::new();
    encoders::encode_value(value, &mut w, options, 0)?;
    Ok(w.into_string())
}

pub fn encode_value_to_vec(value: &Value, options: &Options) -> Result<Vec<u8>> {
    encode_value_to_string(value, options).map(String::into_bytes)
}

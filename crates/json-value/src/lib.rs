#![doc = include_str!("../README.md")]

pub mod convert;
pub mod encode;
pub mod error;
pub mod interop;
pub mod number;
pub mod options;
pub mod value;

pub use crate::convert::{FromJson, ToJson, get_field, to_json_excluding, to_json_including};
pub use crate::error::{Error, Result};
pub use crate::number::Number;
pub use crate::options::{EscapeMode, Options};
pub use crate::value::Value;

use std::io::{Read, Write};

pub fn encode_to_vec(value: &Value, options: &Options) -> Result<Vec<u8>> {
    crate::encode::encode_value_to_vec(value, options)
}

pub fn encode_to_string(value: &Value, options: &Options) -> Result<String> {
    crate::encode::encode_value_to_string(value, options)
}

pub fn encode_to_writer<W: Write>(mut writer: W, value: &Value, options: &Options) -> Result<()> {
    let bytes = encode_to_vec(value, options)?;
    writer.write_all(&bytes)?;
    Ok(())
}

pub fn decode_from_str(s: &str) -> Result<Value> {
    crate::interop::from_str(s)
}

pub fn decode_from_slice(bytes: &[u8]) -> Result<Value> {
    crate::interop::from_slice(bytes)
}

pub fn decode_from_reader<R: Read>(reader: R) -> Result<Value> {
    crate::interop::from_reader(reader)
}

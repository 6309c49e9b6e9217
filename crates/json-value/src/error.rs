use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The delegated decoder rejected the input text.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value could not be rendered into the target object model.
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("missing key: {key}")]
    MissingKey { key: String },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = core::result::Result<T, Error>;

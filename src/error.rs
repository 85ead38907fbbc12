//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and serialization errors, and provides semantic
//! variants for input validation and engine failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot find data file: {path}\nExpected {expected} in the input data directory.")]
    MissingInput { path: PathBuf, expected: &'static str },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Engine library error: {0}")]
    EngineLoad(String),

    #[error("Engine ABI {found} is incompatible with launcher ABI {expected}")]
    EngineAbi { found: u32, expected: u32 },

    #[error("Retrieval engine failed: {0}")]
    Engine(String),

    #[error("Configuration serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn engine<E: std::fmt::Display>(e: E) -> Self {
        Error::Engine(e.to_string())
    }
}

//! Error types for the CLI surface.
//!
//! The controller and state are infallible; only loading configuration and
//! driving the terminal can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while starting or running the form.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file exists but could not be read.
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for our schema.
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Length bounds violate `1 <= min <= default <= max`.
    #[error("invalid length range: min {min}, default {default}, max {max}")]
    InvalidRange { min: u32, default: u32, max: u32 },

    /// Requested length lies outside the configured range.
    #[error("length {value} is outside {min}..={max}")]
    LengthOutOfRange { value: u32, min: u32, max: u32 },

    /// Terminal or log file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Draw list error types

use std::io;
use thiserror::Error;

/// Errors that can occur while authoring or packing a draw list
#[derive(Error, Debug)]
pub enum DrawListError {
    /// Requested primitive type is not in the registry
    #[error("Unknown primitive type: {requested}")]
    Configuration { requested: String },

    /// Argument outside its valid range (tolerance, object id, settings)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error when reading a settings file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Settings file could not be parsed
    #[error("Settings parsing error: {0}")]
    Settings(#[from] toml::de::Error),
}

/// Result type for draw list operations
pub type Result<T> = std::result::Result<T, DrawListError>;

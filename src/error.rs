//! Errors raised while reading workflow configuration.

use thiserror::Error;

/// Failure modes of settings resolution and control file parsing.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Environment variable naming the installation prefix is unset
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Control file or library prefix could not be read
    #[error("configuration path could not be read: {0}")]
    Io(#[from] std::io::Error),

    /// Control file value where a number was expected
    #[error("value for '{tag}' is not numeric: {value}")]
    NotNumeric { tag: String, value: String },
}

use thiserror::Error;

/// Main error type for groupconf
///
/// Every grammar violation carries enough position information to point a
/// user at the offending line or override directive. Lookup of absent
/// groups/keys is never an error (see [`crate::config`]).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("duplicate group '{name}' at line {line}")]
    DuplicateGroup { name: String, line: usize },

    #[error("setting at line {line} appears before any group header")]
    MissingGroup { line: usize },

    #[error("unable to parse line {line}: '{text}'")]
    InvalidLine { line: usize, text: String },

    #[error("invalid override directive #{index}: '{directive}' (expected group.key=value)")]
    InvalidOverride { index: usize, directive: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

//! Error types for helper construction and role-claim decoding
//!
//! The boolean check API never surfaces these: a failed decode or a bad
//! predicate name is a deny. Errors only come out of fallible setup paths
//! (configuration, builder, explicit claim decoding).

use thiserror::Error;

/// Result type for fallible hierauth operations
pub type Result<T> = std::result::Result<T, HierAuthError>;

/// Errors raised while building a helper or decoding session data
#[derive(Error, Debug)]
pub enum HierAuthError {
    /// Role claim is not a JSON array of strings
    #[error("Invalid role claim: {0}")]
    InvalidRoleClaim(String),

    /// Predicate grammar could not be compiled
    #[error("Invalid predicate pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Session payload could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

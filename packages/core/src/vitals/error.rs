//! Error types for limits loading and validation

use thiserror::Error;

/// Errors raised while building or loading a limits table.
///
/// Reading-level problems (unknown vitals, missing or NaN readings) are not
/// errors; they surface as alerts so they reach the same reporter.
#[derive(Error, Debug)]
pub enum VitalsError {
    #[error("Invalid limit for {name}: {message}")]
    InvalidLimit { name: String, message: String },

    #[error("Duplicate vital in limits table: {name}")]
    DuplicateVital { name: String },

    #[error("Limit name must not be empty")]
    EmptyName,

    #[error("Failed to read limits file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse limits: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl VitalsError {
    pub fn invalid_limit(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLimit {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_vital(name: impl Into<String>) -> Self {
        Self::DuplicateVital { name: name.into() }
    }
}

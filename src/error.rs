//! Error types for garment-impact
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for calculator operations
pub type ImpactResult<T> = Result<T, ImpactError>;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the impact calculator and the factor table builder
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    /// Malformed descriptor or factor value
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Well-formed category/material pair with no entry in the factor table
    #[error("no impact factor registered for {category} / {material}")]
    UnknownCombination { category: String, material: String },
}

impl ImpactError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ImpactError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for `InvalidInput`, `None` otherwise
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ImpactError::InvalidInput { field, .. } => Some(*field),
            ImpactError::UnknownCombination { .. } => None,
        }
    }
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("could not read config {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be parsed into the config schema
    #[error("invalid config in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Config parsed but describes an invalid factor table
    #[error("invalid factor table: {0}")]
    InvalidTable(#[from] ImpactError),
}

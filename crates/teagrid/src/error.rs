//! Error types for grid construction and configuration.
//!
//! The data pipeline itself never fails: unknown column titles and
//! out-of-range pages are no-ops. Errors only come from building a column
//! registry or loading a [`GridConfig`](crate::config::GridConfig).

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while setting up a grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// Two columns in one registry share a title.
    #[error("duplicate column title: {0:?}")]
    DuplicateColumn(String),

    /// The configured default page size is zero.
    #[error("page size must be positive, got {0}")]
    InvalidPageSize(usize),

    /// The configured page-size option list is empty.
    #[error("page size options must not be empty")]
    EmptyPageSizeOptions,

    /// One of the configured page-size options is zero.
    #[error("page size option at index {index} must be positive")]
    InvalidPageSizeOption {
        /// Position of the offending option.
        index: usize,
    },

    /// The configuration text is not valid TOML for [`GridConfig`](crate::config::GridConfig).
    #[error("failed to parse grid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

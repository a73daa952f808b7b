//! Grid configuration.
//!
//! [`GridConfig`] holds the tunables a host may want to change without
//! touching code: the initial page size, the page sizes offered in the
//! page-size menu, the delay used when closing that menu after a click-away,
//! the default column width and the label of the "all columns" filter entry.
//!
//! # Example
//!
//! ```rust
//! use teagrid::config::GridConfig;
//!
//! let config = GridConfig::from_toml_str("page_size = 25\nclose_delay_ms = 150").unwrap();
//! assert_eq!(config.page_size, 25);
//! assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default delay before a deferred page-size menu close fires.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 100;

/// Runtime configuration for a [`DataGrid`](crate::grid::DataGrid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Records per page when the grid is created.
    pub page_size: usize,

    /// Choices listed in the page-size menu.
    pub page_size_options: Vec<usize>,

    /// Delay, in milliseconds, for `ClosePageSizeMenuLater`.
    pub close_delay_ms: u64,

    /// Display width of a column that does not set its own.
    pub column_width: usize,

    /// Label of the filter-menu entry that searches every column.
    pub all_label: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 25, 50, 100],
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
            column_width: 12,
            all_label: "All".to_string(),
        }
    }
}

impl GridConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial page size.
    #[must_use]
    pub fn page_size(mut self, n: usize) -> Self {
        self.page_size = n;
        self
    }

    /// Sets the page-size menu options.
    #[must_use]
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Sets the deferred close delay.
    #[must_use]
    pub fn close_delay(mut self, delay: Duration) -> Self {
        self.close_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Returns the deferred close delay as a [`Duration`].
    #[must_use]
    pub fn close_delay_duration(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    /// Checks that every page size is positive and the option list is usable.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(GridError::InvalidPageSize(self.page_size));
        }
        if self.page_size_options.is_empty() {
            return Err(GridError::EmptyPageSizeOptions);
        }
        if let Some(index) = self.page_size_options.iter().position(|&n| n == 0) {
            return Err(GridError::InvalidPageSizeOption { index });
        }
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading grid config");
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GridConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.close_delay_duration(), Duration::from_millis(100));
        assert_eq!(config.all_label, "All");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GridConfig::new()
            .page_size(5)
            .page_size_options(vec![5, 15])
            .close_delay(Duration::from_millis(250));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.page_size_options, vec![5, 15]);
        assert_eq!(config.close_delay_ms, 250);
    }

    #[test]
    fn test_config_partial_toml() {
        let config = GridConfig::from_toml_str("all_label = \"Everything\"").unwrap();
        assert_eq!(config.all_label, "Everything");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_config_rejects_zero_page_size() {
        let err = GridConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, GridError::InvalidPageSize(0)));
    }

    #[test]
    fn test_config_rejects_bad_options() {
        let err = GridConfig::from_toml_str("page_size_options = []").unwrap_err();
        assert!(matches!(err, GridError::EmptyPageSizeOptions));

        let err = GridConfig::from_toml_str("page_size_options = [10, 0]").unwrap_err();
        assert!(matches!(err, GridError::InvalidPageSizeOption { index: 1 }));
    }

    #[test]
    fn test_config_rejects_malformed_toml() {
        let err = GridConfig::from_toml_str("page_size = \"ten\"").unwrap_err();
        assert!(matches!(err, GridError::ConfigParse(_)));
    }

    #[test]
    fn test_config_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.toml");
        std::fs::write(&path, "page_size = 50\npage_size_options = [50, 500]\n").unwrap();

        let config = GridConfig::from_path(&path).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.page_size_options, vec![50, 500]);

        let missing = GridConfig::from_path(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, GridError::Io { .. }));
    }
}

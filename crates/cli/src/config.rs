//! Demo configuration.

use std::path::PathBuf;

use stockbook_inventory::DEFAULT_DATA_FILE;

/// Environment variable overriding where the stock file lives.
pub const DATA_PATH_ENV: &str = "STOCKBOOK_DATA_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Stock file written and read back by the demo.
    pub data_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl DemoConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset or blank values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATA_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => Self::new(path),
            None => {
                tracing::debug!("{DATA_PATH_ENV} not set; using {DEFAULT_DATA_FILE}");
                Self::default()
            }
        }
    }
}

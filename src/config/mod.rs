//! Session configuration: initial preferences and trace level.
//!
//! An embedding may seed a session with non-default preferences (the search
//! column and match-case flag the table starts with) and a trace level for
//! the observability layer. Configuration is parsed from TOML; every field is
//! optional and the defaults reproduce the table's stock initial state.
//!
//! ```toml
//! column = "City"
//! match_case = true
//! trace_level = "debug"
//! ```

use serde::Deserialize;

use crate::domain::{Column, GridsiftError, Result};

/// Initial session preferences.
///
/// The defaults are the table's stock state: Name column, case-insensitive,
/// no trace level override. Note that the search term is not configurable; a
/// session always starts unfiltered.
///
/// # Examples
///
/// ```
/// use gridsift::config::Config;
/// use gridsift::domain::Column;
///
/// let config = Config::from_toml_str("column = \"Email\"")?;
/// assert_eq!(config.column, Column::Email);
/// assert!(!config.match_case);
/// # Ok::<(), gridsift::domain::GridsiftError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Column the search starts scoped to.
    #[serde(default = "default_column")]
    pub column: Column,

    /// Whether matching starts case-sensitive.
    #[serde(default)]
    pub match_case: bool,

    /// Trace level filter for [`crate::observability::init_tracing`]
    /// (e.g. `"info"`, `"gridsift=debug"`). `None` means the default level.
    #[serde(default)]
    pub trace_level: Option<String>,
}

fn default_column() -> Column {
    Column::Name
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column: default_column(),
            match_case: false,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// An unknown column label or unknown key is a configuration error, not a
    /// silent fallback to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GridsiftError::Config`] describing the parse failure.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| GridsiftError::Config(e.to_string()))
    }

    /// Loads a configuration from a TOML file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`GridsiftError::Io`](crate::domain::GridsiftError::Io) if the
    /// file cannot be read, or [`GridsiftError::Config`] if it cannot be
    /// parsed.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_stock_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.column, Column::Name);
        assert!(!config.match_case);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config = Config::from_toml_str(
            "column = \"City\"\nmatch_case = true\ntrace_level = \"debug\"",
        )
        .unwrap();
        assert_eq!(config.column, Column::City);
        assert!(config.match_case);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_column_is_rejected_not_defaulted() {
        let err = Config::from_toml_str("column = \"Surname\"").unwrap_err();
        assert!(matches!(err, GridsiftError::Config(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("colour = \"Name\"").unwrap_err();
        assert!(matches!(err, GridsiftError::Config(_)));
    }
}

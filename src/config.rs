//! Configuration for text-layer highlighting.

use crate::annotation_types::HighlightColor;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The term highlighted on every page unless configured otherwise.
pub const DEFAULT_SEARCH_TERM: &str = "ligula";

/// Logging detail level.
///
/// Controls the verbosity of logging output. The command-line tool maps this
/// onto the `env_logger` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only critical errors are logged
    Error,
    /// Warnings and errors are logged
    Warn,
    /// General information (default level)
    #[default]
    Info,
    /// Per-pass details for troubleshooting
    Debug,
    /// Per-fragment decisions
    Trace,
}

impl LogLevel {
    /// Equivalent `log` filter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Highlighting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Literal term located on each page. An empty term never matches.
    pub search_term: String,

    /// Color painted on matched fragments.
    pub color: HighlightColor,

    /// Logging verbosity.
    pub log_level: LogLevel,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            color: HighlightColor::marker_yellow(),
            log_level: LogLevel::Info,
        }
    }

    /// Set the search term.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the highlight color.
    pub fn with_color(mut self, color: HighlightColor) -> Self {
        self.color = color;
        self
    }

    /// Set the logging verbosity.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlight::config::{HighlightConfig, LogLevel};
    ///
    /// let config = HighlightConfig::from_json_str(r#"{ "log_level": "debug" }"#).unwrap();
    /// assert_eq!(config.search_term, "ligula");
    /// assert_eq!(config.log_level, LogLevel::Debug);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_config_default() {
        let config = HighlightConfig::default();
        assert_eq!(config.search_term, DEFAULT_SEARCH_TERM);
        assert_eq!(config.color, HighlightColor::marker_yellow());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_config_builder() {
        let red = HighlightColor::new(255, 0, 0, 0.5).unwrap();
        let config = HighlightConfig::new()
            .with_search_term("dolor")
            .with_color(red)
            .with_log_level(LogLevel::Trace);

        assert_eq!(config.search_term, "dolor");
        assert_eq!(config.color, red);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_from_json_full() {
        let config = HighlightConfig::from_json_str(
            r#"{ "search_term": "amet", "color": "rgba(0 0 255 / 0.25)", "log_level": "warn" }"#,
        )
        .unwrap();
        assert_eq!(config.search_term, "amet");
        assert_eq!(config.color, HighlightColor::new(0, 0, 255, 0.25).unwrap());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let config = HighlightConfig::from_json_str("{}").unwrap();
        assert_eq!(config, HighlightConfig::default());
    }

    #[test]
    fn test_from_json_bad_color() {
        let result = HighlightConfig::from_json_str(r#"{ "color": "not-a-color" }"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = HighlightConfig::from_json_file("/nonexistent/highlight.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }
}

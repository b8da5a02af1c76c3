//! User settings for the bank analyzer
//!
//! Stored as JSON in the configuration directory. Every field has a default,
//! so a partial or missing file still loads.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::AnalyzerPaths;
use crate::analysis::DEFAULT_TOP_COUNT;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::ingest::DEFAULT_DATE_FORMAT;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Transaction file read when no path is given on the command line
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Currency symbol appended to displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Primary date format for ingestion (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of transactions shown by the top expenses view
    #[serde(default = "default_top_count")]
    pub top_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_data_file() -> PathBuf {
    PathBuf::from("bank_data.csv")
}

fn default_currency() -> String {
    "EGP".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_top_count() -> usize {
    DEFAULT_TOP_COUNT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: default_data_file(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            top_count: default_top_count(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] for that.
    pub fn load_or_create(paths: &AnalyzerPaths) -> AnalyzerResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| AnalyzerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| AnalyzerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AnalyzerPaths) -> AnalyzerResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AnalyzerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AnalyzerError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.data_file, PathBuf::from("bank_data.csv"));
        assert_eq!(settings.currency_symbol, "EGP");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.top_count, 5);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AnalyzerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AnalyzerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "$".into(),
            top_count: 10,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.top_count, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AnalyzerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "USD"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "USD");
        assert_eq!(loaded.data_file, PathBuf::from("bank_data.csv"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AnalyzerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, AnalyzerError::Config(_)));
    }
}

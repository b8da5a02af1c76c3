//! Path management for the bank analyzer
//!
//! ## Path Resolution Order
//!
//! 1. `BANK_ANALYZER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/bank-analyzer` or `~/.config/bank-analyzer`
//! 3. Windows: `%APPDATA%\bank-analyzer`

use std::path::{Path, PathBuf};

use crate::error::{AnalyzerError, AnalyzerResult};

/// Environment variable that overrides the configuration directory
pub const DIR_ENV_VAR: &str = "BANK_ANALYZER_DIR";

/// Manages the paths used by the analyzer
#[derive(Debug, Clone)]
pub struct AnalyzerPaths {
    base_dir: PathBuf,
}

impl AnalyzerPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> AnalyzerResult<Self> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AnalyzerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/bank-analyzer/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> AnalyzerResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AnalyzerError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> AnalyzerResult<PathBuf> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                AnalyzerError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("bank-analyzer"))
}

#[cfg(windows)]
fn resolve_default_path() -> AnalyzerResult<PathBuf> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AnalyzerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("bank-analyzer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AnalyzerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DIR_ENV_VAR, temp_dir.path());
        let paths = AnalyzerPaths::new().unwrap();
        env::remove_var(DIR_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AnalyzerPaths::with_base_dir(temp_dir.path().join("nested").join("dir"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}

// User settings.
// Loaded from config.json; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DevfolioError, Result};

/// Terminals narrower than this start with the sidebar hidden.
pub const DEFAULT_NARROW_COLUMNS: u16 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub narrow_columns: u16,
    pub log_level: String,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            narrow_columns: DEFAULT_NARROW_COLUMNS,
            log_level: "info".to_string(),
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Read settings from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.narrow_columns == 0 {
            return Err(DevfolioError::Config(
                "narrow_columns must be greater than zero".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(DevfolioError::Config("log_level must not be empty".to_string()));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        narrow_columns: Option<u16>,
        log_level: Option<String>,
        catalog_path: Option<PathBuf>,
    ) -> Self {
        if let Some(columns) = narrow_columns {
            self.narrow_columns = columns;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.narrow_columns, DEFAULT_NARROW_COLUMNS);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "narrow_columns": 120 }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.narrow_columns, 120);
        assert_eq!(settings.log_level, "info");
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "narrow_columns = 3").unwrap();

        assert!(matches!(Settings::load(&path), Err(DevfolioError::Json(_))));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "narrow_columns": 0 }"#).unwrap();

        assert!(matches!(Settings::load(&path), Err(DevfolioError::Config(_))));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(
            Some(80),
            None,
            Some(PathBuf::from("/tmp/catalog.json")),
        );
        assert_eq!(settings.narrow_columns, 80);
        assert_eq!(settings.log_level, "info");
        assert_eq!(
            settings.catalog_path,
            Some(PathBuf::from("/tmp/catalog.json"))
        );
    }
}

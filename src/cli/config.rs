//! Configuration management for ExportDash
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.exportdash/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::checklist::{Status, StatusFilter, CHECKLIST_LEN, DEFAULT_NEXT_LIMIT};
use crate::errors::{ChecklistError, Result};
use crate::export::{ExportOptions, DEFAULT_FILE_STEM, DEFAULT_SHEET_NAME};

/// Characters Excel refuses in sheet names
const ILLEGAL_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Excel's sheet name length limit
const MAX_SHEET_NAME_LEN: usize = 31;

/// Complete configuration for ExportDash
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Spreadsheet export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub sheet_name: String,
    pub file_stem: String,
    pub output_dir: String,
}

/// Terminal display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub show_progress_bars: bool,
    pub default_filter: Vec<Status>,
    pub next_steps_limit: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            output_dir: ".".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_progress_bars: true,
            default_filter: Status::ALL.to_vec(),
            next_steps_limit: DEFAULT_NEXT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChecklistError::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&contents)
    }

    /// Parse and validate configuration text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| ChecklistError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(config_path) if config_path.exists() => Self::load_from_file(&config_path),
            _ => Ok(Config::default()),
        }
    }

    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".exportdash").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let sheet = &self.export.sheet_name;
        if sheet.trim().is_empty() {
            return Err(ChecklistError::ConfigError(
                "sheet_name must not be empty".to_string(),
            ));
        }

        if sheet.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(ChecklistError::ConfigError(format!(
                "sheet_name must be at most {} characters",
                MAX_SHEET_NAME_LEN
            )));
        }

        if let Some(c) = sheet.chars().find(|c| ILLEGAL_SHEET_CHARS.contains(c)) {
            return Err(ChecklistError::ConfigError(format!(
                "sheet_name contains illegal character '{}'",
                c
            )));
        }

        if self.export.file_stem.trim().is_empty() {
            return Err(ChecklistError::ConfigError(
                "file_stem must not be empty".to_string(),
            ));
        }

        if self.display.next_steps_limit == 0 || self.display.next_steps_limit > CHECKLIST_LEN {
            return Err(ChecklistError::ConfigError(format!(
                "next_steps_limit must be between 1 and {}",
                CHECKLIST_LEN
            )));
        }

        Ok(())
    }

    /// Workbook naming options
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            sheet_name: self.export.sheet_name.clone(),
            file_stem: self.export.file_stem.clone(),
        }
    }

    /// Initial status filter for a new session
    pub fn default_filter(&self) -> StatusFilter {
        self.display.default_filter.iter().copied().collect()
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Directory exports are written to
    pub fn output_dir(&self) -> PathBuf {
        Self::expand_path(&self.export.output_dir)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ChecklistError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.sheet_name, "Performance Checklist");
        assert_eq!(config.display.next_steps_limit, 3);
        assert!(config.default_filter().is_all());
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_sheet() {
        let mut config = Config::default();
        config.export.sheet_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_long_sheet() {
        let mut config = Config::default();
        config.export.sheet_name = "x".repeat(32);
        assert!(config.validate().is_err());
        config.export.sheet_name = "x".repeat(31);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_illegal_char() {
        let mut config = Config::default();
        config.export.sheet_name = "Q1/Q2".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_next_limit() {
        let mut config = Config::default();
        config.display.next_steps_limit = 0;
        assert!(config.validate().is_err());
        config.display.next_steps_limit = 16;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [export]
            file_stem = "q3_checklist"

            [display]
            default_filter = ["NotStarted", "InProgress"]
            "#,
        )
        .unwrap();

        assert_eq!(config.export_options().file_name(), "q3_checklist.xlsx");
        assert_eq!(config.export.sheet_name, "Performance Checklist");
        let filter = config.default_filter();
        assert!(filter.contains(Status::InProgress));
        assert!(!filter.contains(Status::Done));
        assert!(config.display.color_output);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("[export\nsheet_name = 1").is_err());
        assert!(Config::from_toml("[display]\ndefault_filter = [\"Later\"]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nnext_steps_limit = 5\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.display.next_steps_limit, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ChecklistError::ConfigError(_))
        ));
    }

    #[test]
    fn test_to_toml_roundtrips_defaults() {
        let text = Config::default().to_toml().unwrap();
        assert!(text.contains("sheet_name"));
        assert!(Config::from_toml(&text).is_ok());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path("~/exports");
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let expanded = Config::expand_path("/absolute/path");
        assert_eq!(expanded.to_string_lossy(), "/absolute/path");
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_prefix, validate_path, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_FILE_PREFIX: &str = "ynab";

/// Settings for one conversion, after defaults, config file and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub log_level: Option<String>,
}

impl RunConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            log_level: None,
        }
    }

    /// 套用 TOML 設定檔中的值
    pub fn with_file_config(mut self, file: &TomlConfig) -> Self {
        if let Some(directory) = &file.output.directory {
            self.output_dir = PathBuf::from(directory);
        }
        if let Some(prefix) = &file.output.prefix {
            self.file_prefix = prefix.clone();
        }
        if let Some(level) = &file.logging.level {
            self.log_level = Some(level.clone());
        }
        self
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn file_prefix(&self) -> &str {
        &self.file_prefix
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_path)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_file_prefix("prefix", &self.file_prefix)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("bank.csv");
        assert_eq!(config.output_dir(), Path::new("."));
        assert_eq!(config.file_prefix(), "ynab");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_config_overrides_defaults() {
        let file = TomlConfig::from_toml_str(
            "[output]\ndirectory = \"exports\"\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let config = RunConfig::new("bank.csv").with_file_config(&file);

        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert_eq!(config.file_prefix, "ynab");
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_empty_input_path_is_invalid() {
        assert!(RunConfig::new("").validate().is_err());
    }
}

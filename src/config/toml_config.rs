use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_file_prefix, validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| EtlError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read {}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(directory) = &self.output.directory {
            validate_path("output.directory", Path::new(directory))?;
        }
        if let Some(prefix) = &self.output.prefix {
            validate_file_prefix("output.prefix", prefix)?;
        }
        if let Some(level) = &self.logging.level {
            validate_non_empty_string("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [output]
            directory = "./exports"
            prefix = "budget"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.directory.as_deref(), Some("./exports"));
        assert_eq!(config.output.prefix.as_deref(), Some("budget"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.output.directory.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("YNAB_CONVERT_TEST_DIR", "/tmp/ynab");
        let config = TomlConfig::from_toml_str(
            r#"
            [output]
            directory = "${YNAB_CONVERT_TEST_DIR}"
            prefix = "${YNAB_CONVERT_UNSET_VAR}"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.directory.as_deref(), Some("/tmp/ynab"));
        assert_eq!(config.output.prefix.as_deref(), Some("${YNAB_CONVERT_UNSET_VAR}"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[output\ndirectory = 1").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_prefix_with_separator_is_rejected() {
        let config = TomlConfig::from_toml_str("[output]\nprefix = \"../ynab\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("convert.toml");
        std::fs::write(&path, "[output]\nprefix = \"ynab\"\n").unwrap();

        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.output.prefix.as_deref(), Some("ynab"));

        assert!(TomlConfig::from_file(dir.path().join("missing.toml")).is_err());
    }
}

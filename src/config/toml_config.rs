use crate::core::ConfigProvider;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub balance: BalanceConfig,
    pub catalog: Option<CatalogConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceConfig {
    pub backend: String,
    pub secondary_backend: Option<String>,
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub products_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ShopError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn backend(&self) -> &str {
        &self.balance.backend
    }

    fn secondary_backend(&self) -> &str {
        self.balance.secondary_backend.as_deref().unwrap_or("table")
    }

    fn data_dir(&self) -> &str {
        self.balance.data_dir.as_deref().unwrap_or("./data")
    }

    fn products_file(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.products_file.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("balance.backend", self.backend(), &super::backend::BACKEND_NAMES)?;
        validate_one_of(
            "balance.secondary_backend",
            self.secondary_backend(),
            &super::backend::BACKEND_NAMES,
        )?;
        validate_path("balance.data_dir", self.data_dir())?;
        if let Some(products_file) = self.products_file() {
            validate_path("catalog.products_file", products_file)?;
        }
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[balance]
backend = "file"
secondary_backend = "document"
data_dir = "./balances"

[catalog]
products_file = "catalog.csv"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend(), "file");
        assert_eq!(config.secondary_backend(), "document");
        assert_eq!(config.data_dir(), "./balances");
        assert_eq!(config.products_file(), Some("catalog.csv"));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_sections_fall_back() {
        let config = TomlConfig::from_toml_str("[balance]\nbackend = \"document\"\n").unwrap();
        assert_eq!(config.secondary_backend(), "table");
        assert_eq!(config.data_dir(), "./data");
        assert_eq!(config.products_file(), None);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHOP_SKETCH_TEST_DATA_DIR", "/var/shop");

        let toml_content = r#"
[balance]
backend = "file"
data_dir = "${SHOP_SKETCH_TEST_DATA_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_dir(), "/var/shop");

        std::env::remove_var("SHOP_SKETCH_TEST_DATA_DIR");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let config = TomlConfig::from_toml_str(
            "[balance]\nbackend = \"document\"\ndata_dir = \"${SHOP_SKETCH_SURELY_UNSET}\"\n",
        )
        .unwrap();
        assert_eq!(config.data_dir(), "${SHOP_SKETCH_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            "[balance]\nbackend = \"mysql\"\n",
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            "[balance]\nbackend = \"table\"\n[logging]\nlevel = \"loud\"\n",
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_balance_section() {
        assert!(matches!(
            TomlConfig::from_toml_str("[logging]\nlevel = \"info\"\n"),
            Err(ShopError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[balance]\nbackend = \"table\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.backend(), "table");
    }
}

pub mod backend;
pub mod toml_config;

pub use backend::BalanceBackend;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "shop-sketch"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Sets balances on two balance backends and prints one back")
)]
pub struct CliConfig {
    /// Path to a TOML configuration file; its values replace the flags below
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "document"))]
    pub backend: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "table"))]
    pub secondary_backend: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./data"))]
    pub data_dir: String,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config: None,
            backend: "document".to_string(),
            secondary_backend: "table".to_string(),
            data_dir: "./data".to_string(),
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn backend(&self) -> &str {
        &self.backend
    }

    fn secondary_backend(&self) -> &str {
        &self.secondary_backend
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    /// The balance demo has no catalog input.
    fn products_file(&self) -> Option<&str> {
        None
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("backend", &self.backend, &backend::BACKEND_NAMES)?;
        validate_one_of("secondary_backend", &self.secondary_backend, &backend::BACKEND_NAMES)?;
        validate_path("data_dir", &self.data_dir)?;
        Ok(())
    }
}

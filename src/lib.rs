pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{DocumentBalanceService, FileBalanceService, TableBalanceService};
pub use config::{toml_config::TomlConfig, BalanceBackend, CliConfig};
pub use crate::core::{balance_manager::BalanceManager, catalog::Catalog};
pub use domain::ports::{BalanceService, ConfigProvider, Search};
pub use utils::error::{Result, ShopError};

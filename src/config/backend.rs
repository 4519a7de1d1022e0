use crate::adapters::{DocumentBalanceService, FileBalanceService, TableBalanceService};
use crate::domain::ports::BalanceService;
use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

pub const BACKEND_NAMES: [&str; 3] = ["document", "table", "file"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceBackend {
    Document,
    Table,
    File,
}

impl BalanceBackend {
    /// Builds the service for this backend. `data_dir` is only used by `File`.
    pub fn build(&self, data_dir: impl AsRef<Path>) -> Arc<dyn BalanceService> {
        match self {
            Self::Document => Arc::new(DocumentBalanceService::new()),
            Self::Table => Arc::new(TableBalanceService::new()),
            Self::File => Arc::new(FileBalanceService::new(data_dir)),
        }
    }
}

impl FromStr for BalanceBackend {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "document" => Ok(Self::Document),
            "table" => Ok(Self::Table),
            "file" => Ok(Self::File),
            other => Err(ShopError::InvalidConfigValueError {
                field: "backend".to_string(),
                value: other.to_string(),
                reason: format!("Expected one of: {}", BACKEND_NAMES.join(", ")),
            }),
        }
    }
}

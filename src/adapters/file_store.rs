use crate::domain::ports::BalanceService;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub const BALANCE_FILE_NAME: &str = "balances.json";

/// Balances persisted as a JSON object in `<base_path>/balances.json`.
///
/// Every write rewrites the whole snapshot; the lock serializes
/// read-modify-write cycles within one process.
#[derive(Debug)]
pub struct FileBalanceService {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl FileBalanceService {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: base_path.as_ref().join(BALANCE_FILE_NAME),
            lock: Mutex::new(()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn read_snapshot(&self) -> Result<BTreeMap<String, i64>> {
        match tokio::fs::read(&self.file_path).await {
            Ok(data) if data.is_empty() => Ok(BTreeMap::new()),
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_snapshot(&self, snapshot: &BTreeMap<String, i64>) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let data = serde_json::to_vec_pretty(snapshot)?;
        tokio::fs::write(&self.file_path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl BalanceService for FileBalanceService {
    fn backend_name(&self) -> &str {
        "file"
    }

    async fn get_balance(&self, account_id: &str) -> Result<Option<i64>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_snapshot().await?.get(account_id).copied())
    }

    async fn set_balance(&self, account_id: &str, amount: i64) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut snapshot = self.read_snapshot().await?;
        snapshot.insert(account_id.to_string(), amount);
        self.write_snapshot(&snapshot).await?;
        tracing::debug!("Wrote {} balance(s) to {}", snapshot.len(), self.file_path.display());
        Ok(())
    }
}

use crate::domain::ports::BalanceService;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Balances kept as one document per account id.
#[derive(Debug, Default)]
pub struct DocumentBalanceService {
    documents: RwLock<HashMap<String, i64>>,
}

impl DocumentBalanceService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BalanceService for DocumentBalanceService {
    fn backend_name(&self) -> &str {
        "document"
    }

    async fn get_balance(&self, account_id: &str) -> Result<Option<i64>> {
        Ok(self.documents.read().await.get(account_id).copied())
    }

    async fn set_balance(&self, account_id: &str, amount: i64) -> Result<()> {
        self.documents
            .write()
            .await
            .insert(account_id.to_string(), amount);
        Ok(())
    }
}

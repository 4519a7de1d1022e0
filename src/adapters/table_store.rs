use crate::domain::ports::BalanceService;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
struct BalanceRow {
    account_id: String,
    balance: i64,
}

/// Balances kept as rows of a table ordered by account id, updated in place.
#[derive(Debug, Default)]
pub struct TableBalanceService {
    rows: RwLock<Vec<BalanceRow>>,
}

impl TableBalanceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl BalanceService for TableBalanceService {
    fn backend_name(&self) -> &str {
        "table"
    }

    async fn get_balance(&self, account_id: &str) -> Result<Option<i64>> {
        let rows = self.rows.read().await;
        let balance = rows
            .binary_search_by(|row| row.account_id.as_str().cmp(account_id))
            .ok()
            .map(|idx| rows[idx].balance);
        Ok(balance)
    }

    async fn set_balance(&self, account_id: &str, amount: i64) -> Result<()> {
        let mut rows = self.rows.write().await;
        match rows.binary_search_by(|row| row.account_id.as_str().cmp(account_id)) {
            Ok(idx) => rows[idx].balance = amount,
            Err(idx) => rows.insert(
                idx,
                BalanceRow {
                    account_id: account_id.to_string(),
                    balance: amount,
                },
            ),
        }
        Ok(())
    }
}

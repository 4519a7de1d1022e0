use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Balance lookup over some storage backend.
///
/// `get_balance` returns `None` for an account that was never set on this
/// instance. Two instances never see each other's writes.
#[async_trait]
pub trait BalanceService: Send + Sync {
    fn backend_name(&self) -> &str;
    async fn get_balance(&self, account_id: &str) -> Result<Option<i64>>;
    async fn set_balance(&self, account_id: &str, amount: i64) -> Result<()>;
}

/// Exact-key product search. Unknown keys yield an empty slice.
pub trait Search {
    fn search_products_by_name(&self, name: &str) -> &[Product];
    fn search_products_by_category(&self, category: &str) -> &[Product];
}

pub trait ConfigProvider: Send + Sync {
    fn backend(&self) -> &str;
    fn secondary_backend(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn products_file(&self) -> Option<&str>;
}

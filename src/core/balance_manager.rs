use crate::domain::ports::BalanceService;
use crate::utils::error::Result;

/// Forwards balance calls to whichever service the caller hands in.
#[derive(Debug, Default, Clone, Copy)]
pub struct BalanceManager;

impl BalanceManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn get_balance<S>(&self, service: &S, account_id: &str) -> Result<Option<i64>>
    where
        S: BalanceService + ?Sized,
    {
        tracing::debug!("get_balance({}) via {}", account_id, service.backend_name());
        service.get_balance(account_id).await
    }

    pub async fn set_balance<S>(&self, service: &S, account_id: &str, amount: i64) -> Result<()>
    where
        S: BalanceService + ?Sized,
    {
        tracing::debug!(
            "set_balance({}, {}) via {}",
            account_id,
            amount,
            service.backend_name()
        );
        service.set_balance(account_id, amount).await
    }
}

use crate::config::BalanceBackend;
use crate::core::balance_manager::BalanceManager;
use crate::core::ConfigProvider;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceDemoOutcome {
    pub primary_backend: String,
    pub secondary_backend: String,
    /// Balance of account "1" read back from the primary backend.
    pub balance: Option<i64>,
}

/// Sets account "1" to 10 on the primary backend and account "2" to 20 on the
/// secondary one, then reads account "1" back from the primary.
pub async fn run_balance_demo<C: ConfigProvider>(config: &C) -> Result<BalanceDemoOutcome> {
    let primary_backend: BalanceBackend = config.backend().parse()?;
    let secondary_backend: BalanceBackend = config.secondary_backend().parse()?;

    let primary = primary_backend.build(config.data_dir());
    let secondary = secondary_backend.build(config.data_dir());
    tracing::info!(
        "Using {} and {} balance backends",
        primary.backend_name(),
        secondary.backend_name()
    );

    let manager = BalanceManager::new();
    manager.set_balance(primary.as_ref(), "1", 10).await?;
    manager.set_balance(secondary.as_ref(), "2", 20).await?;

    let balance = manager.get_balance(primary.as_ref(), "1").await?;

    Ok(BalanceDemoOutcome {
        primary_backend: primary.backend_name().to_string(),
        secondary_backend: secondary.backend_name().to_string(),
        balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[tokio::test]
    async fn test_default_demo_reads_ten() {
        let outcome = run_balance_demo(&CliConfig::default()).await.unwrap();
        assert_eq!(outcome.balance, Some(10));
        assert_eq!(outcome.primary_backend, "document");
        assert_eq!(outcome.secondary_backend, "table");
    }

    #[tokio::test]
    async fn test_unknown_backend_fails() {
        let config = CliConfig {
            secondary_backend: "mysql".to_string(),
            ..CliConfig::default()
        };
        assert!(run_balance_demo(&config).await.is_err());
    }
}

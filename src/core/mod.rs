pub mod balance_manager;
pub mod catalog;

pub use crate::domain::model::Product;
pub use crate::domain::ports::{BalanceService, ConfigProvider, Search};
pub use crate::utils::error::Result;

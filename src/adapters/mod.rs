// Adapters layer: concrete implementations of the domain ports.

pub mod catalog_csv;
pub mod document_store;
pub mod file_store;
pub mod table_store;

pub use catalog_csv::load_products;
pub use document_store::DocumentBalanceService;
pub use file_store::FileBalanceService;
pub use table_store::TableBalanceService;

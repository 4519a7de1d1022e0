use crate::domain::model::{Product, ProductCategory};
use crate::utils::error::Result;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One row of a catalog CSV file:
/// `product_id,name,description,price,category,available_count,seller`.
#[derive(Debug, Deserialize)]
struct ProductRow {
    product_id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: u64,
    category: String,
    available_count: u32,
    seller: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: row.product_id,
            name: row.name,
            description: row.description,
            price: row.price,
            category: ProductCategory::new(row.category, ""),
            available_item_count: row.available_count,
            seller: row.seller,
        }
    }
}

pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let file = std::fs::File::open(&path)?;
    tracing::debug!("Loading catalog from {}", path.as_ref().display());
    read_products(file)
}

/// Reads products from CSV. Rows that fail to parse are skipped with a warning.
pub fn read_products<R: Read>(reader: R) -> Result<Vec<Product>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut products = Vec::new();
    for (index, row) in csv_reader.deserialize::<ProductRow>().enumerate() {
        match row {
            Ok(row) => products.push(Product::from(row)),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => {
                tracing::warn!("Skipping catalog row {}: {}", index + 1, e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!("Loaded {} product(s)", products.len());
    Ok(products)
}

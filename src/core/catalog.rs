use crate::domain::model::Product;
use crate::domain::ports::Search;
use std::collections::HashMap;

/// Two independent lookup tables: product name -> products and category
/// name -> products.
///
/// The tables are not kept in sync with each other. `from_products` and
/// `add_product` fill both; `index_by_name` / `index_by_category` touch one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    product_names: HashMap<String, Vec<Product>>,
    product_categories: HashMap<String, Vec<Product>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.add_product(product);
        }
        catalog
    }

    /// Indexes the product under its name and its category name.
    pub fn add_product(&mut self, product: Product) {
        self.product_categories
            .entry(product.category.name.clone())
            .or_default()
            .push(product.clone());
        self.product_names
            .entry(product.name.clone())
            .or_default()
            .push(product);
    }

    /// Replaces the sequence mapped to `name`.
    pub fn index_by_name(&mut self, name: impl Into<String>, products: Vec<Product>) {
        let name = name.into();
        tracing::debug!("Indexed {} product(s) under name '{}'", products.len(), name);
        self.product_names.insert(name, products);
    }

    /// Replaces the sequence mapped to `category`.
    pub fn index_by_category(&mut self, category: impl Into<String>, products: Vec<Product>) {
        let category = category.into();
        tracing::debug!(
            "Indexed {} product(s) under category '{}'",
            products.len(),
            category
        );
        self.product_categories.insert(category, products);
    }

    pub fn name_count(&self) -> usize {
        self.product_names.len()
    }

    pub fn category_count(&self) -> usize {
        self.product_categories.len()
    }
}

impl Search for Catalog {
    fn search_products_by_name(&self, name: &str) -> &[Product] {
        self.product_names.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    fn search_products_by_category(&self, category: &str) -> &[Product] {
        self.product_categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

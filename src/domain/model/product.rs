use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub name: String,
    pub description: String,
}

impl ProductCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReview {
    pub rating: u8,
    pub review: String,
    /// User name of the reviewing member.
    pub reviewer: String,
}

impl ProductReview {
    pub fn new(rating: u8, review: impl Into<String>, reviewer: impl Into<String>) -> Result<Self> {
        if !(1..=5).contains(&rating) {
            return Err(ShopError::InvalidRating { rating });
        }
        Ok(Self {
            rating,
            review: review.into(),
            reviewer: reviewer.into(),
        })
    }
}

/// A sellable product. Prices are in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: ProductCategory,
    pub available_item_count: u32,
    /// User name of the owning seller account.
    pub seller: String,
}

impl Product {
    pub fn available_count(&self) -> u32 {
        self.available_item_count
    }

    pub fn update_price(&mut self, new_price: u64) -> Result<()> {
        if new_price == 0 {
            return Err(ShopError::InvalidPrice { price: new_price });
        }
        tracing::debug!(
            "Price of {} changed from {} to {}",
            self.product_id,
            self.price,
            new_price
        );
        self.price = new_price;
        Ok(())
    }

    /// Takes `quantity` units out of the available stock.
    pub fn reserve(&mut self, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(ShopError::InvalidQuantity { quantity });
        }
        if quantity > self.available_item_count {
            return Err(ShopError::InsufficientStock {
                product_id: self.product_id.clone(),
                available: self.available_item_count,
                requested: quantity,
            });
        }
        self.available_item_count -= quantity;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_product(id: &str, name: &str, category: &str) -> Product {
    Product {
        product_id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        price: 1_000,
        category: ProductCategory::new(category, ""),
        available_item_count: 5,
        seller: "seller".to_string(),
    }
}

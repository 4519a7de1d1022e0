use super::order::Order;
use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};

/// A cart line: product reference, quantity and the unit price at the time it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub product_id: String,
    pub quantity: u32,
    pub price: u64,
}

impl Item {
    pub fn new(product_id: impl Into<String>, quantity: u32, price: u64) -> Result<Self> {
        if quantity == 0 {
            return Err(ShopError::InvalidQuantity { quantity });
        }
        Ok(Self {
            product_id: product_id.into(),
            quantity,
            price,
        })
    }

    pub fn update_quantity(&mut self, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(ShopError::InvalidQuantity { quantity });
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Saturates at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Sum of line totals, saturating at `u64::MAX`.
pub(crate) fn sum_line_totals(items: &[Item]) -> u64 {
    items
        .iter()
        .fold(0u64, |acc, item| acc.saturating_add(item.line_total()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCart {
    items: Vec<Item>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line. A second add of the same product merges into the existing
    /// line and keeps its original price snapshot.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        if item.quantity == 0 {
            return Err(ShopError::InvalidQuantity { quantity: 0 });
        }
        match self.items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or(ShopError::InvalidQuantity {
                        quantity: item.quantity,
                    })?;
            }
            None => self.items.push(item),
        }
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &str) -> Result<Item> {
        let position = self
            .items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or_else(|| ShopError::ItemNotInCart {
                product_id: product_id.to_string(),
            })?;
        Ok(self.items.remove(position))
    }

    pub fn update_item_quantity(&mut self, product_id: &str, quantity: u32) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or_else(|| ShopError::ItemNotInCart {
                product_id: product_id.to_string(),
            })?;
        item.update_quantity(quantity)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn subtotal(&self) -> u64 {
        sum_line_totals(&self.items)
    }

    /// Turns the cart contents into a new order and empties the cart.
    pub fn checkout(&mut self, order_number: impl Into<String>) -> Result<Order> {
        if self.items.is_empty() {
            return Err(ShopError::CartEmpty);
        }
        let items = std::mem::take(&mut self.items);
        let order = Order::new(order_number, items);
        tracing::info!(
            "Checked out order {} with {} line(s)",
            order.order_number,
            order.items.len()
        );
        Ok(order)
    }
}

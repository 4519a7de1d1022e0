use super::account::Account;
use super::cart::{Item, ShoppingCart};
use super::notification::Notification;
use super::order::Order;
use super::status::OrderStatus;
use crate::utils::error::{Result, ShopError};

/// Someone shopping. Both variants carry a cart; only members can order.
#[derive(Debug, Clone, PartialEq)]
pub enum Customer {
    Guest {
        cart: ShoppingCart,
    },
    Member {
        account: Account,
        cart: ShoppingCart,
        orders: Vec<Order>,
        notifications: Vec<Notification>,
    },
}

impl Customer {
    pub fn guest() -> Self {
        Self::Guest {
            cart: ShoppingCart::new(),
        }
    }

    pub fn member(account: Account) -> Self {
        Self::Member {
            account,
            cart: ShoppingCart::new(),
            orders: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn shopping_cart(&self) -> &ShoppingCart {
        match self {
            Self::Guest { cart } | Self::Member { cart, .. } => cart,
        }
    }

    fn shopping_cart_mut(&mut self) -> &mut ShoppingCart {
        match self {
            Self::Guest { cart } | Self::Member { cart, .. } => cart,
        }
    }

    pub fn add_item_to_cart(&mut self, item: Item) -> Result<()> {
        self.shopping_cart_mut().add_item(item)
    }

    pub fn remove_item_from_cart(&mut self, product_id: &str) -> Result<Item> {
        self.shopping_cart_mut().remove_item(product_id)
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            Self::Guest { .. } => None,
            Self::Member { account, .. } => Some(account),
        }
    }

    pub fn orders(&self) -> &[Order] {
        match self {
            Self::Guest { .. } => &[],
            Self::Member { orders, .. } => orders.as_slice(),
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        match self {
            Self::Guest { .. } => &[],
            Self::Member { notifications, .. } => notifications.as_slice(),
        }
    }

    /// Turns a guest into a member, keeping the cart. Members are returned unchanged.
    pub fn register_account(self, account: Account) -> Self {
        match self {
            Self::Guest { cart } => {
                tracing::info!("Guest registered as {}", account.user_name);
                Self::Member {
                    account,
                    cart,
                    orders: Vec::new(),
                    notifications: Vec::new(),
                }
            }
            member @ Self::Member { .. } => member,
        }
    }

    /// Checks out the cart into a pending order kept on the member.
    pub fn place_order(&mut self, order_number: impl Into<String>) -> Result<OrderStatus> {
        match self {
            Self::Guest { .. } => Err(ShopError::GuestCannotOrder),
            Self::Member {
                account,
                cart,
                orders,
                notifications,
            } => {
                let mut order = cart.checkout(order_number)?;
                order.set_status(OrderStatus::Pending);
                let status = order.status;

                notifications.push(Notification::new(
                    notifications.len() as u64 + 1,
                    account.user_name.clone(),
                    format!("Order {} is {}", order.order_number, status),
                ));
                orders.push(order);
                Ok(status)
            }
        }
    }
}

use super::product::{Product, ProductReview};
use super::status::AccountStatus;
use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub name_on_card: String,
    /// Only the last four digits are kept.
    pub last_four: String,
    pub billing_address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicBankTransfer {
    pub bank_name: String,
    pub routing_number: String,
    pub account_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard(CreditCard),
    BankTransfer(ElectronicBankTransfer),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub user_name: String,
    pub status: AccountStatus,
    pub name: String,
    pub shipping_address: Address,
    pub email: String,
    pub phone: String,
    pub payment_methods: Vec<PaymentMethod>,
    /// Products this account sells.
    pub products: Vec<Product>,
    /// Reviews this account has written.
    pub reviews: Vec<ProductReview>,
}

impl Account {
    pub fn new(user_name: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            status: AccountStatus::Active,
            name: name.into(),
            shipping_address: Address::default(),
            email: email.into(),
            phone: String::new(),
            payment_methods: Vec::new(),
            products: Vec::new(),
            reviews: Vec::new(),
        }
    }

    pub fn set_status(&mut self, status: AccountStatus) {
        tracing::debug!("Account {} status {:?} -> {:?}", self.user_name, self.status, status);
        self.status = status;
    }

    pub fn add_payment_method(&mut self, method: PaymentMethod) {
        self.payment_methods.push(method);
    }

    fn ensure_active(&self) -> Result<()> {
        if self.status.is_active() {
            return Ok(());
        }
        Err(ShopError::AccountInactive {
            user_name: self.user_name.clone(),
            status: self.status,
        })
    }

    /// Lists a product for sale; the product's seller is set to this account.
    pub fn add_product(&mut self, mut product: Product) -> Result<()> {
        self.ensure_active()?;
        if product.price == 0 {
            return Err(ShopError::InvalidPrice { price: product.price });
        }
        product.seller = self.user_name.clone();
        tracing::debug!("{} listed product {}", self.user_name, product.product_id);
        self.products.push(product);
        Ok(())
    }

    /// Records a review written by this account.
    pub fn add_product_review(&mut self, mut review: ProductReview) -> Result<()> {
        self.ensure_active()?;
        if !(1..=5).contains(&review.rating) {
            return Err(ShopError::InvalidRating { rating: review.rating });
        }
        review.reviewer = self.user_name.clone();
        self.reviews.push(review);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::product::sample_product;

    #[test]
    fn test_add_product_stamps_seller() {
        let mut account = Account::new("bob", "Bob", "bob@example.com");
        account.add_product(sample_product("p-1", "Lamp", "Home")).unwrap();

        assert_eq!(account.products.len(), 1);
        assert_eq!(account.products[0].seller, "bob");
    }

    #[test]
    fn test_add_product_rejects_free_items() {
        let mut account = Account::new("bob", "Bob", "bob@example.com");
        let mut product = sample_product("p-1", "Lamp", "Home");
        product.price = 0;
        assert!(account.add_product(product).is_err());
        assert!(account.products.is_empty());
    }

    #[test]
    fn test_inactive_account_cannot_list_or_review() {
        for status in [
            AccountStatus::Blocked,
            AccountStatus::Banned,
            AccountStatus::Compromised,
            AccountStatus::Archived,
            AccountStatus::Unknown,
        ] {
            let mut account = Account::new("bob", "Bob", "bob@example.com");
            account.set_status(status);

            assert!(matches!(
                account.add_product(sample_product("p-1", "Lamp", "Home")),
                Err(ShopError::AccountInactive { .. })
            ));
            assert!(matches!(
                account.add_product_review(ProductReview::new(3, "ok", "bob").unwrap()),
                Err(ShopError::AccountInactive { .. })
            ));
            assert!(account.products.is_empty());
            assert!(account.reviews.is_empty());
        }
    }

    #[test]
    fn test_reactivated_account_can_list_again() {
        let mut account = Account::new("bob", "Bob", "bob@example.com");
        account.set_status(AccountStatus::Blocked);
        account.set_status(AccountStatus::Active);
        assert!(account.add_product(sample_product("p-1", "Lamp", "Home")).is_ok());
    }

    #[test]
    fn test_add_product_review() {
        let mut account = Account::new("carol", "Carol", "carol@example.com");
        let review = ProductReview::new(4, "solid", "someone-else").unwrap();
        account.add_product_review(review).unwrap();
        assert_eq!(account.reviews[0].reviewer, "carol");
    }

    #[test]
    fn test_payment_method_serialization() {
        let method = PaymentMethod::BankTransfer(ElectronicBankTransfer {
            bank_name: "First".to_string(),
            routing_number: "0001".to_string(),
            account_number: "1234".to_string(),
        });
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["type"], "bank_transfer");
        assert_eq!(json["bank_name"], "First");
    }
}

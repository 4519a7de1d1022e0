pub mod account;
pub mod cart;
pub mod customer;
pub mod notification;
pub mod order;
pub mod product;
pub mod shipment;
pub mod status;

pub use account::{Account, Address, CreditCard, ElectronicBankTransfer, PaymentMethod};
pub use cart::{Item, ShoppingCart};
pub use customer::Customer;
pub use notification::Notification;
pub use order::{Order, OrderLog, Payment};
pub use product::{Product, ProductCategory, ProductReview};
pub use shipment::{Shipment, ShipmentLog};
pub use status::{AccountStatus, OrderStatus, PaymentStatus, ShipmentStatus};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: u32 },

    #[error("Invalid price: {price}")]
    InvalidPrice { price: u64 },

    #[error("Invalid rating {rating}, expected 1-5")]
    InvalidRating { rating: u8 },

    #[error("Item not in cart: {product_id}")]
    ItemNotInCart { product_id: String },

    #[error("Cart is empty")]
    CartEmpty,

    #[error("Insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        available: u32,
        requested: u32,
    },

    #[error("Guests cannot place orders")]
    GuestCannotOrder,

    #[error("Account {user_name} is not active ({status:?})")]
    AccountInactive {
        user_name: String,
        status: crate::domain::model::AccountStatus,
    },
}

impl ShopError {
    /// Process exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;

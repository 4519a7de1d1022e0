//! Closed status enumerations.
//!
//! None of these carry transition rules: any status may follow any other.
//! Callers that need guards enforce them before calling `set_status`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Unshipped,
    Pending,
    Shipped,
    Completed,
    Canceled,
    RefundApplied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Blocked,
    Banned,
    Compromised,
    Archived,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    OnHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Completed,
    Filled,
    Declined,
    Cancelled,
    Abandoned,
    Settling,
    Settled,
    Refunded,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unshipped => "UNSHIPPED",
            Self::Pending => "PENDING",
            Self::Shipped => "SHIPPED",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
            Self::RefundApplied => "REFUND_APPLIED",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "PENDING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::OnHold => "ON_HOLD",
        };
        f.write_str(label)
    }
}

impl AccountStatus {
    /// Whether the account may list products and write reviews.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(OrderStatus::default(), OrderStatus::Unshipped);
        assert_eq!(ShipmentStatus::default(), ShipmentStatus::Pending);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Unpaid);
        assert!(AccountStatus::default().is_active());
    }

    #[test]
    fn test_serialized_names_match_display() {
        let json = serde_json::to_string(&OrderStatus::RefundApplied).unwrap();
        assert_eq!(json, format!("\"{}\"", OrderStatus::RefundApplied));

        let json = serde_json::to_string(&ShipmentStatus::OnHold).unwrap();
        assert_eq!(json, "\"ON_HOLD\"");
    }
}

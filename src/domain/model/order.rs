use super::account::PaymentMethod;
use super::cart::{sum_line_totals, Item};
use super::shipment::Shipment;
use super::status::{OrderStatus, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLog {
    pub order_number: String,
    pub creation_date: DateTime<Utc>,
    pub status: OrderStatus,
}

impl OrderLog {
    pub fn new(order_number: impl Into<String>, status: OrderStatus) -> Self {
        Self {
            order_number: order_number.into(),
            creation_date: Utc::now(),
            status,
        }
    }
}

/// A payment attached to an order. Recorded as given; nothing is charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: u64,
    pub status: PaymentStatus,
    pub method: Option<PaymentMethod>,
    pub created_on: DateTime<Utc>,
}

impl Payment {
    pub fn new(amount: u64, status: PaymentStatus, method: Option<PaymentMethod>) -> Self {
        Self {
            amount,
            status,
            method,
            created_on: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_number: String,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub items: Vec<Item>,
    pub payments: Vec<Payment>,
    order_log: Vec<OrderLog>,
}

impl Order {
    pub fn new(order_number: impl Into<String>, items: Vec<Item>) -> Self {
        let order_number = order_number.into();
        let status = OrderStatus::default();
        Self {
            order_log: vec![OrderLog::new(order_number.clone(), status)],
            order_number,
            status,
            order_date: Utc::now(),
            items,
            payments: Vec::new(),
        }
    }

    /// Timestamp-based order number, e.g. `ORD-1718000000000000000`.
    pub fn generate_number() -> String {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        format!("ORD-{}", nanos)
    }

    pub fn add_order_log(&mut self, log: OrderLog) {
        self.order_log.push(log);
    }

    pub fn order_log(&self) -> &[OrderLog] {
        &self.order_log
    }

    /// Moves to `status` and appends a matching log entry.
    pub fn set_status(&mut self, status: OrderStatus) {
        tracing::debug!("Order {} status {} -> {}", self.order_number, self.status, status);
        self.status = status;
        self.add_order_log(OrderLog::new(self.order_number.clone(), status));
    }

    pub fn total(&self) -> u64 {
        sum_line_totals(&self.items)
    }

    pub fn amount_paid(&self) -> u64 {
        self.payments
            .iter()
            .filter(|p| matches!(p.status, PaymentStatus::Completed | PaymentStatus::Settled))
            .fold(0u64, |acc, p| acc.saturating_add(p.amount))
    }

    pub fn make_payment(&mut self, payment: Payment) {
        tracing::debug!(
            "Order {} recorded payment of {} ({:?})",
            self.order_number,
            payment.amount,
            payment.status
        );
        self.payments.push(payment);
    }

    /// Creates the shipment record for this order and marks it shipped.
    pub fn send_for_shipment(
        &mut self,
        shipment_number: impl Into<String>,
        shipment_method: impl Into<String>,
    ) -> Shipment {
        let shipment = Shipment::new(shipment_number, shipment_method);
        self.set_status(OrderStatus::Shipped);
        tracing::info!(
            "Order {} sent for shipment {}",
            self.order_number,
            shipment.shipment_number
        );
        shipment
    }
}

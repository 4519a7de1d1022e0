use super::status::ShipmentStatus;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_TRANSIT_DAYS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLog {
    pub shipment_number: String,
    pub status: ShipmentStatus,
    pub creation_date: DateTime<Utc>,
}

impl ShipmentLog {
    pub fn new(shipment_number: impl Into<String>, status: ShipmentStatus) -> Self {
        Self {
            shipment_number: shipment_number.into(),
            status,
            creation_date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_number: String,
    pub shipment_date: DateTime<Utc>,
    pub estimated_arrival: DateTime<Utc>,
    pub shipment_method: String,
    pub status: ShipmentStatus,
    shipment_log: Vec<ShipmentLog>,
}

impl Shipment {
    pub fn new(shipment_number: impl Into<String>, shipment_method: impl Into<String>) -> Self {
        let shipment_number = shipment_number.into();
        let shipment_date = Utc::now();
        let status = ShipmentStatus::default();
        Self {
            shipment_log: vec![ShipmentLog::new(shipment_number.clone(), status)],
            shipment_number,
            shipment_date,
            estimated_arrival: shipment_date + Duration::days(DEFAULT_TRANSIT_DAYS),
            shipment_method: shipment_method.into(),
            status,
        }
    }

    pub fn with_estimated_arrival(mut self, estimated_arrival: DateTime<Utc>) -> Self {
        self.estimated_arrival = estimated_arrival;
        self
    }

    pub fn add_shipment_log(&mut self, log: ShipmentLog) {
        self.shipment_log.push(log);
    }

    pub fn shipment_log(&self) -> &[ShipmentLog] {
        &self.shipment_log
    }

    pub fn set_status(&mut self, status: ShipmentStatus) {
        tracing::debug!(
            "Shipment {} status {} -> {}",
            self.shipment_number,
            self.status,
            status
        );
        self.status = status;
        self.add_shipment_log(ShipmentLog::new(self.shipment_number.clone(), status));
    }
}

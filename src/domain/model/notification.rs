use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification addressed to an account. Only the record is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: u64,
    pub created_on: DateTime<Utc>,
    pub content: String,
    /// User name of the recipient account.
    pub recipient: String,
}

impl Notification {
    pub fn new(notification_id: u64, recipient: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            notification_id,
            created_on: Utc::now(),
            content: content.into(),
            recipient: recipient.into(),
        }
    }
}

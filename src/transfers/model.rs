use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The vehicle class of a transfer.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransferClass {
    Standard,
    Executive,
    Van,
}

/// A request to book a ground transfer.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransferBookingRequest {
    /// Free-text or location-id pickup point.
    pub pickup: String,
    /// Free-text or location-id drop-off point.
    pub dropoff: String,
    pub pickup_at: DateTime<Utc>,
    pub passengers: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<TransferClass>,
}

//! Wire shapes shared by every booking-capable resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in a given currency.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub amount: f64,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// The lifecycle state of a booking, as reported by the upstream API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A confirmed or pending booking returned by the upstream API.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// The booking's unique identifier.
    pub id: String,
    /// The human-facing booking reference.
    pub reference: String,
    pub status: BookingStatus,
    pub total: Price,
}

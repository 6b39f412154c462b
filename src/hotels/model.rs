use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_default;
use crate::types::Price;

/// Parameters for a hotel search.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HotelSearchRequest {
    /// Location id or free-text place name.
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u8>,
}

/// A bookable hotel stay.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    /// The offer's unique identifier, used for booking.
    pub id: String,
    pub name: String,
    pub address: String,
    /// Star rating, 1 to 5.
    pub stars: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub amenities: Vec<String>,
    /// Price for the whole stay.
    pub price: Price,
}

/// A request to book a hotel offer.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HotelBookingRequest {
    pub offer_id: String,
    /// Name of the lead guest the reservation is held under.
    pub lead_guest: String,
    pub email: String,
}

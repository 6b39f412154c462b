use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_default;
use crate::types::Price;

/// The cabin class to search offers for.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Cabin {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

/// Parameters for a flight offer search.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct FlightSearchRequest {
    /// IATA code of the origin airport or city.
    pub origin: String,
    /// IATA code of the destination airport or city.
    pub destination: String,
    pub departure_date: NaiveDate,
    /// Omit for a one-way search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    pub adults: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin: Option<Cabin>,
}

/// One leg of a flight offer.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegment {
    /// IATA code of the operating airline.
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departs_at: DateTime<Utc>,
    pub arrives_at: DateTime<Utc>,
}

/// A bookable flight offer.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    /// The offer's unique identifier, used for pricing and booking.
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub segments: Vec<FlightSegment>,
    pub price: Price,
    pub cabin: Cabin,
}

/// A request to (re-)price an offer before booking.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FlightPriceRequest {
    pub offer_id: String,
}

/// The confirmed price of an offer.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FlightPrice {
    pub offer_id: String,
    pub total: Price,
    /// When the quoted price stops being bookable.
    pub expires_at: DateTime<Utc>,
}

/// A passenger on a flight booking.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
}

/// A request to book a priced offer.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FlightBookingRequest {
    pub offer_id: String,
    pub passengers: Vec<Passenger>,
}

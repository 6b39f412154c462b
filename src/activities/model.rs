use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_default;
use crate::types::Price;

/// Parameters for an experience search.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct ActivitySearchRequest {
    /// Location id or free-text place name.
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Free-text category filter, e.g. "food" or "outdoors".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A bookable experience at a destination.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// The experience's unique identifier.
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub categories: Vec<String>,
    pub duration_minutes: Option<u32>,
    /// Average review rating, 0.0 to 5.0.
    pub rating: Option<f32>,
    /// Price per person.
    pub price: Price,
}

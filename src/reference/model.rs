use serde::{Deserialize, Serialize};

/// A searchable place: an airport, a city or a point of interest.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The location's unique identifier.
    pub id: String,
    pub name: String,
    /// Set for airports and metropolitan areas.
    pub iata_code: Option<String>,
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// An airline reference record.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    /// Two-letter IATA code.
    pub iata_code: String,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Serialize, Debug)]
pub(crate) struct LocationQuery<'a> {
    pub query: &'a str,
}

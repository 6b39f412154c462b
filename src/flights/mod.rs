//! Search, price and book flights.
//!
//! You're probably looking for the [`Client`].
//!
//! # Examples
//! ```no_run
//! use voyago_rs::{flights::FlightSearchRequest, Client, Error};
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::new()?;
//!
//!     let offers = client.flights.search(FlightSearchRequest {
//!         origin: "AMS".to_string(),
//!         destination: "LIS".to_string(),
//!         departure_date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
//!         return_date: None,
//!         adults: 1,
//!         cabin: None,
//!     }).await?;
//!
//!     if let Some(offer) = offers.first() {
//!         let priced = client.flights.price(&offer.id).await?;
//!         println!("{} for {}", offer.id, priced.total);
//!     }
//!
//!     Ok(())
//! }
//! ```
mod client;
mod model;

pub use client::Client;
pub use model::*;

//! The Rust SDK for the Voyago travel platform.
//!
//! Two independent pieces live here: the [`Client`] for the upstream booking
//! API, and the locally persisted [`SessionStore`] / [`ProfileStore`] pair
//! that hold the signed-in identity and the traveller's preference profile.
//! The stores are constructed explicitly with a storage backend instead of
//! living in ambient global state.
//!
//! # Examples
//! ```
//! use voyago_rs::{
//!     profile::{Preferences, LeisurePreferences, BudgetRange, ProfileStore, TravelProfile},
//!     session::SessionStore,
//!     storage::MemoryStorage,
//!     Error,
//! };
//!
//! fn main() -> Result<(), Error> {
//!     let mut session = SessionStore::new(MemoryStorage::new())?;
//!     let identity = session.login("leisure@voyago.travel", "leisure123")?;
//!
//!     let mut profiles = ProfileStore::new(MemoryStorage::new())?;
//!     profiles.set(TravelProfile::new(Preferences::Leisure(LeisurePreferences {
//!         interests: vec!["food".to_string()],
//!         styles: vec!["slow travel".to_string()],
//!         budget: BudgetRange { min: 500, max: 2500, currency: "EUR".to_string() },
//!     })))?;
//!
//!     assert_eq!(identity.travel_type, profiles.current().map(|p| p.travel_type()));
//!
//!     session.logout()?;
//!     Ok(())
//! }
//! ```
pub mod client;
pub mod error;
mod http;
mod serde;

pub mod activities;
pub mod flights;
pub mod hotels;
pub mod profile;
pub mod reference;
pub mod session;
pub mod storage;
pub mod transfers;
pub mod types;

pub use client::Client;
pub use error::Error;
pub use profile::ProfileStore;
pub use session::SessionStore;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

#[cfg(all(feature = "default-tls", feature = "native-tls"))]
compile_error!("Feature \"default-tls\" and \"native-tls\" cannot be enabled at the same time");

#[cfg(all(feature = "native-tls", feature = "rustls-tls"))]
compile_error!("Feature \"native-tls\" and \"rustls-tls\" cannot be enabled at the same time");

#[cfg(all(feature = "rustls-tls", feature = "default-tls"))]
compile_error!("Feature \"rustls-tls\" and \"default-tls\" cannot be enabled at the same time");

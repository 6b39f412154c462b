//! The profile store: at most one travel-preference record, persisted to a
//! durable local slot.
//!
//! The preference shape is a sum type keyed by [`TravelType`], so a profile
//! can only ever carry the sub-shape that matches its tag.
//!
//! # Examples
//! ```
//! use voyago_rs::{
//!     profile::{BusinessPreferences, Preferences, ProfileStore, TravelProfile},
//!     storage::MemoryStorage,
//!     Error,
//! };
//!
//! fn main() -> Result<(), Error> {
//!     let mut profiles = ProfileStore::new(MemoryStorage::new())?;
//!
//!     profiles.set(TravelProfile::new(Preferences::Business(
//!         BusinessPreferences {
//!             expense_policy: true,
//!             priority_boarding: false,
//!             lounge_access: true,
//!         },
//!     )))?;
//!     assert!(profiles.current().is_some());
//!
//!     profiles.clear()?;
//!     assert!(profiles.current().is_none());
//!
//!     Ok(())
//! }
//! ```
//!
//! [`TravelType`]: crate::session::TravelType
mod model;
mod store;

pub use model::*;
pub use store::ProfileStore;

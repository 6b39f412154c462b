//! The credential store: at most one authenticated identity, persisted to a
//! durable local slot.
//!
//! # Examples
//! ```
//! use voyago_rs::{session::SessionStore, storage::MemoryStorage, Error};
//!
//! fn main() -> Result<(), Error> {
//!     let mut session = SessionStore::new(MemoryStorage::new())?;
//!
//!     let identity = session.login("leisure@voyago.travel", "leisure123")?;
//!     assert_eq!(identity.name, "Liam Park");
//!     assert!(session.is_authenticated());
//!
//!     session.logout()?;
//!     assert!(!session.is_authenticated());
//!
//!     Ok(())
//! }
//! ```
mod model;
mod store;

pub use model::*;
pub use store::SessionStore;

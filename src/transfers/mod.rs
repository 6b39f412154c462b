//! Book ground transfers between airports, hotels and venues.
//!
//! You're probably looking for the [`Client`].
mod client;
mod model;

pub use client::Client;
pub use model::*;

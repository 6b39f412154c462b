//! Search bookable experiences at a destination.
//!
//! You're probably looking for the [`Client`].
mod client;
mod model;

pub use client::Client;
pub use model::*;

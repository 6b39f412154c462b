//! Look up locations and airlines by name or code.
//!
//! You're probably looking for the [`Client`].
mod client;
mod model;

pub use client::Client;
pub use model::*;

//! REST access to the hosted Mezmur Hub backend.
//!
//! Only the read-side request shapes the player UI needs live here; content
//! administration happens elsewhere and never touches this client.

pub mod client;
pub mod models;

pub use client::*;
pub use models::*;

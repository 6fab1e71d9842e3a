//! Shared types for the front-desk system
//!
//! Domain models and wire DTOs used by every consumer of the hotel
//! backend API. Field names on the wire follow the backend's Spanish
//! contract; Rust-side names are English with serde renames carrying
//! the mapping.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

//! Data models
//!
//! Shared between the front-desk client and any future server-side
//! consumer. All IDs are `i64` (backend INTEGER PRIMARY KEY).

pub mod payment;
pub mod room;
pub mod stay;

// Re-exports
pub use payment::*;
pub use room::*;
pub use stay::*;

//! Front-Desk Client - HTTP client and check-in workflow for the hotel backend
//!
//! Provides the REST client for the room/stay API and the session
//! controller that drives one room from `available` to a paid
//! `occupied` stay (or from `occupied` to `cleaning`).

pub mod config;
pub mod directory;
pub mod error;
pub mod http;
pub mod money;
pub mod session;

pub use config::ClientConfig;
pub use directory::{DirectoryStats, RoomDirectory};
pub use error::{ClientError, ClientResult};
pub use http::{Api, HttpApi};
pub use session::{
    CheckoutSummary, FrontDesk, GuestDraft, PaymentDraft, RateOption, RatePlan, Session,
    SessionError, SessionResult, Stage, SubmitProgress, ValidationError,
};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
pub use shared::models::{PaymentMethod, Room, RoomStatus, RoomType, Stay, StayCreate, StayStatus};

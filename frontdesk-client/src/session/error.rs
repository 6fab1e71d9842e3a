//! Session error taxonomy
//!
//! Four classes, matching how the operator must react:
//! - validation: local, synchronous, user-correctable, never networked
//! - auth expiry: force-logout, session discarded
//! - transport: retryable in place, session unchanged
//! - partial failure: one of the two mutating calls landed; the retry
//!   path re-attempts only the missing half

use crate::ClientError;
use serde::{Deserialize, Serialize};
use shared::models::RoomStatus;
use thiserror::Error;

/// Local validation failure; blocks progression, never reaches the network
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("invalid phone: {0}")]
    InvalidPhone(String),

    #[error("no rate selected")]
    NoRateSelected,

    #[error("insufficient funds: tendered {tendered:.2} < total {total:.2}")]
    InsufficientFunds { total: f64, tendered: f64 },
}

/// Which half of a two-call submission already completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingHalf {
    /// Stay created, room status update still owed
    StatusUpdate {
        room_id: i64,
        target: RoomStatus,
    },
}

/// Stay mutation landed but the follow-up status change did not.
///
/// Must surface distinctly: not a success (the room map is stale) and
/// not a total failure (the payment/checkout is recorded server-side).
#[derive(Debug, Error)]
#[error("recorded (stay {stay_id}) but room status not updated: {source}")]
pub struct PartialFailure {
    pub stay_id: i64,
    pub pending: PendingHalf,
    #[source]
    pub source: ClientError,
}

/// Error surfaced by front-desk workflow operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// Local validation failure; session state unchanged
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No session is open, or the operation does not apply to the
    /// current stage
    #[error("no active session for this operation")]
    NoActiveSession,

    /// Room not present in the current directory snapshot
    #[error("unknown room: {0}")]
    UnknownRoom(i64),

    /// Room status does not admit this workflow (e.g. check-in on a
    /// room under maintenance)
    #[error("room {room_id} is {status:?}; operation not available")]
    RoomNotOperable { room_id: i64, status: RoomStatus },

    /// Bearer token rejected (HTTP 401); session discarded, force logout
    #[error("session expired; please log in again")]
    AuthExpired,

    /// Transient transport/server failure; session remains open at its
    /// stage and the same confirm action may be retried
    #[error("request failed: {0}")]
    Transport(ClientError),

    /// The backend deliberately rejected the mutation (e.g. the room
    /// was taken by a concurrent session); session discarded and the
    /// directory refreshed
    #[error("request rejected: {0}")]
    Rejected(ClientError),

    /// First call landed, second call failed; retry re-attempts only
    /// the missing half
    #[error(transparent)]
    Partial(#[from] PartialFailure),

    /// A response arrived for a session that was cancelled or replaced
    /// meanwhile; the result was discarded
    #[error("session superseded; stale response discarded")]
    Stale,
}

impl SessionError {
    /// Classify an API error at a submit boundary.
    pub(crate) fn from_api(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized => SessionError::AuthExpired,
            e if e.is_transient() => SessionError::Transport(e),
            e => SessionError::Rejected(e),
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

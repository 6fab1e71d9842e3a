//! Session state
//!
//! The session is an explicit value owned by the controller. Only one
//! may be open at a time; its token identifies it across await points
//! so responses for a cancelled or replaced session can be discarded.

use super::draft::{GuestDraft, PaymentDraft};
use super::rates::RateOption;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{Room, Stay};
use uuid::Uuid;

/// Workflow stage
///
/// ```text
/// RateSelection -> GuestEntry -> PaymentEntry -> (closed)
/// CheckoutReview -> (closed)
/// ```
/// `cancel()` closes from any stage. The submitting phase is the span
/// of the in-flight `confirm_*` call; it is not a stored stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Check-in: choosing one of the derived rate options
    RateSelection,
    /// Check-in: capturing guest data
    GuestEntry,
    /// Check-in: payment method and tendered amount
    PaymentEntry,
    /// Check-out: reviewing the active stay before confirming
    CheckoutReview,
}

/// Sub-step completion of the two-call submission.
///
/// Tracked so a retry after partial failure resumes from the failed
/// half instead of re-running both calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub enum SubmitProgress {
    /// No mutating call has succeeded yet
    #[default]
    Pending,
    /// Check-in: stay record created, status change still owed
    StayCreated(Stay),
    /// Check-out: stay closed, status change still owed
    CheckedOut(Stay),
}

/// Summary shown before confirming a check-out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub stay_id: i64,
    pub guest_name: String,
    pub checkin: DateTime<Utc>,
    /// Nights elapsed since check-in, minimum 1
    pub nights: i64,
    pub nightly_price: f64,
}

impl CheckoutSummary {
    pub fn from_stay(stay: &Stay, now: DateTime<Utc>) -> Self {
        Self {
            stay_id: stay.id,
            guest_name: stay.guest_name.clone(),
            checkin: stay.checkin,
            nights: nights_elapsed(stay.checkin, now),
            nightly_price: stay.nightly_price,
        }
    }
}

/// Nights elapsed: `ceil((now - checkin) / 1 day)`, floored at 1.
///
/// 25h ago is 2 nights; 1h ago is still 1 night. A checkin in the
/// future (clock skew) also counts as 1.
pub fn nights_elapsed(checkin: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = (now - checkin).num_seconds().max(0);
    ((secs + 86_399) / 86_400).max(1)
}

/// One front-desk session: a room plus the drafts accumulated on the
/// way to a single submission. Atomic from the client's point of view:
/// everything submits together or nothing persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Identifies this session across await points; responses carrying
    /// a token that no longer matches the open session are stale
    pub token: Uuid,
    /// Snapshot of the room at selection time
    pub room: Room,
    pub stage: Stage,
    /// Derived rate options (check-in sessions)
    pub rates: Vec<RateOption>,
    /// Chosen rate; last write wins
    pub rate: Option<RateOption>,
    /// Frozen guest data (set by `submit_guest`)
    pub guest: Option<GuestDraft>,
    pub payment: Option<PaymentDraft>,
    /// Check-out sessions only
    pub checkout: Option<CheckoutSummary>,
    pub progress: SubmitProgress,
}

impl Session {
    pub(crate) fn check_in(room: Room, rates: Vec<RateOption>) -> Self {
        Self {
            token: Uuid::new_v4(),
            room,
            stage: Stage::RateSelection,
            rates,
            rate: None,
            guest: None,
            payment: None,
            checkout: None,
            progress: SubmitProgress::Pending,
        }
    }

    pub(crate) fn check_out(room: Room, summary: CheckoutSummary) -> Self {
        Self {
            token: Uuid::new_v4(),
            room,
            stage: Stage::CheckoutReview,
            rates: Vec::new(),
            rate: None,
            guest: None,
            payment: None,
            checkout: Some(summary),
            progress: SubmitProgress::Pending,
        }
    }

    /// Total due for this session (the chosen rate's nightly price)
    pub fn total(&self) -> Option<f64> {
        self.rate.as_ref().map(|r| r.price)
    }

    pub fn is_check_in(&self) -> bool {
        self.stage != Stage::CheckoutReview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_nights_elapsed_ceils() {
        let now = Utc::now();
        assert_eq!(nights_elapsed(now - Duration::hours(25), now), 2);
        assert_eq!(nights_elapsed(now - Duration::hours(1), now), 1);
        assert_eq!(nights_elapsed(now - Duration::hours(24), now), 1);
        assert_eq!(nights_elapsed(now - Duration::minutes(1470), now), 2); // 24.5h
        assert_eq!(nights_elapsed(now - Duration::hours(49), now), 3);
    }

    #[test]
    fn test_nights_elapsed_never_zero() {
        let now = Utc::now();
        assert_eq!(nights_elapsed(now, now), 1);
        // clock skew: checkin "in the future"
        assert_eq!(nights_elapsed(now + Duration::hours(2), now), 1);
    }
}

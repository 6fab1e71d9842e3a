//! Front-desk session workflow
//!
//! One strictly sequential, cancelable workflow at a time: a room goes
//! from `available` to a paid `occupied` stay (check-in), or from
//! `occupied` to `cleaning` (check-out). The session is an explicit,
//! serializable value owned by the controller; drafts are plain data
//! that the presentation layer reads from and writes into.

mod controller;
mod draft;
mod error;
mod rates;
mod state;

pub use controller::FrontDesk;
pub use draft::{GuestDraft, PaymentDraft};
pub use error::{PartialFailure, PendingHalf, SessionError, SessionResult, ValidationError};
pub use rates::{RateOption, RatePlan, rate_options};
pub use state::{CheckoutSummary, Session, Stage, SubmitProgress, nights_elapsed};

//! Front-desk session controller
//!
//! Owns the single active [`Session`] and the [`RoomDirectory`]
//! snapshot, and drives the check-in and check-out workflows against
//! the backend. Mutating calls are strictly sequential: the stay
//! mutation completes before the status change is issued, and sub-step
//! completion is tracked so a retry resumes from the failed half.

use super::draft::{GuestDraft, PaymentDraft};
use super::error::{PartialFailure, PendingHalf, SessionError, SessionResult, ValidationError};
use super::rates::{RateOption, RatePlan, rate_options};
use super::state::{CheckoutSummary, Session, Stage, SubmitProgress};
use crate::directory::RoomDirectory;
use crate::http::Api;
use crate::{ClientError, ClientResult};
use chrono::{Days, Utc};
use shared::models::{PaymentMethod, Room, RoomStatus, Stay, StayCreate};
use uuid::Uuid;

/// Front-desk workflow controller
pub struct FrontDesk<A: Api> {
    api: A,
    directory: RoomDirectory,
    session: Option<Session>,
}

impl<A: Api> FrontDesk<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            directory: RoomDirectory::new(),
            session: None,
        }
    }

    /// Build with a pre-populated directory snapshot
    pub fn with_directory(api: A, directory: RoomDirectory) -> Self {
        Self {
            api,
            directory,
            session: None,
        }
    }

    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Replace the directory snapshot wholesale from the backend
    pub async fn refresh_directory(&mut self) -> SessionResult<()> {
        let result = self.directory.refresh(&self.api).await;
        result.map_err(|err| {
            let mapped = SessionError::from_api(err);
            if matches!(mapped, SessionError::AuthExpired) {
                self.discard_session("token expired");
            }
            mapped
        })
    }

    // ========== Workflow operations ==========

    /// Begin a session for a room out of the current snapshot.
    ///
    /// Available rooms open a check-in session with the three derived
    /// rate options; occupied rooms open a check-out session after
    /// fetching the active stay. Opening while another session is open
    /// cancels the previous one first (explicitly, not silently).
    pub async fn open_for_room(&mut self, room_id: i64) -> SessionResult<&Session> {
        if self.session.is_some() {
            tracing::info!(room_id, "open session replaced by new room selection");
            self.cancel();
        }

        let room = self
            .directory
            .room(room_id)
            .ok_or(SessionError::UnknownRoom(room_id))?
            .clone();

        let session = match room.status {
            RoomStatus::Available => {
                let rates = rate_options(room.nightly_price);
                tracing::info!(room_id, number = %room.number, "check-in session opened");
                Session::check_in(room, rates)
            }
            RoomStatus::Occupied => {
                let stay = self
                    .api
                    .active_stay(room.id)
                    .await
                    .map_err(SessionError::from_api)?;
                let summary = CheckoutSummary::from_stay(&stay, Utc::now());
                tracing::info!(
                    room_id,
                    stay_id = summary.stay_id,
                    nights = summary.nights,
                    "check-out session opened"
                );
                Session::check_out(room, summary)
            }
            status => {
                return Err(SessionError::RoomNotOperable { room_id, status });
            }
        };

        Ok(&*self.session.insert(session))
    }

    /// Choose a rate option; re-selecting replaces the prior choice
    pub fn select_rate(&mut self, plan: RatePlan) -> SessionResult<&RateOption> {
        let session = self.open_check_in()?;
        if !matches!(session.stage, Stage::RateSelection | Stage::GuestEntry) {
            return Err(SessionError::NoActiveSession);
        }

        let option = session
            .rates
            .iter()
            .find(|r| r.plan == plan)
            .cloned()
            .ok_or(ValidationError::NoRateSelected)?;

        tracing::debug!(plan = ?plan, price = option.price, "rate selected");
        session.stage = Stage::GuestEntry;
        Ok(&*session.rate.insert(option))
    }

    /// Validate and freeze the guest draft, then move to payment entry
    /// with a cash draft pre-filled to the rate total.
    pub fn submit_guest(&mut self, draft: GuestDraft) -> SessionResult<()> {
        let session = self.open_check_in()?;
        if session.stage != Stage::GuestEntry {
            return Err(SessionError::NoActiveSession);
        }
        let total = session.total().ok_or(ValidationError::NoRateSelected)?;

        // Validation failures leave the stage untouched
        draft.validate()?;

        session.guest = Some(draft.normalized());
        session.payment = Some(PaymentDraft::cash(total));
        session.stage = Stage::PaymentEntry;
        tracing::debug!(total, "guest draft frozen; payment stage open");
        Ok(())
    }

    /// Switch the payment method. Cash re-defaults the tendered amount
    /// to the total; other methods leave it alone (it is ignored).
    pub fn set_payment_method(&mut self, method: PaymentMethod) -> SessionResult<()> {
        let session = self.open_check_in()?;
        if session.stage != Stage::PaymentEntry {
            return Err(SessionError::NoActiveSession);
        }
        let total = session.total().ok_or(ValidationError::NoRateSelected)?;
        let payment = session.payment.as_mut().ok_or(SessionError::NoActiveSession)?;

        payment.method = method;
        if method.requires_tendered() {
            payment.tendered = total;
        }
        Ok(())
    }

    /// Update the tendered amount (cash)
    pub fn set_tendered(&mut self, amount: f64) -> SessionResult<()> {
        let session = self.open_check_in()?;
        if session.stage != Stage::PaymentEntry {
            return Err(SessionError::NoActiveSession);
        }
        let payment = session.payment.as_mut().ok_or(SessionError::NoActiveSession)?;
        payment.tendered = amount;
        Ok(())
    }

    /// Change due for the current payment draft; negative = insufficient
    pub fn change_due(&self) -> Option<f64> {
        let session = self.session.as_ref()?;
        let total = session.total()?;
        session.payment.as_ref().map(|p| p.change(total))
    }

    /// Confirm the check-in payment: create the stay record, then
    /// request the room transition to occupied. Strictly sequential;
    /// if the first call fails the second is never issued. On partial
    /// failure the session stays open with the created stay recorded,
    /// and calling this again re-attempts only the status update.
    pub async fn confirm_payment(&mut self) -> SessionResult<Stay> {
        let (token, room_id, progress) = {
            let session = self.session.as_ref().ok_or(SessionError::NoActiveSession)?;
            if session.stage != Stage::PaymentEntry {
                return Err(SessionError::NoActiveSession);
            }
            (session.token, session.room.id, session.progress.clone())
        };

        let stay = match progress {
            SubmitProgress::Pending => {
                let body = self.build_stay_create()?;
                tracing::info!(
                    room_id,
                    guest = %body.guest_name,
                    method = body.payment_method.as_str(),
                    amount = body.amount_paid,
                    "creating stay record"
                );
                match self.api.create_stay(&body).await {
                    Ok(stay) => {
                        let session = self.current(token)?;
                        session.progress = SubmitProgress::StayCreated(stay.clone());
                        stay
                    }
                    Err(err) => return Err(self.submit_failure(token, err).await),
                }
            }
            SubmitProgress::StayCreated(stay) => {
                tracing::info!(stay_id = stay.id, room_id, "retrying room status update");
                stay
            }
            SubmitProgress::CheckedOut(_) => return Err(SessionError::NoActiveSession),
        };

        self.finish_status_update(token, room_id, RoomStatus::Occupied, stay)
            .await
    }

    /// Confirm the check-out: close the stay, then request the room
    /// transition to cleaning. Same sequencing and partial-failure
    /// semantics as [`confirm_payment`](Self::confirm_payment).
    pub async fn confirm_checkout(&mut self) -> SessionResult<Stay> {
        let (token, room_id, stay_id, progress) = {
            let session = self.session.as_ref().ok_or(SessionError::NoActiveSession)?;
            if session.stage != Stage::CheckoutReview {
                return Err(SessionError::NoActiveSession);
            }
            let summary = session.checkout.as_ref().ok_or(SessionError::NoActiveSession)?;
            (
                session.token,
                session.room.id,
                summary.stay_id,
                session.progress.clone(),
            )
        };

        let stay = match progress {
            SubmitProgress::Pending => {
                tracing::info!(stay_id, room_id, "closing stay");
                match self.api.checkout_stay(stay_id).await {
                    Ok(stay) => {
                        let session = self.current(token)?;
                        session.progress = SubmitProgress::CheckedOut(stay.clone());
                        stay
                    }
                    Err(err) => return Err(self.submit_failure(token, err).await),
                }
            }
            SubmitProgress::CheckedOut(stay) => {
                tracing::info!(stay_id, room_id, "retrying room status update");
                stay
            }
            SubmitProgress::StayCreated(_) => return Err(SessionError::NoActiveSession),
        };

        self.finish_status_update(token, room_id, RoomStatus::Cleaning, stay)
            .await
    }

    /// Staff marks a cleaned room available again
    pub async fn mark_clean(&mut self, room_id: i64) -> SessionResult<Room> {
        self.request_available(room_id, RoomStatus::Cleaning).await
    }

    /// Staff marks a maintenance issue resolved
    pub async fn resolve_maintenance(&mut self, room_id: i64) -> SessionResult<Room> {
        self.request_available(room_id, RoomStatus::Maintenance)
            .await
    }

    /// Discard the current session and all drafts; no network calls.
    /// Returns whether a session was actually open.
    pub fn cancel(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                tracing::info!(
                    room_id = session.room.id,
                    stage = ?session.stage,
                    "session cancelled"
                );
                true
            }
            None => false,
        }
    }

    // ========== Internals ==========

    /// The open check-in session, if any
    fn open_check_in(&mut self) -> SessionResult<&mut Session> {
        match self.session.as_mut() {
            Some(session) if session.is_check_in() => Ok(session),
            _ => Err(SessionError::NoActiveSession),
        }
    }

    /// Re-acquire the session after an await. A response whose token no
    /// longer matches the open session belongs to a cancelled or
    /// replaced workflow and must be dropped.
    fn current(&mut self, token: Uuid) -> SessionResult<&mut Session> {
        match self.session.as_mut() {
            Some(session) if session.token == token => Ok(session),
            _ => {
                tracing::warn!("discarding response for superseded session");
                Err(SessionError::Stale)
            }
        }
    }

    fn build_stay_create(&self) -> SessionResult<StayCreate> {
        let session = self.session.as_ref().ok_or(SessionError::NoActiveSession)?;
        let rate = session.rate.as_ref().ok_or(ValidationError::NoRateSelected)?;
        let guest = session.guest.as_ref().ok_or(SessionError::NoActiveSession)?;
        let payment = session.payment.as_ref().ok_or(SessionError::NoActiveSession)?;

        payment.validate(rate.price)?;

        Ok(StayCreate {
            room_id: session.room.id,
            guest_name: guest.name.clone(),
            guest_email: guest.email.clone(),
            guest_phone: guest.phone.clone(),
            checkout_due: Utc::now().date_naive() + Days::new(1),
            nightly_price: rate.price,
            payment_method: payment.method,
            amount_paid: payment.amount_paid(rate.price),
        })
    }

    /// Handle a failure of the first mutating call. No rollback is
    /// needed: nothing was persisted yet.
    async fn submit_failure(&mut self, token: Uuid, err: ClientError) -> SessionError {
        if self.session.as_ref().map(|s| s.token) != Some(token) {
            tracing::warn!("discarding failure for superseded session");
            return SessionError::Stale;
        }

        let mapped = SessionError::from_api(err);
        match &mapped {
            SessionError::AuthExpired => self.discard_session("token expired"),
            SessionError::Rejected(err) => {
                // The backend is authoritative; a rejected mutation
                // (e.g. the room was taken by a concurrent session)
                // invalidates this session outright.
                tracing::warn!(error = %err, "submission rejected; session discarded");
                self.session = None;
                self.refresh_after_mutation().await;
            }
            _ => {
                tracing::warn!(error = %mapped, "submission failed; session left open for retry");
            }
        }
        mapped
    }

    /// Second half of a submission: request the room status change.
    async fn finish_status_update(
        &mut self,
        token: Uuid,
        room_id: i64,
        target: RoomStatus,
        stay: Stay,
    ) -> SessionResult<Stay> {
        match self.api.set_room_status(room_id, target).await {
            Ok(_) => {
                self.current(token)?;
                tracing::info!(room_id, status = target.as_str(), "workflow complete");
                self.session = None;
                self.refresh_after_mutation().await;
                Ok(stay)
            }
            Err(ClientError::Unauthorized) => {
                self.discard_session("token expired");
                Err(SessionError::AuthExpired)
            }
            Err(err) => {
                self.current(token)?;
                tracing::warn!(
                    stay_id = stay.id,
                    room_id,
                    error = %err,
                    "stay recorded but room status not updated"
                );
                Err(PartialFailure {
                    stay_id: stay.id,
                    pending: PendingHalf::StatusUpdate { room_id, target },
                    source: err,
                }
                .into())
            }
        }
    }

    /// cleaning -> available / maintenance -> available; no session involved
    async fn request_available(
        &mut self,
        room_id: i64,
        expected: RoomStatus,
    ) -> SessionResult<Room> {
        let room = self
            .directory
            .room(room_id)
            .ok_or(SessionError::UnknownRoom(room_id))?;
        if room.status != expected {
            return Err(SessionError::RoomNotOperable {
                room_id,
                status: room.status,
            });
        }

        let result = self.api.set_room_status(room_id, RoomStatus::Available).await;
        let updated = result.map_err(|err| {
            let mapped = SessionError::from_api(err);
            if matches!(mapped, SessionError::AuthExpired) {
                self.discard_session("token expired");
            }
            mapped
        })?;

        tracing::info!(room_id, "room marked available");
        self.refresh_after_mutation().await;
        Ok(updated)
    }

    fn discard_session(&mut self, reason: &str) {
        if self.session.take().is_some() {
            tracing::warn!(reason, "session discarded");
        }
    }

    /// Best-effort wholesale refresh after a successful mutation; a
    /// failed refresh leaves the snapshot stale until the next one.
    async fn refresh_after_mutation(&mut self) {
        if let Err(err) = self.directory.refresh(&self.api).await {
            tracing::warn!(error = %err, "directory refresh after mutation failed");
        }
    }
}

/// Convenience passthrough so callers holding a `FrontDesk` can reach
/// read-only room data without a second API handle.
impl<A: Api> FrontDesk<A> {
    pub async fn fetch_room(&self, id: i64) -> ClientResult<Room> {
        self.api.get_room(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::models::RoomType;

    /// Api stub for pure state-machine tests; every call fails.
    struct NullApi;

    #[async_trait]
    impl Api for NullApi {
        async fn list_rooms(&self) -> ClientResult<Vec<Room>> {
            Err(ClientError::NotFound("stub".into()))
        }
        async fn get_room(&self, _id: i64) -> ClientResult<Room> {
            Err(ClientError::NotFound("stub".into()))
        }
        async fn set_room_status(&self, _id: i64, _status: RoomStatus) -> ClientResult<Room> {
            Err(ClientError::NotFound("stub".into()))
        }
        async fn active_stay(&self, _room_id: i64) -> ClientResult<Stay> {
            Err(ClientError::NotFound("stub".into()))
        }
        async fn create_stay(&self, _stay: &StayCreate) -> ClientResult<Stay> {
            Err(ClientError::NotFound("stub".into()))
        }
        async fn checkout_stay(&self, _stay_id: i64) -> ClientResult<Stay> {
            Err(ClientError::NotFound("stub".into()))
        }
    }

    fn available_room(id: i64) -> Room {
        Room {
            id,
            number: "203".to_string(),
            room_type: RoomType::Double,
            nightly_price: 100.0,
            status: RoomStatus::Available,
        }
    }

    fn desk_with_room(id: i64) -> FrontDesk<NullApi> {
        FrontDesk::with_directory(NullApi, RoomDirectory::from_rooms(vec![available_room(id)]))
    }

    #[tokio::test]
    async fn test_stale_token_after_cancel() {
        let mut desk = desk_with_room(7);
        desk.open_for_room(7).await.unwrap();
        let token = desk.session().unwrap().token;

        desk.cancel();
        assert!(matches!(desk.current(token), Err(SessionError::Stale)));
    }

    #[tokio::test]
    async fn test_stale_token_after_replacement() {
        let mut desk = FrontDesk::with_directory(
            NullApi,
            RoomDirectory::from_rooms(vec![available_room(7), available_room(8)]),
        );
        desk.open_for_room(7).await.unwrap();
        let first = desk.session().unwrap().token;

        // opening another room is an explicit cancel-then-open
        desk.open_for_room(8).await.unwrap();
        assert!(matches!(desk.current(first), Err(SessionError::Stale)));
        let second = desk.session().unwrap().token;
        assert!(desk.current(second).is_ok());
    }

    #[tokio::test]
    async fn test_operations_require_session() {
        let mut desk = desk_with_room(7);
        assert!(matches!(
            desk.select_rate(RatePlan::Standard),
            Err(SessionError::NoActiveSession)
        ));
        assert!(matches!(
            desk.submit_guest(GuestDraft::new("Ana")),
            Err(SessionError::NoActiveSession)
        ));
        assert!(matches!(
            desk.confirm_payment().await,
            Err(SessionError::NoActiveSession)
        ));
        assert!(!desk.cancel());
    }

    #[tokio::test]
    async fn test_open_unknown_room() {
        let mut desk = desk_with_room(7);
        assert!(matches!(
            desk.open_for_room(99).await,
            Err(SessionError::UnknownRoom(99))
        ));
    }

    #[tokio::test]
    async fn test_guest_entry_requires_rate() {
        let mut desk = desk_with_room(7);
        desk.open_for_room(7).await.unwrap();

        // cannot submit guest data before a rate is chosen
        assert!(matches!(
            desk.submit_guest(GuestDraft::new("Ana")),
            Err(SessionError::NoActiveSession)
        ));
        assert_eq!(desk.session().unwrap().stage, Stage::RateSelection);
    }
}

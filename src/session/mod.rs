//! Location session and request orchestration
//!
//! A `Session` owns the location store, the lifecycle of the current
//! submission, and the latest result or error. Mutations follow a small
//! reducer-style surface (`begin_submit`, `resolve_success`,
//! `resolve_failure`) so every state transition has one name; `submit`
//! drives a whole submission against a calculation service.

pub mod store;

pub use store::LocationStore;

use crate::calc::{CalculationRequest, CalculationResult, CalculationService};
use crate::coord::Coordinates;
use crate::error::Error;
use tracing::warn;

/// Progress of the current submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// No submission yet
    Idle,
    /// A request is in flight
    Loading,
    /// The last submission produced a result
    Succeeded,
    /// The last submission failed; the session carries the message
    Failed,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::Idle
    }
}

/// Identity of one submission
///
/// Each `begin_submit` hands out a fresh token; resolutions carrying any
/// older token are discarded, so a slow response can never overwrite the
/// state of a newer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(u64);

/// The session: location store plus request lifecycle
#[derive(Debug, Default)]
pub struct Session {
    store: LocationStore,
    lifecycle: Lifecycle,
    result: Option<CalculationResult>,
    error: Option<String>,
    submit_seq: u64,
}

impl Session {
    /// Create a session at the default location, idle
    pub fn new() -> Self {
        Self::with_store(LocationStore::new())
    }

    /// Create a session around an existing store
    pub fn with_store(store: LocationStore) -> Self {
        Self {
            store,
            lifecycle: Lifecycle::Idle,
            result: None,
            error: None,
            submit_seq: 0,
        }
    }

    /// The location store
    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// True while a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    /// The latest result, if the last submission succeeded
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// The latest error message, if the last submission failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the latitude input text
    pub fn set_latitude_text(&mut self, text: impl Into<String>) {
        self.store.set_latitude_text(text);
    }

    /// Replace the longitude input text
    pub fn set_longitude_text(&mut self, text: impl Into<String>) {
        self.store.set_longitude_text(text);
    }

    /// Replace the offset angle input text
    pub fn set_offset_text(&mut self, text: impl Into<String>) {
        self.store.set_offset_text(text);
    }

    /// Forward a map click into the store
    pub fn apply_map_click(&mut self, coords: Coordinates) {
        self.store.apply_map_click(coords);
    }

    /// Start a submission
    ///
    /// Clears the previous result and error, enters `Loading`, and hands
    /// out the token that the matching resolution must present.
    pub fn begin_submit(&mut self) -> SubmitToken {
        self.result = None;
        self.error = None;
        self.lifecycle = Lifecycle::Loading;
        self.submit_seq += 1;
        SubmitToken(self.submit_seq)
    }

    fn is_current(&self, token: SubmitToken) -> bool {
        token.0 == self.submit_seq
    }

    /// Record a successful response for the given submission
    ///
    /// Discarded when a newer submission has started since. On a current
    /// token, the map recenters to exactly the submitted pair, even if
    /// the texts were edited while the request was in flight.
    pub fn resolve_success(
        &mut self,
        token: SubmitToken,
        submitted: Coordinates,
        result: CalculationResult,
    ) {
        if !self.is_current(token) {
            return;
        }
        self.result = Some(result);
        self.error = None;
        self.lifecycle = Lifecycle::Succeeded;
        self.store.set_map_position(submitted);
    }

    /// Record a failed submission with its user-facing message
    ///
    /// Discarded when a newer submission has started since.
    pub fn resolve_failure(&mut self, token: SubmitToken, message: impl Into<String>) {
        if !self.is_current(token) {
            return;
        }
        self.result = None;
        self.error = Some(message.into());
        self.lifecycle = Lifecycle::Failed;
    }

    /// Run one full submission against the given service
    ///
    /// Validation failures surface their fixed message without a network
    /// call; any service failure surfaces the generic retry message while
    /// the detail goes to the log.
    pub async fn submit<S: CalculationService>(&mut self, service: &S) {
        let token = self.begin_submit();

        let request = match CalculationRequest::from_texts(
            self.store.latitude_text(),
            self.store.longitude_text(),
            self.store.offset_text(),
        ) {
            Ok(request) => request,
            Err(e) => {
                self.resolve_failure(token, e.to_string());
                return;
            }
        };

        match service.calculate(&request).await {
            Ok(result) => self.resolve_success(token, request.coordinates(), result),
            Err(e) => {
                warn!("calculation request failed: {}", e);
                self.resolve_failure(token, Error::RequestFailed.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::OrientationAngles;
    use crate::error::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Canned calculation service recording every request it receives
    struct StubService {
        outcome: StubOutcome,
        calls: AtomicUsize,
        last_request: Mutex<Option<CalculationRequest>>,
    }

    enum StubOutcome {
        Succeed(CalculationResult),
        Fail,
    }

    impl StubService {
        fn succeeding() -> Self {
            Self {
                outcome: StubOutcome::Succeed(sample_result()),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                outcome: StubOutcome::Fail,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_request(&self) -> Option<CalculationRequest> {
            *self.last_request.lock().unwrap()
        }
    }

    impl CalculationService for StubService {
        async fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(*request);
            match &self.outcome {
                StubOutcome::Succeed(result) => Ok(*result),
                StubOutcome::Fail => Err(Error::Service("stub failure".to_string())),
            }
        }
    }

    fn sample_result() -> CalculationResult {
        CalculationResult {
            pvlib: OrientationAngles {
                optimal_pitch: 33.9,
                optimal_azimuth: 180.0,
            },
            nrel: OrientationAngles {
                optimal_pitch: 36.2,
                optimal_azimuth: 180.0,
            },
            liu_jordan: OrientationAngles {
                optimal_pitch: 43.65,
                optimal_azimuth: 180.0,
            },
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.lifecycle(), Lifecycle::Idle);
        assert!(!session.is_loading());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_submit_success() {
        let service = StubService::succeeding();
        let mut session = Session::new();

        session.submit(&service).await;

        assert_eq!(session.lifecycle(), Lifecycle::Succeeded);
        assert!(!session.is_loading());
        assert!(session.error().is_none());
        assert_eq!(service.calls(), 1);

        // All three sub-results come through unchanged
        let result = session.result().unwrap();
        assert_eq!(result.pvlib.optimal_pitch, 33.9);
        assert_eq!(result.nrel.optimal_pitch, 36.2);
        assert_eq!(result.liu_jordan.optimal_azimuth, 180.0);
    }

    #[tokio::test]
    async fn test_submit_recenters_map_to_submitted_pair() {
        let service = StubService::succeeding();
        let mut session = Session::new();
        session.set_latitude_text("51.5");
        session.set_longitude_text("-0.1");

        session.submit(&service).await;

        assert_eq!(session.store().map_position(), Coordinates::new(51.5, -0.1));
    }

    #[tokio::test]
    async fn test_invalid_latitude_skips_network() {
        let service = StubService::succeeding();
        let mut session = Session::new();
        session.set_latitude_text("999");

        session.submit(&service).await;

        assert_eq!(session.lifecycle(), Lifecycle::Failed);
        assert_eq!(
            session.error(),
            Some("Please enter valid latitude (-90 to 90)")
        );
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn test_longitude_checked_after_latitude() {
        let service = StubService::succeeding();
        let mut session = Session::new();
        session.set_latitude_text("999");
        session.set_longitude_text("999");

        session.submit(&service).await;
        assert_eq!(
            session.error(),
            Some("Please enter valid latitude (-90 to 90)")
        );

        session.set_latitude_text("43.65");
        session.submit(&service).await;
        assert_eq!(
            session.error(),
            Some("Please enter valid longitude (-180 to 180)")
        );
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_offset_skips_network() {
        let service = StubService::succeeding();
        let mut session = Session::new();
        session.set_offset_text("100");

        session.submit(&service).await;

        assert_eq!(session.lifecycle(), Lifecycle::Failed);
        assert_eq!(
            session.error(),
            Some("Please enter valid Offset Angle (0 to 90)")
        );
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_offset_is_omitted() {
        let service = StubService::succeeding();
        let mut session = Session::new();

        session.submit(&service).await;

        let request = service.last_request().unwrap();
        assert_eq!(request.offset_angle, None);
    }

    #[tokio::test]
    async fn test_supplied_offset_is_sent() {
        let service = StubService::succeeding();
        let mut session = Session::new();
        session.set_offset_text("0");

        session.submit(&service).await;

        // Zero is a real offset, not "no offset"
        let request = service.last_request().unwrap();
        assert_eq!(request.offset_angle, Some(0.0));
    }

    #[tokio::test]
    async fn test_service_failure_uses_generic_message() {
        let service = StubService::failing();
        let mut session = Session::new();

        session.submit(&service).await;

        assert_eq!(session.lifecycle(), Lifecycle::Failed);
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("Something went wrong. Try again."));
        assert!(session.result().is_none());
    }

    #[tokio::test]
    async fn test_new_submission_clears_previous_outcome() {
        let good = StubService::succeeding();
        let bad = StubService::failing();
        let mut session = Session::new();

        session.submit(&good).await;
        assert!(session.result().is_some());

        // The failed submission clears the old result
        session.submit(&bad).await;
        assert!(session.result().is_none());
        assert!(session.error().is_some());

        // And a later success clears the error again
        session.submit(&good).await;
        assert!(session.result().is_some());
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_identical_submissions_are_idempotent() {
        let service = StubService::succeeding();
        let mut session = Session::new();

        session.submit(&service).await;
        let first_lifecycle = session.lifecycle();
        let first_result = *session.result().unwrap();
        let first_position = session.store().map_position();

        session.submit(&service).await;
        assert_eq!(session.lifecycle(), first_lifecycle);
        assert_eq!(*session.result().unwrap(), first_result);
        assert_eq!(session.store().map_position(), first_position);
    }

    #[test]
    fn test_begin_submit_clears_state_and_loads() {
        let mut session = Session::new();
        let token = session.begin_submit();
        session.resolve_failure(token, "boom");
        assert!(session.error().is_some());

        session.begin_submit();
        assert_eq!(session.lifecycle(), Lifecycle::Loading);
        assert!(session.is_loading());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let mut session = Session::new();

        let stale = session.begin_submit();
        let current = session.begin_submit();

        // The slow first response arrives after the second submission
        session.resolve_success(stale, Coordinates::new(0.0, 0.0), sample_result());
        assert_eq!(session.lifecycle(), Lifecycle::Loading);
        assert!(session.result().is_none());
        assert_eq!(session.store().map_position(), Coordinates::new(43.65, -79.38));

        // The current response still lands
        session.resolve_success(current, Coordinates::new(51.5, -0.1), sample_result());
        assert_eq!(session.lifecycle(), Lifecycle::Succeeded);
        assert_eq!(session.store().map_position(), Coordinates::new(51.5, -0.1));
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut session = Session::new();

        let stale = session.begin_submit();
        let current = session.begin_submit();

        session.resolve_failure(stale, "old failure");
        assert_eq!(session.lifecycle(), Lifecycle::Loading);
        assert!(session.error().is_none());

        session.resolve_success(current, Coordinates::new(51.5, -0.1), sample_result());
        assert_eq!(session.lifecycle(), Lifecycle::Succeeded);
    }

    #[test]
    fn test_edits_during_loading_do_not_disturb_outcome() {
        let mut session = Session::new();

        // Drive the reducer by hand to model an in-flight request
        let token = session.begin_submit();
        session.set_latitude_text("10");
        assert!(session.is_loading());
        assert_eq!(session.store().latitude_text(), "10");

        // The response recenters to what was submitted, not what was
        // typed in the meantime
        session.resolve_success(token, Coordinates::new(43.65, -79.38), sample_result());
        assert_eq!(session.lifecycle(), Lifecycle::Succeeded);
        assert_eq!(session.store().latitude_text(), "10");
        assert_eq!(session.store().map_position(), Coordinates::new(43.65, -79.38));
    }
}

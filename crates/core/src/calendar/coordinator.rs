//! Fetch coordinator
//!
//! Issues windowed fetches tagged with a generation and owns the displayed
//! event set together with the loading and error flags. A response is
//! applied only if its generation is still the latest of a still-open
//! session. The check and the mutation happen under one lock.

use std::sync::Arc;

use ballkeeper_domain::{BallkeeperError, FetchRequest, ReservationRecord};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::error::SyncError;
use super::ports::ReservationSource;
use super::projection::project_all;
use super::retry::RetryPolicy;
use super::state::{EngineState, SharedState};

/// Result of a fetch whose response made it onto the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedFetch {
    pub generation: u64,
    pub attempts: u32,
    pub event_count: usize,
}

/// Handle to one issued fetch.
///
/// Dropping the ticket does not cancel the fetch; supersession is logical.
#[derive(Debug)]
pub struct FetchTicket {
    request: FetchRequest,
    handle: JoinHandle<Result<AppliedFetch, SyncError>>,
}

impl FetchTicket {
    pub fn request(&self) -> &FetchRequest {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.request.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the fetch to settle and report what happened to it.
    pub async fn outcome(self) -> Result<AppliedFetch, SyncError> {
        let generation = self.request.generation;
        match self.handle.await {
            Ok(result) => result,
            Err(join_err) => {
                Err(SyncError::TaskFailed { generation, message: join_err.to_string() })
            }
        }
    }
}

pub(crate) struct FetchCoordinator {
    source: Arc<dyn ReservationSource>,
    state: Arc<SharedState>,
    retry: RetryPolicy,
}

impl FetchCoordinator {
    pub(crate) fn new(
        source: Arc<dyn ReservationSource>,
        state: Arc<SharedState>,
        retry: RetryPolicy,
    ) -> Self {
        Self { source, state, retry }
    }

    /// Mark `request` in flight and spawn it.
    ///
    /// Called with the state lock held, right after the controller made
    /// `request.generation` current. Must run inside a Tokio runtime.
    pub(crate) fn request(
        &self,
        state: &mut EngineState,
        request: FetchRequest,
        session: CancellationToken,
    ) -> FetchTicket {
        state.loading = true;
        state.last_error = None;
        debug!(
            generation = request.generation,
            item_id = request.item_id,
            window = %request.window,
            "Issuing calendar fetch"
        );

        let handle = tokio::spawn(run_fetch(
            Arc::clone(&self.source),
            Arc::clone(&self.state),
            self.retry,
            request,
            session,
        ));
        FetchTicket { request, handle }
    }
}

async fn run_fetch(
    source: Arc<dyn ReservationSource>,
    state: Arc<SharedState>,
    retry: RetryPolicy,
    request: FetchRequest,
    session: CancellationToken,
) -> Result<AppliedFetch, SyncError> {
    let generation = request.generation;
    let mut attempts = 0_u32;

    loop {
        attempts += 1;
        let fetch = tokio::time::timeout(
            retry.attempt_timeout,
            source.fetch_reservation_window(request.item_id, &request.window),
        );
        let outcome = tokio::select! {
            biased;
            () = session.cancelled() => return Err(SyncError::Cancelled { generation }),
            result = fetch => match result {
                Ok(inner) => inner,
                Err(_) => Err(BallkeeperError::Timeout(format!(
                    "calendar fetch exceeded {}ms",
                    retry.attempt_timeout.as_millis()
                ))),
            },
        };

        match outcome {
            Ok(records) => return apply_success(&state, &request, &session, attempts, &records),
            Err(err) if err.is_transient() && retry.allows_another(attempts) => {
                ensure_current(&state, &request, &session)?;
                let delay = retry.delay_for(attempts);
                debug!(
                    generation,
                    attempt = attempts,
                    delay = ?delay,
                    error = %err,
                    "Calendar fetch failed, retrying"
                );
                tokio::select! {
                    biased;
                    () = session.cancelled() => return Err(SyncError::Cancelled { generation }),
                    () = tokio::time::sleep(delay) => {}
                }
            }
            Err(err) => return apply_failure(&state, &request, &session, attempts, err),
        }
    }
}

fn ensure_current(
    state: &SharedState,
    request: &FetchRequest,
    session: &CancellationToken,
) -> Result<(), SyncError> {
    state.read(|s| check_current(s, request, session))
}

fn check_current(
    state: &EngineState,
    request: &FetchRequest,
    session: &CancellationToken,
) -> Result<(), SyncError> {
    let generation = request.generation;
    if session.is_cancelled() {
        return Err(SyncError::Cancelled { generation });
    }
    if !state.generations.is_current(generation) {
        return Err(SyncError::StaleResponse { generation, latest: state.generations.latest() });
    }
    Ok(())
}

fn apply_success(
    state: &SharedState,
    request: &FetchRequest,
    session: &CancellationToken,
    attempts: u32,
    records: &[ReservationRecord],
) -> Result<AppliedFetch, SyncError> {
    let generation = request.generation;
    let events = project_all(records);
    let event_count = events.len();

    let applied: Result<AppliedFetch, SyncError> = state.with(|s| {
        check_current(s, request, session)?;
        s.events = events;
        s.loading = false;
        s.last_error = None;
        s.applied_generation = Some(generation);
        Ok(AppliedFetch { generation, attempts, event_count })
    });

    match &applied {
        Ok(_) => info!(generation, event_count, "Calendar events applied"),
        Err(err) => debug!(generation, reason = err.label(), "Discarding calendar response"),
    }
    applied
}

fn apply_failure(
    state: &SharedState,
    request: &FetchRequest,
    session: &CancellationToken,
    attempts: u32,
    source: BallkeeperError,
) -> Result<AppliedFetch, SyncError> {
    let generation = request.generation;
    let message = source.to_string();

    let current: Result<(), SyncError> = state.with(|s| {
        check_current(s, request, session)?;
        s.loading = false;
        s.last_error = Some(message.clone());
        Ok(())
    });

    match current {
        Ok(()) => {
            warn!(generation, attempts, error = %message, "Calendar fetch failed");
            Err(SyncError::TransportFailure { generation, attempts, source })
        }
        Err(err) => {
            debug!(generation, reason = err.label(), error = %message, "Discarding calendar failure");
            Err(err)
        }
    }
}

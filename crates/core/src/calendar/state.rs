//! Engine state shared between the controller and in-flight fetches
//!
//! Every mutation goes through [`SharedState::with`], which holds the lock
//! for the whole closure and publishes the resulting snapshot before
//! releasing it. The lock is never held across an `.await`.

use ballkeeper_domain::{
    CalendarEvent, CalendarPhase, CalendarSnapshot, Granularity, NavigationState,
};
use chrono::NaiveDate;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::generation::GenerationCounter;

#[derive(Debug)]
pub(crate) struct EngineState {
    pub(crate) navigation: NavigationState,
    pub(crate) generations: GenerationCounter,
    /// Token of the open session; `None` while closed.
    pub(crate) session: Option<CancellationToken>,
    pub(crate) events: Vec<CalendarEvent>,
    pub(crate) loading: bool,
    pub(crate) last_error: Option<String>,
    pub(crate) applied_generation: Option<u64>,
}

impl EngineState {
    pub(crate) fn closed(anchor: NaiveDate, granularity: Granularity) -> Self {
        Self {
            navigation: NavigationState::closed(anchor, granularity),
            generations: GenerationCounter::new(),
            session: None,
            events: Vec::new(),
            loading: false,
            last_error: None,
            applied_generation: None,
        }
    }

    /// Drop whatever is displayed without touching navigation.
    pub(crate) fn clear_display(&mut self) {
        self.events.clear();
        self.loading = false;
        self.last_error = None;
        self.applied_generation = None;
    }

    pub(crate) fn phase(&self) -> CalendarPhase {
        if !self.navigation.is_active {
            CalendarPhase::Closed
        } else if self.loading {
            CalendarPhase::Loading
        } else if self.last_error.is_some() {
            CalendarPhase::Error
        } else if self.navigation.item.is_some() && self.applied_generation.is_some() {
            CalendarPhase::Ready
        } else {
            CalendarPhase::Idle
        }
    }

    pub(crate) fn snapshot(&self) -> CalendarSnapshot {
        CalendarSnapshot {
            phase: self.phase(),
            navigation: self.navigation.clone(),
            events: self.events.clone(),
            is_loading: self.loading,
            has_error: self.last_error.is_some(),
            last_error: self.last_error.clone(),
            applied_generation: self.applied_generation,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SharedState {
    inner: Mutex<EngineState>,
    publisher: watch::Sender<CalendarSnapshot>,
}

impl SharedState {
    pub(crate) fn new(initial: EngineState) -> Self {
        let (publisher, _) = watch::channel(initial.snapshot());
        Self { inner: Mutex::new(initial), publisher }
    }

    /// Mutate under the lock and publish if the visible state changed.
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut EngineState) -> R) -> R {
        let mut guard = self.inner.lock();
        let out = f(&mut guard);
        let next = guard.snapshot();
        self.publisher.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        out
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&EngineState) -> R) -> R {
        f(&self.inner.lock())
    }

    pub(crate) fn snapshot(&self) -> CalendarSnapshot {
        self.read(EngineState::snapshot)
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<CalendarSnapshot> {
        self.publisher.subscribe()
    }
}

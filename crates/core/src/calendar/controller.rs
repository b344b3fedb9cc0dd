//! Calendar view controller
//!
//! Owns navigation state and the generation counter, decides when a
//! navigation change warrants a fetch, and exposes the materialised
//! snapshot to the host. Display mutation is delegated to the coordinator.

use std::sync::Arc;

use ballkeeper_domain::{
    CalendarConfig, CalendarSnapshot, FetchRequest, Granularity, ItemTarget, NavigationState,
};
use chrono::NaiveDate;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::coordinator::{FetchCoordinator, FetchTicket};
use super::ports::{Clock, ReservationSource, SystemClock};
use super::retry::RetryPolicy;
use super::state::{EngineState, SharedState};
use super::window::WindowResolver;

/// Tunables of the calendar engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSettings {
    pub window_margin_days: u32,
    pub refetch_on_granularity_change: bool,
    pub default_granularity: Granularity,
    pub retry: RetryPolicy,
}

impl From<&CalendarConfig> for CalendarSettings {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            window_margin_days: config.window_margin_days,
            refetch_on_granularity_change: config.refetch_on_granularity_change,
            default_granularity: config.default_granularity,
            retry: RetryPolicy::from_config(config),
        }
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self::from(&CalendarConfig::default())
    }
}

/// What a host call did.
#[derive(Debug)]
pub enum NavigationOutcome {
    /// The view is closed; nothing changed.
    Inactive,
    /// Nothing fetch-relevant changed.
    Unchanged,
    /// No item is selected, so nothing was fetched.
    TargetMissing,
    /// A new fetch was issued and is now current.
    Issued(FetchTicket),
}

impl NavigationOutcome {
    pub fn ticket(self) -> Option<FetchTicket> {
        match self {
            Self::Issued(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn is_issued(&self) -> bool {
        matches!(self, Self::Issued(_))
    }
}

/// Availability calendar engine for one hosting view.
///
/// All methods are synchronous and return immediately. Fetches run on the
/// Tokio runtime, so methods that may issue one must be called from within
/// a runtime.
pub struct CalendarEngine {
    state: Arc<SharedState>,
    coordinator: FetchCoordinator,
    resolver: WindowResolver,
    clock: Arc<dyn Clock>,
    settings: CalendarSettings,
}

impl CalendarEngine {
    pub fn new(source: Arc<dyn ReservationSource>, settings: CalendarSettings) -> Self {
        Self::with_clock(source, settings, Arc::new(SystemClock))
    }

    pub fn with_clock(
        source: Arc<dyn ReservationSource>,
        settings: CalendarSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let state = Arc::new(SharedState::new(EngineState::closed(
            clock.today(),
            settings.default_granularity,
        )));
        let coordinator = FetchCoordinator::new(source, Arc::clone(&state), settings.retry);
        Self {
            state,
            coordinator,
            resolver: WindowResolver::new(settings.window_margin_days),
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// Open the view without an item. No-op if already open.
    pub fn activate(&self) {
        let today = self.clock.today();
        let granularity = self.settings.default_granularity;
        self.state.with(|s| {
            if s.navigation.is_active {
                return;
            }
            Self::start_session(s, today, granularity);
            info!(anchor = %today, "Calendar opened");
        });
    }

    /// Open the view on `target`.
    ///
    /// Opening a closed view starts a fresh session anchored on today.
    /// Opening an already open view behaves like [`Self::select_item`].
    pub fn open(&self, target: ItemTarget) -> NavigationOutcome {
        let today = self.clock.today();
        let granularity = self.settings.default_granularity;
        self.state.with(|s| {
            if !s.navigation.is_active {
                Self::start_session(s, today, granularity);
                info!(item_id = target.id, anchor = %today, "Calendar opened");
            }
            self.select_locked(s, Some(target))
        })
    }

    /// Change the selected item. `None` clears the display and supersedes any
    /// fetch in flight.
    pub fn select_item(&self, target: Option<ItemTarget>) -> NavigationOutcome {
        self.state.with(|s| {
            if !s.navigation.is_active {
                return NavigationOutcome::Inactive;
            }
            self.select_locked(s, target)
        })
    }

    /// Host navigation callback.
    pub fn navigate(&self, anchor: NaiveDate, granularity: Granularity) -> NavigationOutcome {
        let refetch_on_granularity = self.settings.refetch_on_granularity_change;
        self.state.with(|s| {
            if !s.navigation.is_active {
                return NavigationOutcome::Inactive;
            }
            let date_changed = s.navigation.anchor_date != anchor;
            let granularity_changed = s.navigation.granularity != granularity;
            s.navigation.anchor_date = anchor;
            s.navigation.granularity = granularity;

            if s.navigation.item.is_none() {
                debug!(anchor = %anchor, "Navigation without a selected item; not fetching");
                return NavigationOutcome::TargetMissing;
            }
            if date_changed || (granularity_changed && refetch_on_granularity) {
                self.issue_locked(s)
            } else {
                NavigationOutcome::Unchanged
            }
        })
    }

    /// Re-issue the current request, e.g. after an error.
    pub fn refresh(&self) -> NavigationOutcome {
        self.state.with(|s| {
            if !s.navigation.is_active {
                return NavigationOutcome::Inactive;
            }
            self.issue_locked(s)
        })
    }

    /// Close the view: cancel the session, clear everything, and reset the
    /// generation counter.
    pub fn close(&self) {
        let today = self.clock.today();
        let granularity = self.settings.default_granularity;
        self.state.with(|s| {
            if let Some(session) = s.session.take() {
                session.cancel();
            }
            let was_active = s.navigation.is_active;
            *s = EngineState::closed(today, granularity);
            if was_active {
                info!("Calendar closed");
            }
        });
    }

    pub fn snapshot(&self) -> CalendarSnapshot {
        self.state.snapshot()
    }

    /// Receiver that sees every published snapshot change.
    pub fn subscribe(&self) -> watch::Receiver<CalendarSnapshot> {
        self.state.subscribe()
    }

    pub fn navigation(&self) -> NavigationState {
        self.state.read(|s| s.navigation.clone())
    }

    pub fn latest_generation(&self) -> u64 {
        self.state.read(|s| s.generations.latest())
    }

    pub fn is_active(&self) -> bool {
        self.state.read(|s| s.navigation.is_active)
    }

    fn start_session(state: &mut EngineState, today: NaiveDate, granularity: Granularity) {
        *state = EngineState::closed(today, granularity);
        state.navigation.is_active = true;
        state.session = Some(CancellationToken::new());
    }

    fn select_locked(
        &self,
        state: &mut EngineState,
        target: Option<ItemTarget>,
    ) -> NavigationOutcome {
        match target {
            None => {
                if state.navigation.item.take().is_some() {
                    state.generations.advance();
                    state.clear_display();
                    debug!("Calendar item cleared");
                }
                NavigationOutcome::TargetMissing
            }
            Some(target) if state.navigation.item.as_ref() == Some(&target) => {
                NavigationOutcome::Unchanged
            }
            Some(target) => {
                let item_changed = state.navigation.item_id() != Some(target.id);
                state.navigation.item = Some(target);
                if item_changed {
                    state.events.clear();
                    state.applied_generation = None;
                    state.last_error = None;
                    self.issue_locked(state)
                } else {
                    NavigationOutcome::Unchanged
                }
            }
        }
    }

    fn issue_locked(&self, state: &mut EngineState) -> NavigationOutcome {
        let Some(item_id) = state.navigation.item_id() else {
            return NavigationOutcome::TargetMissing;
        };
        let Some(session) = state.session.clone() else {
            return NavigationOutcome::Inactive;
        };
        let generation = state.generations.advance();
        let window = self.resolver.resolve(state.navigation.anchor_date);
        let request = FetchRequest { generation, item_id, window };
        NavigationOutcome::Issued(self.coordinator.request(state, request, session))
    }
}

impl Drop for CalendarEngine {
    fn drop(&mut self) {
        self.state.with(|s| {
            if let Some(session) = s.session.take() {
                session.cancel();
            }
        });
    }
}

//! Fetch window resolution
//!
//! The window is `[anchor - margin, anchor + margin)` at midnight of the
//! anchor date. The margin does not depend on granularity, so paging inside
//! the window never needs a new window.

use ballkeeper_domain::FetchWindow;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Pure anchor-date → window mapping with a fixed margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResolver {
    margin: TimeDelta,
}

impl WindowResolver {
    pub fn new(margin_days: u32) -> Self {
        Self { margin: TimeDelta::days(i64::from(margin_days)) }
    }

    pub fn margin(&self) -> TimeDelta {
        self.margin
    }

    /// Window centred on `anchor`. Saturates at the calendar limits instead
    /// of failing.
    pub fn resolve(&self, anchor: NaiveDate) -> FetchWindow {
        let midnight = anchor.and_time(NaiveTime::MIN);
        let start = midnight.checked_sub_signed(self.margin).unwrap_or(NaiveDateTime::MIN);
        let end = midnight.checked_add_signed(self.margin).unwrap_or(NaiveDateTime::MAX);
        FetchWindow { start, end }
    }
}

impl Default for WindowResolver {
    fn default() -> Self {
        Self::new(ballkeeper_domain::constants::DEFAULT_WINDOW_MARGIN_DAYS)
    }
}

//! Calendar port interfaces
//!
//! The engine reaches the reservation backend and the wall clock only
//! through these traits.

use async_trait::async_trait;
use ballkeeper_domain::{FetchWindow, ItemId, ReservationRecord, Result};
use chrono::NaiveDate;

/// Remote source of truth for reservations.
#[async_trait]
pub trait ReservationSource: Send + Sync {
    /// Fetch every reservation of `item_id` overlapping `window`.
    ///
    /// The list is unpaginated; callers accept whatever size the server
    /// returns.
    async fn fetch_reservation_window(
        &self,
        item_id: ItemId,
        window: &FetchWindow,
    ) -> Result<Vec<ReservationRecord>>;
}

/// Source of "today" for the initial anchor date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

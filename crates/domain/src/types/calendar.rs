//! Availability calendar types
//!
//! Navigation state reported by the host, the fetch window and request
//! derived from it, the raw reservation records returned by the server, and
//! the projected events handed to the renderer.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::style::{EventStyle, StylePriority};
use super::timestamp::{self, format_window_timestamp};

/// Identifier of a reservable item.
pub type ItemId = i64;

/// Zoom level of the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    #[default]
    Week,
    Month,
    Agenda,
}

crate::impl_domain_status_conversions!(Granularity {
    Day => "day",
    Week => "week",
    Month => "month",
    Agenda => "agenda",
});

/// Item the calendar is showing, with the label used in the view title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTarget {
    pub id: ItemId,
    pub label: String,
}

impl ItemTarget {
    pub fn new(id: ItemId, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}

/// Navigation state of the hosting view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub item: Option<ItemTarget>,
    pub anchor_date: NaiveDate,
    pub granularity: Granularity,
    pub is_active: bool,
}

impl NavigationState {
    /// Neutral state: inactive, nothing selected.
    pub fn closed(anchor_date: NaiveDate, granularity: Granularity) -> Self {
        Self { item: None, anchor_date, granularity, is_active: false }
    }

    pub fn item_id(&self) -> Option<ItemId> {
        self.item.as_ref().map(|item| item.id)
    }
}

/// Half-open `[start, end)` range of time fetched for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl FetchWindow {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Whether `[start, end)` intersects the window.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && end > self.start
    }

    pub fn start_param(&self) -> String {
        format_window_timestamp(&self.start)
    }

    pub fn end_param(&self) -> String {
        format_window_timestamp(&self.end)
    }
}

impl fmt::Display for FetchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_param(), self.end_param())
    }
}

/// One issued fetch, tagged with the generation that was current when it was
/// created. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub generation: u64,
    pub item_id: ItemId,
    pub window: FetchWindow,
}

/// Reservation status as reported by the server.
///
/// Unknown values are preserved verbatim so they can be logged and still
/// rendered as occupied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Other(String),
}

impl ReservationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for ReservationStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "APPROVED" => Self::Approved,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ReservationStatus> for String {
    fn from(value: ReservationStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation as returned by the calendar endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: i64,
    #[serde(alias = "startTime", with = "timestamp::remote")]
    pub start: NaiveDateTime,
    #[serde(alias = "endTime", with = "timestamp::remote")]
    pub end: NaiveDateTime,
    pub status: ReservationStatus,
}

/// Displayable calendar block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: ReservationStatus,
    pub style: EventStyle,
    pub style_priority: StylePriority,
}

/// Lifecycle phase of the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarPhase {
    Closed,
    Idle,
    Loading,
    Ready,
    Error,
}

/// Everything the renderer needs at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSnapshot {
    pub phase: CalendarPhase,
    pub navigation: NavigationState,
    pub events: Vec<CalendarEvent>,
    pub is_loading: bool,
    pub has_error: bool,
    pub last_error: Option<String>,
    /// Generation of the response currently on display, if any.
    pub applied_generation: Option<u64>,
}

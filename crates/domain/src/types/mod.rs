//! Domain types and models

pub mod admin;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod notification;
pub mod style;
pub mod timestamp;
pub mod user;

pub use admin::{DailyStat, DashboardMetrics, PopularItem, ReservationSummary};
pub use calendar::{
    CalendarEvent, CalendarPhase, CalendarSnapshot, FetchRequest, FetchWindow, Granularity,
    ItemId, ItemTarget, NavigationState, ReservationRecord, ReservationStatus,
};
pub use catalog::ItemSummary;
pub use chat::{ChatMessage, ChatRequest, ChatSender};
pub use notification::Notification;
pub use style::{EventStyle, LegendEntry, StylePalette, StylePriority};
pub use user::{UserAccount, UserId, UserIdentity};

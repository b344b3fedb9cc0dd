//! # BallKeeper Core
//!
//! Business logic of the reservation assistant - no infrastructure
//! dependencies.
//!
//! This crate contains:
//! - The availability calendar engine (navigation, windowing, generation
//!   tagged fetches, projection)
//! - Port/adapter interfaces (traits) for every remote collaborator
//! - Chat transcript, notification session and admin services
//!
//! ## Architecture Principles
//! - Only depends on `ballkeeper-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod admin;
pub mod calendar;
pub mod catalog_ports;
pub mod chat;
pub mod notifications;

// Re-export specific items to avoid ambiguity
pub use admin::{AdminGateway, AdminService};
pub use calendar::{
    CalendarEngine, CalendarSettings, Clock, FetchTicket, NavigationOutcome, ReservationSource,
    SyncError, SystemClock,
};
pub use catalog_ports::ItemCatalog;
pub use chat::{ChatGateway, ChatTranscript};
pub use notifications::{
    NotificationChannel, NotificationService, NotificationSink, NotificationStream,
};

//! Availability calendar synchronisation
//!
//! Keeps the displayed reservation set of one item consistent with the most
//! recent navigation request, no matter in which order responses arrive.

pub mod controller;
pub mod coordinator;
pub mod error;
pub mod generation;
pub mod ports;
pub mod projection;
pub mod retry;
mod state;
pub mod window;

pub use controller::{CalendarEngine, CalendarSettings, NavigationOutcome};
pub use coordinator::{AppliedFetch, FetchTicket};
pub use error::SyncError;
pub use generation::GenerationCounter;
pub use ports::{Clock, FixedClock, ReservationSource, SystemClock};
pub use projection::{project, project_all, style_for, title_for};
pub use retry::RetryPolicy;
pub use window::WindowResolver;

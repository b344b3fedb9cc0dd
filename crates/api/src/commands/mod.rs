//! Host-facing commands
//!
//! Each command is a plain async function over [`AppContext`](crate::AppContext),
//! wrapped with timing and structured logging.

pub mod admin;
pub mod calendar;
pub mod chat;
pub mod items;
pub mod session;

pub use admin::{admin_dashboard, admin_list_users, admin_toggle_role, admin_user_reservations};
pub use calendar::{
    calendar_legend, calendar_snapshot, close_calendar, load_calendar, navigate_calendar,
    navigate_calendar_and_wait, open_calendar, refresh_calendar,
};
pub use chat::{chat_history, send_chat_message};
pub use items::{list_items, resolve_item};
pub use session::{current_user, notifications_connected, sign_in, sign_out};

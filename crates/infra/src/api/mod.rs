//! REST adapters for the BallKeeper backend
//!
//! Each adapter implements one core port on top of the shared
//! [`HttpClient`](crate::http::HttpClient). Calendar and catalog reads go
//! through the client's retry policy; chat and admin writes are sent once.

pub mod admin;
pub mod chat;
pub mod items;
pub mod reservations;

pub use admin::AdminApi;
pub use chat::ChatApi;
pub use items::ItemsApi;
pub use reservations::ReservationApi;

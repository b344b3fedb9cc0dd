//! # BallKeeper Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The shared HTTP client (retry, timeouts, status classification)
//! - REST adapters for reservations, items, chat and admin endpoints
//! - The server-sent event notification channel
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `ballkeeper-core`
//! - Contains all "impure" code (network I/O, environment, files)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod notifications;

// Re-export commonly used items
pub use api::{AdminApi, ChatApi, ItemsApi, ReservationApi};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use notifications::SseNotificationChannel;

//! # BallKeeper App
//!
//! Application layer - host commands and the command-line entry point.
//!
//! This crate contains:
//! - Host commands (calendar, items, chat, admin, session)
//! - Application context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod adapters;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;

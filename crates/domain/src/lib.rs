//! # BallKeeper Domain
//!
//! Business domain types and models for the BallKeeper reservation assistant.
//!
//! This crate contains:
//! - Calendar navigation, fetch and projection types
//! - Wire DTOs for the item catalog, chat, admin and notification endpoints
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other BallKeeper crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

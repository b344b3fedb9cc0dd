//! Configuration loading
//!
//! Environment variables (and `.env`) first, then JSON or TOML files, then
//! built-in defaults.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};

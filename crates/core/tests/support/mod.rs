//! Shared test helpers for `ballkeeper-core` integration tests.
//!
//! Scripted port fakes let tests decide exactly when and how each remote
//! call completes, so response ordering can be controlled.

#![allow(dead_code)]

pub mod calendar;

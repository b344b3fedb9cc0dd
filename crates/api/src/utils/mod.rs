//! Command plumbing shared by every host command.

pub mod command_helpers;
pub mod logging;

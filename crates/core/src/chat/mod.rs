//! Assistant chat

pub mod ports;
pub mod transcript;

pub use ports::ChatGateway;
pub use transcript::ChatTranscript;

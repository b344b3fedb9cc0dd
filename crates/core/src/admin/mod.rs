//! Admin user management and dashboard

pub mod ports;
pub mod service;

pub use ports::AdminGateway;
pub use service::AdminService;

//! Application layer - Use cases and orchestration
//!
//! Hosts the severity classifier, the forecast aggregator and the report
//! service, plus the port through which weather data is fetched.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

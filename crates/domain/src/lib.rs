//! Domain layer for WeatherGuard
//!
//! Contains the validated weather snapshot, hazard thresholds, severity
//! levels, warnings and forecast timelines. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use entities::*;
pub use errors::{FieldIssue, ValidationError};
pub use value_objects::*;

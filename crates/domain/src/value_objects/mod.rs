//! Value Objects - Immutable, identity-less domain primitives

mod condition_tag;
mod coordinate;
mod severity;
mod thresholds;

pub use condition_tag::{ConditionTag, HazardCategory};
pub use coordinate::{Coordinate, InvalidCoordinates};
pub use severity::Severity;
pub use thresholds::{InvalidThresholds, ThresholdSet};

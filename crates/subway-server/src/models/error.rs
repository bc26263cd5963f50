//! Errors raised by section and chain operations

use thiserror::Error;

use super::StationId;

/// A rejected section operation
///
/// Every check runs before the chain is touched, so a returned error means
/// the chain is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("Section {up} -> {down} is already registered: both stations are on the line")]
    Duplicate { up: String, down: String },

    #[error("Section {up} -> {down} does not connect to the line")]
    Disconnected { up: String, down: String },

    #[error("Section distance {requested} must be shorter than the existing section distance {available}")]
    InvalidDistance { requested: u32, available: u32 },

    #[error("A line must keep at least one section")]
    MinimumChain,

    #[error("Station {0} is not on the line")]
    NotFound(StationId),

    #[error("Line has no sections")]
    EmptyChain,

    #[error("Section cannot start and end at station {0}")]
    SameStation(String),

    #[error("Section distance must be greater than zero")]
    NonPositiveDistance,

    #[error("Merged section distance is too large")]
    DistanceOverflow,
}

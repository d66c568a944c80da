//! Error types.
//!
//! Configuration and data problems abort a run and are surfaced as distinct
//! variants. Unmet demand is not an error; it is reported on the
//! [`Solution`](crate::models::Solution).

use thiserror::Error;

/// Invalid fleet or planner configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("number of max distances ({actual}) must match number of delivery agents ({expected})")]
    MaxDistanceCountMismatch { expected: usize, actual: usize },

    #[error("max distances not set; call set_max_distances before planning")]
    MaxDistancesNotSet,

    #[error("fleet must contain at least one delivery agent")]
    NoAgents,

    #[error("capacity per agent must be positive")]
    ZeroCapacity,

    #[error("min distance {min} cannot be greater than max distance {max}")]
    InvalidDistanceRange { min: f64, max: f64 },

    #[error("bounds must be finite with min <= max")]
    InvalidBounds,

    #[error("invalid planner config: {0}")]
    InvalidConfig(String),
}

/// Failure to load parcel data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access parcel file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed parcel file: {0}")]
    Csv(#[from] csv::Error),

    #[error("no valid parcels found in {source_name}")]
    NoValidParcels { source_name: String },
}

/// Any failure that aborts a planning run.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("planning worker exited without reporting a result")]
    WorkerFailed,
}

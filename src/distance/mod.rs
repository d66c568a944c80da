//! Distance model.
//!
//! Euclidean distances between planar points, precomputed once per run into
//! a dense matrix over the depot and parcel destinations.

mod matrix;

pub use matrix::DistanceMatrix;

use crate::models::Point;

/// Euclidean distance between two points.
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

//! Random instance generation.

use rand::Rng;

use crate::error::ConfigurationError;
use crate::models::{Parcel, Point};

/// Fewest parcels a generated customer orders.
pub const MIN_PARCELS_PER_CUSTOMER: u32 = 1;
/// Most parcels a generated customer orders.
pub const MAX_PARCELS_PER_CUSTOMER: u32 = 5;

/// Axis-aligned rectangle points are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds, rejecting inverted or non-finite ranges.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, ConfigurationError> {
        let finite = [min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x > max_x || min_y > max_y {
            return Err(ConfigurationError::InvalidBounds);
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// The square `[0, side] × [0, side]`.
    pub fn square(side: f64) -> Result<Self, ConfigurationError> {
        Self::new(0.0, side, 0.0, side)
    }

    /// Returns `true` if the point lies inside (edges included).
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x()) && (self.min_y..=self.max_y).contains(&p.y())
    }
}

/// Draws one point uniformly from `bounds`, e.g. a depot location.
pub fn random_point<R: Rng>(rng: &mut R, bounds: &Bounds) -> Point {
    Point::new(
        rng.random_range(bounds.min_x..=bounds.max_x),
        rng.random_range(bounds.min_y..=bounds.max_y),
    )
}

/// Draws `count` points uniformly from `bounds`.
pub fn random_points<R: Rng>(rng: &mut R, count: usize, bounds: &Bounds) -> Vec<Point> {
    (0..count).map(|_| random_point(rng, bounds)).collect()
}

/// Creates `count` customers `C1..Cn` with 1 to 5 parcels each.
///
/// Destinations are taken from `points` in order, wrapping around when
/// there are more customers than points. Returns an empty list if `points`
/// is empty.
///
/// # Examples
///
/// ```
/// use parcel_routing::generate::create_parcels;
/// use parcel_routing::models::Point;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let points = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
/// let parcels = create_parcels(&mut rng, 3, &points);
/// assert_eq!(parcels[2].customer_id(), "C3");
/// assert_eq!(parcels[2].destination(), points[0]);
/// ```
pub fn create_parcels<R: Rng>(rng: &mut R, count: usize, points: &[Point]) -> Vec<Parcel> {
    if points.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let quantity = rng.random_range(MIN_PARCELS_PER_CUSTOMER..=MAX_PARCELS_PER_CUSTOMER);
            Parcel::new(format!("C{}", i + 1), points[i % points.len()], quantity)
        })
        .collect()
}

//! Dense distance matrix.

use crate::models::{Parcel, Point, StopMarker};

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per run over the depot followed by every parcel destination:
/// index 0 is the depot and parcel `k` sits at index `k + 1`. Only
/// locations go in, so the matrix stays valid as quantities are delivered.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::{Parcel, Point};
/// use parcel_routing::distance::DistanceMatrix;
///
/// let parcels = vec![
///     Parcel::new("C1", Point::new(3.0, 4.0), 2),
///     Parcel::new("C2", Point::new(6.0, 8.0), 1),
/// ];
/// let dm = DistanceMatrix::from_locations(Point::new(0.0, 0.0), &parcels);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes the matrix over `{depot} ∪ parcels`.
    pub fn from_locations(depot: Point, parcels: &[Parcel]) -> Self {
        let points: Vec<Point> = std::iter::once(depot)
            .chain(parcels.iter().map(Parcel::destination))
            .collect();
        Self::from_points(&points)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distance of the leg between two stops.
    pub fn leg(&self, from: StopMarker, to: StopMarker) -> f64 {
        self.get(from.matrix_index(), to.matrix_index())
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parcels() -> Vec<Parcel> {
        vec![
            Parcel::new("C1", Point::new(3.0, 4.0), 1),
            Parcel::new("C2", Point::new(0.0, 8.0), 2),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(Point::new(0.0, 0.0), &sample_parcels());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(1, 2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_diagonal_and_symmetric() {
        let dm = DistanceMatrix::from_locations(Point::new(1.5, -2.0), &sample_parcels());
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_depot_only() {
        let dm = DistanceMatrix::from_locations(Point::new(0.0, 0.0), &[]);
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_leg_uses_marker_index() {
        let dm = DistanceMatrix::from_locations(Point::new(0.0, 0.0), &sample_parcels());
        assert_eq!(dm.leg(StopMarker::Depot, StopMarker::Parcel(1)), dm.get(0, 2));
        assert_eq!(dm.leg(StopMarker::Parcel(0), StopMarker::Depot), dm.get(1, 0));
        assert_eq!(dm.leg(StopMarker::Depot, StopMarker::Depot), 0.0);
    }
}

//! Parcel (delivery demand) type.

use super::Point;

/// A customer's parcels awaiting delivery at a fixed destination.
///
/// Parcel records are immutable during planning. Quantities still owed
/// during a run live in a [`DemandLedger`](super::DemandLedger), indexed by
/// the parcel's position in the input list.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::{Parcel, Point};
///
/// let p = Parcel::new("C1", Point::new(41.0, 49.0), 3);
/// assert_eq!(p.customer_id(), "C1");
/// assert_eq!(p.quantity(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    customer_id: String,
    destination: Point,
    quantity: u32,
}

impl Parcel {
    /// Creates a parcel record.
    pub fn new(customer_id: impl Into<String>, destination: Point, quantity: u32) -> Self {
        Self {
            customer_id: customer_id.into(),
            destination,
            quantity,
        }
    }

    /// Customer identity.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Delivery location.
    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Number of parcels ordered by the customer.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Total parcel units across a list of parcels.
pub fn total_units(parcels: &[Parcel]) -> u64 {
    parcels.iter().map(|p| u64::from(p.quantity)).sum()
}

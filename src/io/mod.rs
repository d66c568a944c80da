//! Parcel persistence.

mod parcel_file;

pub use parcel_file::{load_parcels, read_parcels, save_parcels, write_parcels};

//! Delimited parcel file.
//!
//! ```text
//! Customer ID,X,Y,Number of Parcels
//! C1,41.00,49.00,3
//! C2,35.50,17.25,1
//! ```

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::DataError;
use crate::models::{Parcel, Point};

const HEADER: [&str; 4] = ["Customer ID", "X", "Y", "Number of Parcels"];

/// Writes parcels with coordinates rounded to two decimals.
pub fn write_parcels<W: Write>(writer: W, parcels: &[Parcel]) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for parcel in parcels {
        let destination = parcel.destination();
        writer.write_record([
            parcel.customer_id().to_string(),
            format!("{:.2}", destination.x()),
            format!("{:.2}", destination.y()),
            parcel.quantity().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves parcels to `path`, replacing any existing file.
pub fn save_parcels<P: AsRef<Path>>(path: P, parcels: &[Parcel]) -> Result<(), DataError> {
    let path = path.as_ref();
    write_parcels(File::create(path)?, parcels)?;
    info!(path = %path.display(), parcels = parcels.len(), "saved parcels");
    Ok(())
}

/// Reads parcels, skipping the header row.
///
/// Rows that are too short or hold unparsable values are logged and
/// skipped. Fails if no valid row remains.
pub fn read_parcels<R: Read>(reader: R, source_name: &str) -> Result<Vec<Parcel>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut parcels = Vec::new();
    for (row, record) in reader.records().enumerate() {
        // header is line 1
        let line = row + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!(line, error = %e, "skipping unreadable parcel row");
                continue;
            }
        };
        match parse_record(&record) {
            Ok(parcel) => parcels.push(parcel),
            Err(reason) => warn!(line, row = ?record, reason, "skipping invalid parcel row"),
        }
    }

    if parcels.is_empty() {
        return Err(DataError::NoValidParcels {
            source_name: source_name.to_string(),
        });
    }
    Ok(parcels)
}

/// Loads parcels from `path`.
pub fn load_parcels<P: AsRef<Path>>(path: P) -> Result<Vec<Parcel>, DataError> {
    let path = path.as_ref();
    let parcels = read_parcels(File::open(path)?, &path.display().to_string())?;
    info!(path = %path.display(), parcels = parcels.len(), "loaded parcels");
    Ok(parcels)
}

fn parse_record(record: &csv::StringRecord) -> Result<Parcel, &'static str> {
    if record.len() < 4 {
        return Err("expected at least 4 fields");
    }
    let customer_id = &record[0];
    if customer_id.is_empty() {
        return Err("empty customer id");
    }
    let x: f64 = record[1].parse().map_err(|_| "invalid x coordinate")?;
    let y: f64 = record[2].parse().map_err(|_| "invalid y coordinate")?;
    let destination = Point::new(x, y);
    if !destination.is_finite() {
        return Err("coordinates must be finite");
    }
    let quantity: u32 = record[3].parse().map_err(|_| "invalid number of parcels")?;
    Ok(Parcel::new(customer_id, destination, quantity))
}

//! CSV readers for the generated series and the office occupancy inputs.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::comparator::OfficeOccupancyRecord;
use crate::error::{AnalyticsError, Result};
use crate::generator::DailyConsumptionRecord;

/// Loads a generated consumption file.
///
/// # Errors
///
/// `InputNotFound` when the file is absent; `Csv` for any malformed row.
pub fn read_consumption_csv(path: &Path) -> Result<Vec<DailyConsumptionRecord>> {
    read_csv_file(path)
}

/// Loads an office or remote occupancy file.
///
/// # Errors
///
/// `InputNotFound` when the file is absent; `Csv` for any malformed row.
pub fn read_occupancy_csv(path: &Path) -> Result<Vec<OfficeOccupancyRecord>> {
    read_csv_file(path)
}

fn read_csv_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AnalyticsError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => AnalyticsError::Io(e),
    })?;
    if !file.metadata()?.is_file() {
        return Err(AnalyticsError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("\"{}\" is not a regular file", path.display()),
        )));
    }
    let rows = read_csv(file)?;
    debug!(path = %path.display(), rows = rows.len(), "csv loaded");
    Ok(rows)
}

/// Deserializes every row of a headed CSV stream.
///
/// # Errors
///
/// Returns the first row that fails to parse.
pub fn read_csv<T: DeserializeOwned>(reader: impl Read) -> Result<Vec<T>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

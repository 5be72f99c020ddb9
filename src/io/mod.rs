//! CSV import and export.

pub mod export;
pub mod import;

pub use export::{HEADER, export_csv, write_csv};
pub use import::{read_consumption_csv, read_occupancy_csv};

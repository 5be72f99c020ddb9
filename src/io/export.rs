//! CSV export for the generated consumption series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::generator::DailyConsumptionRecord;

/// Column header of the generated consumption file.
pub const HEADER: &str = "Data,Dia_Semana,Mes,Consumo_Total_kWh,PC_HomeOffice_kWh,\
                          Chuveiro_kWh,ArCondicionado_kWh,Geladeira_kWh,Outros_kWh";

/// Exports the series to a CSV file at the given path.
///
/// Writes a header row followed by one data row per day, every numeric
/// column formatted with two decimals.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[DailyConsumptionRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes the series as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[DailyConsumptionRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for r in records {
        wtr.write_record(&[
            r.date.format("%Y-%m-%d").to_string(),
            r.weekday.clone(),
            r.month.to_string(),
            format!("{:.2}", r.total_kwh),
            format!("{:.2}", r.home_office_pc_kwh),
            format!("{:.2}", r.shower_kwh),
            format!("{:.2}", r.air_conditioning_kwh),
            format!("{:.2}", r.fridge_kwh),
            format!("{:.2}", r.other_kwh),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use ecowork::appliances::ProfileParams;
use ecowork::comparator::OfficeOccupancyRecord;
use ecowork::generator::{DailyConsumptionRecord, SeriesGenerator};

/// First day of the default series (2024-01-01).
pub fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// One year of records from the default profiles with the given seed.
pub fn default_year(seed: u64) -> Vec<DailyConsumptionRecord> {
    SeriesGenerator::new(default_start(), 365, ProfileParams::default(), seed).run()
}

/// Unique path under the system temp directory for this test process.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ecowork_it_{}_{name}", std::process::id()))
}

/// One office row.
pub fn office_day(
    day: &str,
    consumption_kwh: f64,
    headcount: u32,
    ac_on: &str,
) -> OfficeOccupancyRecord {
    OfficeOccupancyRecord {
        day: day.to_string(),
        consumption_kwh,
        headcount,
        ac_on: ac_on.to_string(),
    }
}

/// A working week with two inefficient days, one quiet weekend day and
/// one closed day left consuming.
pub fn office_week() -> Vec<OfficeOccupancyRecord> {
    vec![
        office_day("Segunda", 150.0, 20, "Sim"),
        office_day("Terça", 95.0, 50, "Sim"),
        office_day("Quarta", 60.0, 35, "Não"),
        office_day("Quinta", 120.0, 15, "Sim"),
        office_day("Sexta", 70.0, 40, "Não"),
        office_day("Sábado", 8.0, 0, "Não"),
        office_day("Domingo", 18.0, 0, "Não"),
    ]
}

/// Occupancy CSV text for `rows`, in the input column layout.
pub fn occupancy_csv(rows: &[OfficeOccupancyRecord]) -> String {
    let mut out = String::from("dia,consumo_kwh,pessoas_presentes,ar_condicionado_ligado\n");
    for r in rows {
        out.push_str(&format!(
            "{},{},{},{}\n",
            r.day, r.consumption_kwh, r.headcount, r.ac_on
        ));
    }
    out
}

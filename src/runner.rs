//! End-to-end runs behind each binary.
//!
//! Each function takes a validated configuration, performs the whole pass
//! and returns what it produced, so the binaries only parse arguments and
//! report errors.

use std::io::Write;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::comparator::report::{write_banner, write_report};
use crate::comparator::{EfficiencyParams, EfficiencyReport, OfficeOccupancyRecord, analyze};
use crate::config::AnalyticsConfig;
use crate::dashboard::{DashboardParams, DashboardView};
use crate::error::Result;
use crate::generator::{DailyConsumptionRecord, SeriesGenerator};
use crate::io::{export_csv, read_consumption_csv, read_occupancy_csv};

/// What a `generate` pass wrote.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub path: PathBuf,
    /// Master seed actually used, drawn or configured.
    pub seed: u64,
    pub records: Vec<DailyConsumptionRecord>,
}

/// Generates the configured series and writes it to the configured output.
///
/// # Errors
///
/// Returns `AnalyticsError::Io` if the file cannot be written.
pub fn run_generate(cfg: &AnalyticsConfig) -> Result<GenerateOutcome> {
    let mut generator = SeriesGenerator::from_config(&cfg.generator);
    let seed = generator.seed();
    let records = generator.run();

    let path = cfg.generator.output.clone();
    export_csv(&records, &path)?;
    info!(
        path = %path.display(),
        rows = records.len(),
        seed,
        "consumption series written"
    );

    Ok(GenerateOutcome {
        path,
        seed,
        records,
    })
}

/// Loads both occupancy files, writes the banner and report to `out` and
/// returns the analysis together with the office rows for charting.
///
/// # Errors
///
/// `InputNotFound` if either file is absent, in which case nothing is
/// written to `out`; `Csv` for malformed rows; `Io` if writing or
/// flushing `out` fails.
pub fn run_compare<W: Write>(
    cfg: &AnalyticsConfig,
    out: &mut W,
) -> Result<(EfficiencyReport, Vec<OfficeOccupancyRecord>)> {
    let c = &cfg.comparator;
    let office = read_occupancy_csv(&c.office_input)?;
    let remote = read_occupancy_csv(&c.remote_input)?;
    info!(
        office_days = office.len(),
        remote_days = remote.len(),
        "occupancy data loaded"
    );

    let params = EfficiencyParams::from(c);
    write_banner(out, &params, c.max_occupancy)?;

    if let Some(row) = office.iter().find(|r| r.headcount > c.max_occupancy) {
        warn!(
            day = %row.day,
            headcount = row.headcount,
            max = c.max_occupancy,
            "headcount above expected maximum"
        );
    }

    let report = analyze(&office, &params);
    write_report(out, &report)?;
    out.flush()?;
    Ok((report, office))
}

/// Loads the consumption file and computes the dashboard view once.
///
/// # Errors
///
/// `InputNotFound` if the file is absent; `Csv` for malformed rows.
pub fn load_dashboard(
    cfg: &AnalyticsConfig,
) -> Result<(DashboardParams, DashboardView)> {
    let records = read_consumption_csv(&cfg.dashboard.input)?;
    let params = DashboardParams::from(&cfg.dashboard);
    let view = DashboardView::build(&records, &params);
    info!(
        path = %cfg.dashboard.input.display(),
        days = view.summary.days,
        outliers = view.summary.outlier_count,
        "dashboard view built"
    );
    Ok((params, view))
}

//! Aggregates the generated series into dashboard metrics, chart data and advice.

pub mod advice;
/// Chart-ready aggregations of the daily series.
pub mod charts;
pub mod stats;
pub mod summary;

pub use advice::{Advisory, advisories};
pub use charts::{CategoryShare, MonthlyMean, OutlierRecord, SeriesPoint, WeekdayMean};
pub use summary::{DashboardParams, DashboardSummary, DashboardView};

//! Office occupancy vs. remote-work efficiency analysis.

#[cfg(feature = "tui")]
pub mod chart;
pub mod efficiency;
#[cfg(feature = "plot")]
pub mod figure;
pub mod occupancy;
pub mod report;

pub use efficiency::{DayAssessment, DayStatus, EfficiencyParams, EfficiencyReport, analyze, assess_day};
pub use occupancy::OfficeOccupancyRecord;

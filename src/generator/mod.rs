//! Synthetic annual consumption series.

/// Consecutive-day calendar driving the generator.
pub mod calendar;
pub mod record;
pub mod series;

pub use calendar::{Calendar, weekday_pt};
pub use record::DailyConsumptionRecord;
pub use series::SeriesGenerator;

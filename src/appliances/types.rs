//! Appliance categories, seasonal rules and the per-day context handed to profiles.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Calendar information for the day being generated.
///
/// # Fields
/// * `date` - Calendar date
/// * `month` - Month number (1-12)
/// * `weekday` - Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    pub date: NaiveDate,
    pub month: u32,
    pub weekday: Weekday,
}

impl DayContext {
    /// Creates a context for the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            month: date.month(),
            weekday: date.weekday(),
        }
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

/// The single seasonal or weekday adjustment bound to an appliance.
///
/// Each appliance carries exactly one rule, so at most one multiplier is
/// ever applied to a day's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeasonalRule {
    /// Water heating peaks in the southern winter (June to September).
    WinterBoost { min: f64, max: f64 },
    /// Cooling peaks in the southern summer (December to March).
    SummerBoost { min: f64, max: f64 },
    /// Home-office equipment mostly idle on Saturday and Sunday.
    WeekendReduction { min: f64, max: f64 },
    /// No adjustment.
    Flat,
}

impl SeasonalRule {
    /// Returns the multiplier range that applies on `ctx`, if any.
    pub fn multiplier_range(&self, ctx: &DayContext) -> Option<(f64, f64)> {
        match *self {
            Self::WinterBoost { min, max } if (6..=9).contains(&ctx.month) => Some((min, max)),
            Self::SummerBoost { min, max } if ctx.month >= 12 || ctx.month <= 3 => {
                Some((min, max))
            }
            Self::WeekendReduction { min, max } if ctx.is_weekend() => Some((min, max)),
            _ => None,
        }
    }
}

/// Household appliance category tracked by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Appliance {
    Fridge,
    HomeOfficePc,
    Shower,
    AirConditioning,
    Other,
}

impl Appliance {
    /// All categories, in generation order.
    pub const ALL: [Appliance; 5] = [
        Appliance::Fridge,
        Appliance::HomeOfficePc,
        Appliance::Shower,
        Appliance::AirConditioning,
        Appliance::Other,
    ];

    /// Average daily consumption before noise and adjustments (kWh).
    pub fn baseline_kwh(self) -> f64 {
        match self {
            Self::Fridge => 1.5,
            Self::HomeOfficePc => 1.2,
            Self::Shower => 4.0,
            Self::AirConditioning => 0.8,
            Self::Other => 0.5,
        }
    }

    /// Seasonal or weekday adjustment for this category.
    pub fn rule(self) -> SeasonalRule {
        match self {
            Self::Shower => SeasonalRule::WinterBoost { min: 1.2, max: 1.6 },
            Self::AirConditioning => SeasonalRule::SummerBoost { min: 1.5, max: 2.5 },
            Self::HomeOfficePc => SeasonalRule::WeekendReduction { min: 0.1, max: 0.4 },
            Self::Fridge | Self::Other => SeasonalRule::Flat,
        }
    }

    /// Column name in the generated CSV.
    pub fn column(self) -> &'static str {
        match self {
            Self::Fridge => "Geladeira_kWh",
            Self::HomeOfficePc => "PC_HomeOffice_kWh",
            Self::Shower => "Chuveiro_kWh",
            Self::AirConditioning => "ArCondicionado_kWh",
            Self::Other => "Outros_kWh",
        }
    }

    /// Human-readable label used by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fridge => "Geladeira",
            Self::HomeOfficePc => "PC Home Office",
            Self::Shower => "Chuveiro",
            Self::AirConditioning => "Ar Condicionado",
            Self::Other => "Outros",
        }
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::stats::mean;
use crate::appliances::Appliance;
use crate::generator::{DailyConsumptionRecord, weekday_pt};

/// Portuguese month abbreviations, January first.
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// One point of the daily trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub weekday: String,
    pub total_kwh: f64,
    /// Above the peak threshold.
    pub is_outlier: bool,
}

/// A day whose total exceeds the peak threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierRecord {
    pub date: NaiveDate,
    pub weekday: String,
    pub total_kwh: f64,
    /// Amount above the threshold (kWh).
    pub excess_kwh: f64,
}

/// Mean daily consumption of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyMean {
    pub month: u32,
    pub label: &'static str,
    pub mean_kwh: f64,
    pub days: usize,
}

/// Share of the annual consumption attributed to one appliance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub appliance: Appliance,
    pub label: &'static str,
    pub total_kwh: f64,
    /// Percentage of the grand total (0-100).
    pub share_pct: f64,
}

/// Mean daily consumption of one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayMean {
    pub weekday: &'static str,
    pub mean_kwh: f64,
    pub days: usize,
}

/// Daily totals flagged against `threshold`.
pub fn series_points(records: &[DailyConsumptionRecord], threshold: f64) -> Vec<SeriesPoint> {
    records
        .iter()
        .map(|r| SeriesPoint {
            date: r.date,
            weekday: r.weekday.clone(),
            total_kwh: r.total_kwh,
            is_outlier: r.total_kwh > threshold,
        })
        .collect()
}

/// Days strictly above `threshold`, in date order.
pub fn outliers(records: &[DailyConsumptionRecord], threshold: f64) -> Vec<OutlierRecord> {
    records
        .iter()
        .filter(|r| r.total_kwh > threshold)
        .map(|r| OutlierRecord {
            date: r.date,
            weekday: r.weekday.clone(),
            total_kwh: r.total_kwh,
            excess_kwh: r.total_kwh - threshold,
        })
        .collect()
}

/// Mean total per month, for months present in the data.
pub fn monthly_means(records: &[DailyConsumptionRecord]) -> Vec<MonthlyMean> {
    (1..=12u32)
        .filter_map(|month| {
            let totals: Vec<f64> = records
                .iter()
                .filter(|r| r.month == month)
                .map(|r| r.total_kwh)
                .collect();
            if totals.is_empty() {
                return None;
            }
            Some(MonthlyMean {
                month,
                label: MONTH_LABELS[(month - 1) as usize],
                mean_kwh: mean(&totals),
                days: totals.len(),
            })
        })
        .collect()
}

/// Annual consumption split by appliance.
pub fn category_shares(records: &[DailyConsumptionRecord]) -> Vec<CategoryShare> {
    let totals: Vec<(Appliance, f64)> = Appliance::ALL
        .iter()
        .map(|&a| (a, records.iter().map(|r| r.kwh(a)).sum()))
        .collect();
    let grand_total: f64 = totals.iter().map(|&(_, kwh)| kwh).sum();

    totals
        .into_iter()
        .map(|(appliance, total_kwh)| CategoryShare {
            appliance,
            label: appliance.label(),
            total_kwh,
            share_pct: if grand_total > 0.0 {
                100.0 * total_kwh / grand_total
            } else {
                0.0
            },
        })
        .collect()
}

/// Mean total per weekday, Monday first.
pub fn weekday_means(records: &[DailyConsumptionRecord]) -> Vec<WeekdayMean> {
    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    WEEK.iter()
        .filter_map(|&weekday| {
            let totals: Vec<f64> = records
                .iter()
                .filter(|r| r.date.weekday() == weekday)
                .map(|r| r.total_kwh)
                .collect();
            if totals.is_empty() {
                return None;
            }
            Some(WeekdayMean {
                weekday: weekday_pt(weekday),
                mean_kwh: mean(&totals),
                days: totals.len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appliances::DayContext;

    fn record(y: i32, m: u32, d: u32, fridge: f64, shower: f64) -> DailyConsumptionRecord {
        let ctx = DayContext::new(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"));
        DailyConsumptionRecord::from_values(
            &ctx,
            &[(Appliance::Fridge, fridge), (Appliance::Shower, shower)],
        )
    }

    fn sample() -> Vec<DailyConsumptionRecord> {
        vec![
            record(2024, 1, 1, 1.0, 3.0),  // Monday, total 4
            record(2024, 1, 2, 1.0, 5.0),  // Tuesday, total 6
            record(2024, 2, 5, 2.0, 8.0),  // Monday, total 10
            record(2024, 2, 6, 2.0, 18.0), // Tuesday, total 20
        ]
    }

    #[test]
    fn series_flags_points_above_threshold() {
        let points = series_points(&sample(), 10.0);
        assert_eq!(points.len(), 4);
        let flags: Vec<bool> = points.iter().map(|p| p.is_outlier).collect();
        // strictly above: 10.0 itself is not a peak
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn outliers_report_excess() {
        let peaks = outliers(&sample(), 12.5);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].date, NaiveDate::from_ymd_opt(2024, 2, 6).expect("valid date"));
        assert!((peaks[0].excess_kwh - 7.5).abs() < 1e-12);
    }

    #[test]
    fn monthly_means_skip_missing_months() {
        let months = monthly_means(&sample());
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label, "Jan");
        assert_eq!(months[0].mean_kwh, 5.0);
        assert_eq!(months[1].label, "Fev");
        assert_eq!(months[1].mean_kwh, 15.0);
    }

    #[test]
    fn category_shares_sum_to_hundred() {
        let shares = category_shares(&sample());
        assert_eq!(shares.len(), 5);
        let total: f64 = shares.iter().map(|s| s.share_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
        let fridge = shares
            .iter()
            .find(|s| s.appliance == Appliance::Fridge)
            .map(|s| s.share_pct);
        assert_eq!(fridge, Some(15.0));
    }

    #[test]
    fn category_shares_of_empty_series_are_zero() {
        assert!(category_shares(&[]).iter().all(|s| s.share_pct == 0.0));
    }

    #[test]
    fn weekday_means_start_on_monday() {
        let days = weekday_means(&sample());
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].weekday, "Segunda");
        assert_eq!(days[0].mean_kwh, 7.0);
        assert_eq!(days[1].weekday, "Terça");
        assert_eq!(days[1].mean_kwh, 13.0);
    }
}

//! Headline metrics and the precomputed dashboard view.

use std::fmt;

use serde::Serialize;

use super::advice::{Advisory, advisories};
use super::charts::{
    CategoryShare, MonthlyMean, OutlierRecord, SeriesPoint, WeekdayMean, category_shares,
    monthly_means, outliers, series_points, weekday_means,
};
use super::stats::{mean, outlier_threshold, sample_std};
use crate::config::DashboardConfig;
use crate::generator::DailyConsumptionRecord;

/// Tariff, savings and advisory constants used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardParams {
    /// Energy tariff (€/kWh).
    pub tariff_per_kwh: f64,
    /// Share of the annual cost assumed recoverable.
    pub savings_factor: f64,
    /// Standard deviations above the mean that mark a peak day.
    pub outlier_sigma: f64,
    /// Mean shower consumption that triggers the heating advice (kWh/day).
    pub shower_alert_kwh: f64,
    /// Mean AC consumption that triggers the cooling advice (kWh/day).
    pub ac_alert_kwh: f64,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self::from(&DashboardConfig::default())
    }
}

impl From<&DashboardConfig> for DashboardParams {
    fn from(cfg: &DashboardConfig) -> Self {
        Self {
            tariff_per_kwh: cfg.tariff_per_kwh,
            savings_factor: cfg.savings_factor,
            outlier_sigma: cfg.outlier_sigma,
            shower_alert_kwh: cfg.shower_alert_kwh,
            ac_alert_kwh: cfg.ac_alert_kwh,
        }
    }
}

/// Aggregate metrics derived from the loaded series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Days in the series.
    pub days: usize,
    /// Sum of daily totals (kWh).
    pub annual_kwh: f64,
    /// `annual_kwh · tariff` (€).
    pub estimated_cost: f64,
    /// `estimated_cost · savings_factor` (€).
    pub potential_savings: f64,
    /// Mean daily total (kWh).
    pub mean_kwh: f64,
    /// Sample standard deviation of the daily total (kWh).
    pub std_kwh: f64,
    /// `mean + sigma · std` (kWh).
    pub outlier_threshold: f64,
    /// Days strictly above the threshold.
    pub outlier_count: usize,
}

impl DashboardSummary {
    /// Computes every metric from the daily records.
    pub fn from_records(records: &[DailyConsumptionRecord], params: &DashboardParams) -> Self {
        let totals: Vec<f64> = records.iter().map(|r| r.total_kwh).collect();
        let annual_kwh: f64 = totals.iter().sum();
        let estimated_cost = annual_kwh * params.tariff_per_kwh;
        let mean_kwh = mean(&totals);
        let std_kwh = sample_std(&totals);
        let outlier_threshold = outlier_threshold(&totals, params.outlier_sigma);
        let outlier_count = totals.iter().filter(|&&t| t > outlier_threshold).count();

        Self {
            days: records.len(),
            annual_kwh,
            estimated_cost,
            potential_savings: estimated_cost * params.savings_factor,
            mean_kwh,
            std_kwh,
            outlier_threshold,
            outlier_count,
        }
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Resumo do Consumo ({} dias) ---", self.days)?;
        writeln!(f, "Consumo anual:        {:.2} kWh", self.annual_kwh)?;
        writeln!(f, "Custo estimado:       {:.2} €", self.estimated_cost)?;
        writeln!(f, "Poupança potencial:   {:.2} €", self.potential_savings)?;
        writeln!(
            f,
            "Média diária:         {:.2} kWh (desvio {:.2})",
            self.mean_kwh, self.std_kwh
        )?;
        write!(
            f,
            "Limite de picos:      {:.2} kWh ({} dias acima)",
            self.outlier_threshold, self.outlier_count
        )
    }
}

/// Everything the dashboard shows, computed once per session.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub summary: DashboardSummary,
    pub series: Vec<SeriesPoint>,
    pub outliers: Vec<OutlierRecord>,
    pub monthly: Vec<MonthlyMean>,
    pub categories: Vec<CategoryShare>,
    pub weekdays: Vec<WeekdayMean>,
    pub advice: Vec<Advisory>,
}

impl DashboardView {
    /// Builds the complete view from the loaded series.
    pub fn build(records: &[DailyConsumptionRecord], params: &DashboardParams) -> Self {
        let summary = DashboardSummary::from_records(records, params);
        let threshold = summary.outlier_threshold;
        Self {
            series: series_points(records, threshold),
            outliers: outliers(records, threshold),
            monthly: monthly_means(records),
            categories: category_shares(records),
            weekdays: weekday_means(records),
            advice: advisories(records, params),
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::appliances::{Appliance, DayContext};

    fn series(totals: &[f64]) -> Vec<DailyConsumptionRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        totals
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let date = start + chrono::Days::new(i as u64);
                DailyConsumptionRecord::from_values(
                    &DayContext::new(date),
                    &[(Appliance::Other, t)],
                )
            })
            .collect()
    }

    #[test]
    fn cost_and_savings_follow_tariff() {
        let params = DashboardParams {
            tariff_per_kwh: 0.2,
            savings_factor: 0.15,
            ..DashboardParams::default()
        };
        let summary = DashboardSummary::from_records(&series(&[10.0, 20.0, 30.0]), &params);
        assert_eq!(summary.days, 3);
        assert_eq!(summary.annual_kwh, 60.0);
        assert!((summary.estimated_cost - 12.0).abs() < 1e-9);
        assert!((summary.potential_savings - 1.8).abs() < 1e-9);
    }

    #[test]
    fn threshold_matches_mean_plus_two_std() {
        let summary = DashboardSummary::from_records(
            &series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
            &DashboardParams::default(),
        );
        assert_eq!(summary.mean_kwh, 5.0);
        let expected = 5.0 + 2.0 * (32.0_f64 / 7.0).sqrt();
        assert!((summary.outlier_threshold - expected).abs() < 1e-12);
        // 9.0 < 9.276
        assert_eq!(summary.outlier_count, 0);
    }

    #[test]
    fn single_spike_is_counted() {
        let mut totals = vec![5.0; 30];
        totals[12] = 50.0;
        let view = DashboardView::build(&series(&totals), &DashboardParams::default());
        assert_eq!(view.summary.outlier_count, 1);
        assert_eq!(view.outliers.len(), 1);
        assert_eq!(
            view.outliers[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 13).expect("valid date")
        );
        assert_eq!(view.series.iter().filter(|p| p.is_outlier).count(), 1);
    }

    #[test]
    fn empty_series_is_all_zero() {
        let view = DashboardView::build(&[], &DashboardParams::default());
        assert_eq!(view.summary.annual_kwh, 0.0);
        assert_eq!(view.summary.outlier_count, 0);
        assert!(view.series.is_empty());
        assert!(view.monthly.is_empty());
        assert_eq!(view.advice.len(), 2);
    }

    #[test]
    fn summary_display_lists_metrics() {
        let summary =
            DashboardSummary::from_records(&series(&[10.0, 20.0]), &DashboardParams::default());
        let text = summary.to_string();
        assert!(text.contains("Consumo anual:        30.00 kWh"));
        assert!(text.contains("Custo estimado:       4.80 €"));
    }
}

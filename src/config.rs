//! TOML-based configuration for the generator, comparator and dashboard.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration parsed from TOML.
///
/// Every field has a default matching the stock tooling, so an empty file
/// (or no file at all, see [`AnalyticsConfig::load`]) is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Synthetic series generation.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Office vs. remote efficiency analysis.
    #[serde(default)]
    pub comparator: ComparatorConfig,
    /// Dashboard aggregation and HTTP surface.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Synthetic series generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// First generated date (inclusive).
    pub start_date: NaiveDate,
    /// Number of consecutive days to generate (must be > 0).
    pub days: usize,
    /// Master random seed; drawn from OS entropy when absent.
    pub seed: Option<u64>,
    /// Uniform noise band as a fraction of each baseline (0.0-1.0).
    pub noise_fraction: f64,
    /// Per-appliance, per-day probability of an anomalous spike (0.0-1.0).
    pub spike_probability: f64,
    /// Multiplier applied on a spike.
    pub spike_factor: f64,
    /// Destination CSV path.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            days: 365,
            seed: None,
            noise_fraction: 0.15,
            spike_probability: 0.03,
            spike_factor: 3.0,
            output: PathBuf::from(crate::DEFAULT_CONSUMPTION_FILE),
        }
    }
}

/// Office occupancy analysis parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparatorConfig {
    /// Infrastructure consumption expected per person present (kWh/day).
    pub base_per_person_kwh: f64,
    /// Estimated consumption of one remote worker at home (kWh/day).
    pub remote_per_person_kwh: f64,
    /// Accepted margin above the remote estimate (1.25 = +25%).
    pub tolerance_factor: f64,
    /// Consumption above which a closed office is flagged (kWh).
    pub closed_alert_kwh: f64,
    /// Expected maximum occupancy, reported in the banner.
    pub max_occupancy: u32,
    /// Office occupancy CSV.
    pub office_input: PathBuf,
    /// Remote-work baseline CSV.
    pub remote_input: PathBuf,
    /// Two-axis comparison figure written after the report (SVG).
    pub chart_output: PathBuf,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            base_per_person_kwh: 1.33,
            remote_per_person_kwh: 1.2,
            tolerance_factor: 1.25,
            closed_alert_kwh: 10.0,
            max_occupancy: 60,
            office_input: PathBuf::from("data/dados_escritorio.csv"),
            remote_input: PathBuf::from("data/dados_homeoffice.csv"),
            chart_output: PathBuf::from(DEFAULT_CHART_FILE),
        }
    }
}

/// Dashboard aggregation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Energy tariff (€/kWh).
    pub tariff_per_kwh: f64,
    /// Share of the annual cost assumed recoverable (0.0-1.0).
    pub savings_factor: f64,
    /// Standard deviations above the mean that mark a peak day.
    pub outlier_sigma: f64,
    /// Mean shower consumption above which the heating advice fires (kWh/day).
    pub shower_alert_kwh: f64,
    /// Mean air-conditioning consumption above which the cooling advice fires (kWh/day).
    pub ac_alert_kwh: f64,
    /// Generated consumption CSV to load.
    pub input: PathBuf,
    /// Local port for the HTTP server.
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tariff_per_kwh: 0.16,
            savings_factor: 0.15,
            outlier_sigma: 2.0,
            shower_alert_kwh: 4.5,
            ac_alert_kwh: 1.2,
            input: PathBuf::from(crate::DEFAULT_CONSUMPTION_FILE),
            port: 8501,
        }
    }
}

/// Default location of the comparison figure.
pub const DEFAULT_CHART_FILE: &str = "grafico_analise.svg";

/// Longest series the generator accepts (a century of days).
pub const MAX_DAYS: usize = 36_600;

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"generator.days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl AnalyticsConfig {
    /// Loads the file at `path`, or the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let g = &self.generator;
        if g.days == 0 || g.days > MAX_DAYS {
            errors.push(ConfigError::new(
                "generator.days",
                format!("must be in [1, {MAX_DAYS}]"),
            ));
        } else if g
            .start_date
            .checked_add_days(Days::new(g.days as u64 - 1))
            .is_none()
        {
            errors.push(ConfigError::new(
                "generator.days",
                "series runs past the last representable date",
            ));
        }
        if !(0.0..=1.0).contains(&g.noise_fraction) {
            errors.push(ConfigError::new(
                "generator.noise_fraction",
                "must be in [0.0, 1.0]",
            ));
        }
        if !(0.0..=1.0).contains(&g.spike_probability) {
            errors.push(ConfigError::new(
                "generator.spike_probability",
                "must be in [0.0, 1.0]",
            ));
        }
        if !(g.spike_factor.is_finite() && g.spike_factor >= 1.0) {
            errors.push(ConfigError::new("generator.spike_factor", "must be >= 1.0"));
        }
        if g.output.as_os_str().is_empty() {
            errors.push(ConfigError::new("generator.output", "must not be empty"));
        }

        let c = &self.comparator;
        if !(c.base_per_person_kwh.is_finite() && c.base_per_person_kwh > 0.0) {
            errors.push(ConfigError::new(
                "comparator.base_per_person_kwh",
                "must be > 0",
            ));
        }
        if !(c.remote_per_person_kwh.is_finite() && c.remote_per_person_kwh > 0.0) {
            errors.push(ConfigError::new(
                "comparator.remote_per_person_kwh",
                "must be > 0",
            ));
        }
        if !(c.tolerance_factor.is_finite() && c.tolerance_factor >= 1.0) {
            errors.push(ConfigError::new(
                "comparator.tolerance_factor",
                "must be >= 1.0",
            ));
        }
        if !(c.closed_alert_kwh.is_finite() && c.closed_alert_kwh >= 0.0) {
            errors.push(ConfigError::new("comparator.closed_alert_kwh", "must be >= 0"));
        }
        if c.office_input.as_os_str().is_empty() {
            errors.push(ConfigError::new("comparator.office_input", "must not be empty"));
        }
        if c.remote_input.as_os_str().is_empty() {
            errors.push(ConfigError::new("comparator.remote_input", "must not be empty"));
        }
        if c.chart_output.as_os_str().is_empty() {
            errors.push(ConfigError::new("comparator.chart_output", "must not be empty"));
        }

        let d = &self.dashboard;
        if !(d.tariff_per_kwh.is_finite() && d.tariff_per_kwh >= 0.0) {
            errors.push(ConfigError::new("dashboard.tariff_per_kwh", "must be >= 0"));
        }
        if !(0.0..=1.0).contains(&d.savings_factor) {
            errors.push(ConfigError::new(
                "dashboard.savings_factor",
                "must be in [0.0, 1.0]",
            ));
        }
        if !(d.outlier_sigma.is_finite() && d.outlier_sigma > 0.0) {
            errors.push(ConfigError::new("dashboard.outlier_sigma", "must be > 0"));
        }
        if !(d.shower_alert_kwh.is_finite() && d.shower_alert_kwh >= 0.0) {
            errors.push(ConfigError::new("dashboard.shower_alert_kwh", "must be >= 0"));
        }
        if !(d.ac_alert_kwh.is_finite() && d.ac_alert_kwh >= 0.0) {
            errors.push(ConfigError::new("dashboard.ac_alert_kwh", "must be >= 0"));
        }
        if d.input.as_os_str().is_empty() {
            errors.push(ConfigError::new("dashboard.input", "must not be empty"));
        }
        if d.port == 0 {
            errors.push(ConfigError::new("dashboard.port", "must be > 0"));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = AnalyticsConfig::default();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "defaults should be valid: {errors:?}");
    }

    #[test]
    fn defaults_match_stock_constants() {
        let cfg = AnalyticsConfig::default();
        assert_eq!(cfg.generator.days, 365);
        assert_eq!(
            cfg.generator.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
        );
        assert!(cfg.generator.seed.is_none());
        assert_eq!(cfg.comparator.base_per_person_kwh, 1.33);
        assert_eq!(cfg.comparator.remote_per_person_kwh, 1.2);
        assert_eq!(cfg.comparator.closed_alert_kwh, 10.0);
        assert_eq!(cfg.dashboard.savings_factor, 0.15);
    }

    #[test]
    fn load_without_path_uses_defaults() {
        let cfg = AnalyticsConfig::load(None).expect("defaults load");
        assert_eq!(cfg.dashboard.port, 8501);
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[generator]
start_date = "2023-06-01"
days = 30
seed = 7
noise_fraction = 0.1
spike_probability = 0.0
spike_factor = 2.0
output = "out.csv"

[comparator]
base_per_person_kwh = 1.5
remote_per_person_kwh = 1.0
tolerance_factor = 1.1
closed_alert_kwh = 5.0
max_occupancy = 40
office_input = "office.csv"
remote_input = "remote.csv"

[dashboard]
tariff_per_kwh = 0.25
savings_factor = 0.2
outlier_sigma = 3.0
shower_alert_kwh = 5.0
ac_alert_kwh = 1.0
input = "out.csv"
port = 9000
"#;
        let cfg = AnalyticsConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.generator.days), Some(30));
        assert_eq!(cfg.as_ref().and_then(|c| c.generator.seed), Some(7));
        assert_eq!(cfg.as_ref().map(|c| c.comparator.max_occupancy), Some(40));
        assert_eq!(cfg.as_ref().map(|c| c.dashboard.port), Some(9000));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[generator]
seed = 99
"#;
        let cfg = AnalyticsConfig::from_toml_str(toml).expect("partial TOML parses");
        assert_eq!(cfg.generator.seed, Some(99));
        assert_eq!(cfg.generator.days, 365);
        assert_eq!(cfg.dashboard.tariff_per_kwh, 0.16);
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[generator]
days = 10
bogus_field = true
"#;
        assert!(AnalyticsConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_catches_zero_days() {
        let mut cfg = AnalyticsConfig::default();
        cfg.generator.days = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "generator.days"));
    }

    #[test]
    fn validation_catches_bad_probability() {
        let mut cfg = AnalyticsConfig::default();
        cfg.generator.spike_probability = 1.5;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "generator.spike_probability"));
    }

    #[test]
    fn validation_catches_bad_tolerance() {
        let mut cfg = AnalyticsConfig::default();
        cfg.comparator.tolerance_factor = 0.5;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "comparator.tolerance_factor"));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = AnalyticsConfig::from_toml_file(Path::new("/nonexistent/ecowork.toml"))
            .expect_err("missing file should fail");
        assert_eq!(err.field, "config");
        assert!(err.message.contains("cannot read"));
    }

    #[test]
    fn validation_rejects_oversized_days() {
        let mut cfg = AnalyticsConfig::default();
        cfg.generator.days = usize::MAX;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "generator.days"));

        cfg.generator.days = MAX_DAYS;
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn validation_rejects_series_past_last_date() {
        let mut cfg = AnalyticsConfig::default();
        cfg.generator.start_date = NaiveDate::MAX - Days::new(10);
        cfg.generator.days = 11;
        assert!(cfg.validate().is_empty());

        cfg.generator.days = 12;
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "generator.days" && e.message.contains("representable"))
        );
    }

    #[test]
    fn validation_rejects_nan_factors() {
        let toml = r#"
[generator]
spike_factor = nan

[comparator]
base_per_person_kwh = nan
tolerance_factor = nan

[dashboard]
outlier_sigma = nan
"#;
        let cfg = AnalyticsConfig::from_toml_str(toml).expect("nan is valid TOML");
        let fields: Vec<String> = cfg.validate().into_iter().map(|e| e.field).collect();
        for field in [
            "generator.spike_factor",
            "comparator.base_per_person_kwh",
            "comparator.tolerance_factor",
            "dashboard.outlier_sigma",
        ] {
            assert!(fields.iter().any(|f| f == field), "{field} not rejected: {fields:?}");
        }
    }
}

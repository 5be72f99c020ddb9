//! Command-line arguments for the three binaries.
//!
//! Every flag is optional; a flag given on the command line overrides the
//! matching field of the TOML configuration.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, Result};

/// Generate a synthetic year of household appliance consumption.
#[derive(Debug, Parser)]
#[command(name = "generate", version, about, long_about = None)]
pub struct GenerateArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Master random seed (drawn from OS entropy when absent)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output CSV path
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Number of days to generate
    #[arg(long)]
    pub days: Option<usize>,

    /// First day of the series (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
}

impl GenerateArgs {
    /// Loads the configuration and applies the command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Config` if the file is unreadable or the
    /// merged configuration is invalid.
    pub fn resolve(&self) -> Result<AnalyticsConfig> {
        let mut cfg = AnalyticsConfig::load(self.config.as_deref())?;
        let g = &mut cfg.generator;
        if self.seed.is_some() {
            g.seed = self.seed;
        }
        if let Some(out) = &self.out {
            g.output.clone_from(out);
        }
        if let Some(days) = self.days {
            g.days = days;
        }
        if let Some(start) = self.start {
            g.start_date = start;
        }
        validated(cfg)
    }
}

/// Compare office consumption per head against the remote-work baseline.
#[derive(Debug, Parser)]
#[command(name = "compare", version, about, long_about = None)]
pub struct CompareArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Office occupancy CSV
    #[arg(long)]
    pub office: Option<PathBuf>,

    /// Remote-work baseline CSV
    #[arg(long)]
    pub remote: Option<PathBuf>,

    /// Skip the terminal chart
    #[arg(long)]
    pub no_chart: bool,
}

impl CompareArgs {
    /// Loads the configuration and applies the command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Config` if the file is unreadable or the
    /// merged configuration is invalid.
    pub fn resolve(&self) -> Result<AnalyticsConfig> {
        let mut cfg = AnalyticsConfig::load(self.config.as_deref())?;
        if let Some(office) = &self.office {
            cfg.comparator.office_input.clone_from(office);
        }
        if let Some(remote) = &self.remote {
            cfg.comparator.remote_input.clone_from(remote);
        }
        validated(cfg)
    }
}

/// Serve the household consumption dashboard on localhost.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about, long_about = None)]
pub struct DashboardArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Consumption CSV produced by `generate`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Listening port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl DashboardArgs {
    /// Loads the configuration and applies the command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Config` if the file is unreadable or the
    /// merged configuration is invalid.
    pub fn resolve(&self) -> Result<AnalyticsConfig> {
        let mut cfg = AnalyticsConfig::load(self.config.as_deref())?;
        if let Some(input) = &self.input {
            cfg.dashboard.input.clone_from(input);
        }
        if let Some(port) = self.port {
            cfg.dashboard.port = port;
        }
        validated(cfg)
    }
}

fn validated(cfg: AnalyticsConfig) -> Result<AnalyticsConfig> {
    let errors = cfg.validate();
    if errors.is_empty() {
        Ok(cfg)
    } else {
        Err(AnalyticsError::Config(errors))
    }
}

/// Prints an error the way every binary reports it.
///
/// A missing input file gets the fixed user message; anything else is
/// printed as-is.
pub fn report_error(err: &AnalyticsError) {
    if err.is_missing_input() {
        println!("{}", crate::error::MISSING_INPUT_MESSAGE);
        tracing::warn!(%err, "input missing");
    } else {
        eprintln!("error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults_match_config() {
        let args = GenerateArgs::try_parse_from(["generate"]).unwrap();
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.generator.days, 365);
        assert_eq!(cfg.generator.seed, None);
        assert_eq!(
            cfg.generator.output,
            PathBuf::from(crate::DEFAULT_CONSUMPTION_FILE)
        );
    }

    #[test]
    fn generate_flags_override() {
        let args = GenerateArgs::try_parse_from([
            "generate",
            "--seed",
            "7",
            "--out",
            "x.csv",
            "--days",
            "30",
            "--start",
            "2023-06-01",
        ])
        .unwrap();
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.generator.seed, Some(7));
        assert_eq!(cfg.generator.output, PathBuf::from("x.csv"));
        assert_eq!(cfg.generator.days, 30);
        assert_eq!(
            cfg.generator.start_date,
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
    }

    #[test]
    fn generate_zero_days_is_rejected() {
        let args = GenerateArgs::try_parse_from(["generate", "--days", "0"]).unwrap();
        let err = args.resolve().unwrap_err();
        assert!(matches!(err, AnalyticsError::Config(_)));
        assert!(err.to_string().contains("generator.days"));
    }

    #[test]
    fn generate_huge_days_is_rejected() {
        let args = GenerateArgs::try_parse_from([
            "generate",
            "--days",
            "18446744073709551615",
            "--seed",
            "1",
        ])
        .unwrap();
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("generator.days"));
    }

    #[test]
    fn bad_date_fails_to_parse() {
        assert!(GenerateArgs::try_parse_from(["generate", "--start", "2024-13-01"]).is_err());
    }

    #[test]
    fn compare_flags_override() {
        let args = CompareArgs::try_parse_from([
            "compare",
            "--office",
            "a.csv",
            "--remote",
            "b.csv",
            "--no-chart",
        ])
        .unwrap();
        assert!(args.no_chart);
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.comparator.office_input, PathBuf::from("a.csv"));
        assert_eq!(cfg.comparator.remote_input, PathBuf::from("b.csv"));
    }

    #[test]
    fn dashboard_port_override() {
        let args = DashboardArgs::try_parse_from(["dashboard", "--port", "9000"]).unwrap();
        assert_eq!(args.resolve().unwrap().dashboard.port, 9000);

        let args = DashboardArgs::try_parse_from(["dashboard"]).unwrap();
        assert_eq!(args.resolve().unwrap().dashboard.port, 8501);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(DashboardArgs::try_parse_from(["dashboard", "--serve"]).is_err());
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let args =
            CompareArgs::try_parse_from(["compare", "--config", "/nonexistent/ecowork.toml"])
                .unwrap();
        assert!(matches!(args.resolve(), Err(AnalyticsError::Config(_))));
    }
}

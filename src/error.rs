//! Crate-wide error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// User-facing message printed when an expected CSV input is absent.
pub const MISSING_INPUT_MESSAGE: &str =
    "Erro: Ficheiros .csv não encontrados. Verifica o nome e a pasta.";

/// Failures surfaced by the generator, comparator and dashboard.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// An expected input file does not exist.
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The comparison figure could not be drawn or saved.
    #[error("chart error: {0}")]
    Chart(String),

    /// One or more configuration problems, joined for display.
    #[error("{}", join_config_errors(.0))]
    Config(Vec<ConfigError>),
}

impl AnalyticsError {
    /// Returns `true` for the one failure the binaries report with a fixed message.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}

impl From<ConfigError> for AnalyticsError {
    fn from(err: ConfigError) -> Self {
        Self::Config(vec![err])
    }
}

fn join_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

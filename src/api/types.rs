//! API response and query types.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboard::{DashboardParams, DashboardSummary};

/// Headline metrics plus the parameters and source they came from.
#[derive(Debug, Serialize)]
pub struct SummaryResponse<'a> {
    /// Path of the loaded CSV.
    pub source: String,
    pub params: &'a DashboardParams,
    pub summary: &'a DashboardSummary,
}

impl<'a> SummaryResponse<'a> {
    pub fn new(source: &Path, params: &'a DashboardParams, summary: &'a DashboardSummary) -> Self {
        Self {
            source: source.display().to_string(),
            params,
            summary,
        }
    }
}

/// Optional date range for the series endpoint.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// First date (inclusive).
    pub from: Option<NaiveDate>,
    /// Last date (inclusive).
    pub to: Option<NaiveDate>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

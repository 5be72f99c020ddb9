//! Per-day efficiency classification.

use std::fmt;

use tracing::debug;

use super::occupancy::OfficeOccupancyRecord;
use crate::config::ComparatorConfig;

/// Constants driving the office vs. remote comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyParams {
    /// Infrastructure consumption expected per person present (kWh/day).
    pub base_per_person_kwh: f64,
    /// Estimated consumption of one remote worker at home (kWh/day).
    pub remote_per_person_kwh: f64,
    /// Accepted margin above the remote estimate.
    pub tolerance_factor: f64,
    /// Consumption above which a closed office is abnormal (kWh).
    pub closed_alert_kwh: f64,
}

impl Default for EfficiencyParams {
    fn default() -> Self {
        Self {
            base_per_person_kwh: 1.33,
            remote_per_person_kwh: 1.2,
            tolerance_factor: 1.25,
            closed_alert_kwh: 10.0,
        }
    }
}

impl From<&ComparatorConfig> for EfficiencyParams {
    fn from(cfg: &ComparatorConfig) -> Self {
        Self {
            base_per_person_kwh: cfg.base_per_person_kwh,
            remote_per_person_kwh: cfg.remote_per_person_kwh,
            tolerance_factor: cfg.tolerance_factor,
            closed_alert_kwh: cfg.closed_alert_kwh,
        }
    }
}

impl EfficiencyParams {
    /// Highest per-capita office consumption still considered acceptable.
    pub fn acceptable_per_capita_kwh(&self) -> f64 {
        self.remote_per_person_kwh * self.tolerance_factor
    }
}

/// Classification of one office day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Nobody present; `abnormal` when consumption still exceeds the alert level.
    Closed { abnormal: bool },
    Ok,
    Inefficient,
}

impl DayStatus {
    /// Report label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Closed { .. } => "FECHADO",
            Self::Ok => "OK",
            Self::Inefficient => "INEFICIENTE",
        }
    }
}

/// Computed fields for one office day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAssessment {
    /// Source row.
    pub record: OfficeOccupancyRecord,
    pub status: DayStatus,
    /// Variable consumption per person; `None` for closed days.
    pub per_capita_kwh: Option<f64>,
    /// Acceptance threshold the day was compared against (kWh).
    pub threshold_kwh: f64,
    /// Set only for inefficient days.
    pub recommendation: Option<String>,
}

impl fmt::Display for DayAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        match (self.status, self.per_capita_kwh) {
            (DayStatus::Closed { abnormal }, _) => {
                write!(
                    f,
                    "{}: Consumo: {}kWh | Ocupação: {} | Status: {}",
                    r.day,
                    r.consumption_kwh,
                    r.headcount,
                    self.status.label()
                )?;
                if abnormal {
                    write!(f, " ⚠️ Consumo anormal!")?;
                }
                Ok(())
            }
            (status, per_capita) => {
                let marker = if status == DayStatus::Inefficient {
                    " ⚠️"
                } else {
                    ""
                };
                write!(
                    f,
                    "{}: {:3.0}kWh | Per Capita: {:.2}kWh | Ocupação: {:2} | AR: {:3} | Status: {}{}",
                    r.day,
                    r.consumption_kwh,
                    per_capita.unwrap_or_default(),
                    r.headcount,
                    r.ac_on,
                    status.label(),
                    marker
                )
            }
        }
    }
}

/// Classifies a single office day.
///
/// Closed days (nobody present) are only checked against the absolute
/// alert level. Open days subtract the infrastructure baseline for the
/// people present and compare what is left, per person, against
/// [`EfficiencyParams::acceptable_per_capita_kwh`].
///
/// # Examples
///
/// ```
/// use ecowork::comparator::{DayStatus, EfficiencyParams, OfficeOccupancyRecord, assess_day};
///
/// let day = OfficeOccupancyRecord {
///     day: "Segunda".into(),
///     consumption_kwh: 150.0,
///     headcount: 20,
///     ac_on: "Sim".into(),
/// };
/// let assessment = assess_day(&day, &EfficiencyParams::default());
/// assert_eq!(assessment.status, DayStatus::Inefficient);
/// ```
pub fn assess_day(record: &OfficeOccupancyRecord, params: &EfficiencyParams) -> DayAssessment {
    let threshold_kwh = params.acceptable_per_capita_kwh();

    if record.headcount == 0 {
        let abnormal = record.consumption_kwh > params.closed_alert_kwh;
        return DayAssessment {
            record: record.clone(),
            status: DayStatus::Closed { abnormal },
            per_capita_kwh: None,
            threshold_kwh,
            recommendation: None,
        };
    }

    let headcount = f64::from(record.headcount);
    let expected_kwh = headcount * params.base_per_person_kwh;
    let variable_kwh = record.consumption_kwh - expected_kwh;
    let per_capita_kwh = if variable_kwh > 0.0 {
        variable_kwh / headcount
    } else {
        params.base_per_person_kwh
    };

    let (status, recommendation) = if per_capita_kwh > threshold_kwh {
        let text = format!(
            "ALERTA: Na {}, consumo per capita ({:.2}kWh) excede limite aceitável ({:.2}kWh) com {} pessoas. AR: {}",
            record.day, per_capita_kwh, threshold_kwh, record.headcount, record.ac_on
        );
        (DayStatus::Inefficient, Some(text))
    } else {
        (DayStatus::Ok, None)
    };

    DayAssessment {
        record: record.clone(),
        status,
        per_capita_kwh: Some(per_capita_kwh),
        threshold_kwh,
        recommendation,
    }
}

/// Outcome of a full pass over the office rows.
#[derive(Debug, Clone, Default)]
pub struct EfficiencyReport {
    /// One assessment per input row, in input order.
    pub assessments: Vec<DayAssessment>,
    /// Recommendation texts of the inefficient days, in input order.
    pub recommendations: Vec<String>,
}

impl EfficiencyReport {
    /// Number of days classified inefficient.
    pub fn inefficient_days(&self) -> usize {
        self.assessments
            .iter()
            .filter(|a| a.status == DayStatus::Inefficient)
            .count()
    }

    /// Number of closed days that still consumed above the alert level.
    pub fn abnormal_closed_days(&self) -> usize {
        self.assessments
            .iter()
            .filter(|a| a.status == DayStatus::Closed { abnormal: true })
            .count()
    }
}

/// Assesses every office row in order.
pub fn analyze(records: &[OfficeOccupancyRecord], params: &EfficiencyParams) -> EfficiencyReport {
    let mut report = EfficiencyReport::default();
    for record in records {
        let assessment = assess_day(record, params);
        debug!(
            day = %record.day,
            status = assessment.status.label(),
            per_capita_kwh = assessment.per_capita_kwh,
            "office day assessed"
        );
        if let Some(text) = &assessment.recommendation {
            report.recommendations.push(text.clone());
        }
        report.assessments.push(assessment);
    }
    report
}

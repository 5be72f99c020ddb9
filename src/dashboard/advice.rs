//! Templated savings advice driven by mean category consumption.

use serde::Serialize;

use super::stats::mean;
use super::summary::DashboardParams;
use crate::appliances::Appliance;
use crate::generator::DailyConsumptionRecord;

/// One advisory text and the figures that selected it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub appliance: Appliance,
    /// Mean daily consumption of the category (kWh).
    pub mean_kwh: f64,
    /// Alert level the mean was compared against (kWh).
    pub threshold_kwh: f64,
    /// Mean above the alert level.
    pub triggered: bool,
    pub message: String,
}

/// Builds the water-heating and cooling advisories, in that order.
pub fn advisories(records: &[DailyConsumptionRecord], params: &DashboardParams) -> Vec<Advisory> {
    vec![
        advisory(records, Appliance::Shower, params.shower_alert_kwh),
        advisory(records, Appliance::AirConditioning, params.ac_alert_kwh),
    ]
}

fn advisory(
    records: &[DailyConsumptionRecord],
    appliance: Appliance,
    threshold_kwh: f64,
) -> Advisory {
    let values: Vec<f64> = records.iter().map(|r| r.kwh(appliance)).collect();
    let mean_kwh = mean(&values);
    let triggered = mean_kwh > threshold_kwh;
    Advisory {
        appliance,
        mean_kwh,
        threshold_kwh,
        triggered,
        message: message(appliance, triggered, mean_kwh, threshold_kwh),
    }
}

fn message(appliance: Appliance, triggered: bool, mean_kwh: f64, threshold_kwh: f64) -> String {
    match (appliance, triggered) {
        (Appliance::Shower, true) => format!(
            "O chuveiro consome em média {mean_kwh:.2} kWh/dia, acima de {threshold_kwh:.2} kWh. \
             Reduzir o tempo de banho ou instalar aquecimento solar pode baixar a fatura nos meses de inverno."
        ),
        (Appliance::AirConditioning, true) => format!(
            "O ar condicionado consome em média {mean_kwh:.2} kWh/dia, acima de {threshold_kwh:.2} kWh. \
             Ajustar o termóstato para 24°C e limpar os filtros reduz o consumo no verão."
        ),
        (_, true) => format!(
            "{appliance} consome em média {mean_kwh:.2} kWh/dia, acima de {threshold_kwh:.2} kWh."
        ),
        (_, false) => format!(
            "O consumo de {} ({mean_kwh:.2} kWh/dia) está dentro do esperado.",
            appliance.label().to_lowercase()
        ),
    }
}

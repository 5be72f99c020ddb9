//! One day of household consumption.

use chrono::NaiveDate;
use serde::Deserialize;

use super::calendar::weekday_pt;
use crate::appliances::{Appliance, DayContext};

/// Complete record of one generated day.
///
/// Field order and serde names follow the generated CSV layout, so the
/// dashboard can read the file straight back into this type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyConsumptionRecord {
    /// Calendar date.
    #[serde(rename = "Data")]
    pub date: NaiveDate,
    /// Localized weekday name.
    #[serde(rename = "Dia_Semana")]
    pub weekday: String,
    /// Month number (1-12).
    #[serde(rename = "Mes")]
    pub month: u32,
    /// Sum of every category (kWh).
    #[serde(rename = "Consumo_Total_kWh")]
    pub total_kwh: f64,
    #[serde(rename = "PC_HomeOffice_kWh")]
    pub home_office_pc_kwh: f64,
    #[serde(rename = "Chuveiro_kWh")]
    pub shower_kwh: f64,
    #[serde(rename = "ArCondicionado_kWh")]
    pub air_conditioning_kwh: f64,
    #[serde(rename = "Geladeira_kWh")]
    pub fridge_kwh: f64,
    #[serde(rename = "Outros_kWh")]
    pub other_kwh: f64,
}

impl DailyConsumptionRecord {
    /// Builds a record from per-appliance values; the total is derived.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Day the values belong to
    /// * `values` - `(appliance, kWh)` pairs; appliances not listed stay at zero
    pub fn from_values(ctx: &DayContext, values: &[(Appliance, f64)]) -> Self {
        let mut record = Self {
            date: ctx.date,
            weekday: weekday_pt(ctx.weekday).to_string(),
            month: ctx.month,
            total_kwh: 0.0,
            home_office_pc_kwh: 0.0,
            shower_kwh: 0.0,
            air_conditioning_kwh: 0.0,
            fridge_kwh: 0.0,
            other_kwh: 0.0,
        };
        for &(appliance, kwh) in values {
            *record.kwh_mut(appliance) = kwh;
        }
        record.total_kwh = record.category_sum();
        record
    }

    /// Consumption of one appliance category (kWh).
    pub fn kwh(&self, appliance: Appliance) -> f64 {
        match appliance {
            Appliance::Fridge => self.fridge_kwh,
            Appliance::HomeOfficePc => self.home_office_pc_kwh,
            Appliance::Shower => self.shower_kwh,
            Appliance::AirConditioning => self.air_conditioning_kwh,
            Appliance::Other => self.other_kwh,
        }
    }

    fn kwh_mut(&mut self, appliance: Appliance) -> &mut f64 {
        match appliance {
            Appliance::Fridge => &mut self.fridge_kwh,
            Appliance::HomeOfficePc => &mut self.home_office_pc_kwh,
            Appliance::Shower => &mut self.shower_kwh,
            Appliance::AirConditioning => &mut self.air_conditioning_kwh,
            Appliance::Other => &mut self.other_kwh,
        }
    }

    /// Sum of the five category values, in generation order.
    pub fn category_sum(&self) -> f64 {
        Appliance::ALL.iter().map(|&a| self.kwh(a)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_categories() {
        let ctx = DayContext::new(NaiveDate::from_ymd_opt(2024, 3, 2).expect("valid date"));
        let record = DailyConsumptionRecord::from_values(
            &ctx,
            &[
                (Appliance::Fridge, 1.5),
                (Appliance::HomeOfficePc, 0.3),
                (Appliance::Shower, 4.1),
                (Appliance::AirConditioning, 1.9),
                (Appliance::Other, 0.45),
            ],
        );
        assert!((record.total_kwh - 8.25).abs() < 1e-9);
        assert_eq!(record.weekday, "Sábado");
        assert_eq!(record.month, 3);
        assert_eq!(record.kwh(Appliance::Shower), 4.1);
    }

    #[test]
    fn missing_categories_default_to_zero() {
        let ctx = DayContext::new(NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date"));
        let record = DailyConsumptionRecord::from_values(&ctx, &[(Appliance::Other, 0.5)]);
        assert_eq!(record.fridge_kwh, 0.0);
        assert_eq!(record.total_kwh, 0.5);
    }
}

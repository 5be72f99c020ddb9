use serde::Deserialize;

/// One day of office usage, as supplied in the occupancy CSV files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OfficeOccupancyRecord {
    /// Day label (e.g. weekday name).
    #[serde(rename = "dia")]
    pub day: String,
    /// Energy consumed by the office that day (kWh).
    #[serde(rename = "consumo_kwh")]
    pub consumption_kwh: f64,
    /// People present.
    #[serde(rename = "pessoas_presentes")]
    pub headcount: u32,
    /// Whether central air conditioning was on, as written in the file.
    #[serde(rename = "ar_condicionado_ligado")]
    pub ac_on: String,
}

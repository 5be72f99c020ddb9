//! Text report for the efficiency comparison.

use std::io::{self, Write};

use super::efficiency::{EfficiencyParams, EfficiencyReport};

/// Suggestion printed after the alerts when at least one day is inefficient.
pub const FINAL_SUGGESTION: &str = "SUGESTÃO FINAL: Implementar Home Office seletivo nos dias com alertas reduz significativamente custos energéticos.";

/// Printed when no day needed a recommendation.
pub const OPTIMIZED_MESSAGE: &str =
    "O uso energético do escritório está otimizado para a ocupação atual.";

/// Writes the banner with the remote baseline and expected occupancy.
pub fn write_banner<W: Write>(
    w: &mut W,
    params: &EfficiencyParams,
    max_occupancy: u32,
) -> io::Result<()> {
    writeln!(
        w,
        "Consumo estimado por funcionário em Home Office: {:.2} kWh/dia",
        params.remote_per_person_kwh
    )?;
    writeln!(w, "Ocupação máxima esperada: {max_occupancy} pessoas")?;
    writeln!(w)
}

/// Writes one line per assessed day followed by the recommendations.
pub fn write_report<W: Write>(w: &mut W, report: &EfficiencyReport) -> io::Result<()> {
    writeln!(w, "\n--- RELATÓRIO DE EFICIÊNCIA ENERGÉTICA ---")?;
    for assessment in &report.assessments {
        writeln!(w, "{assessment}")?;
    }

    writeln!(w, "\n--- RECOMENDAÇÕES DE SUSTENTABILIDADE ---")?;
    if report.recommendations.is_empty() {
        writeln!(w, "{OPTIMIZED_MESSAGE}")?;
    } else {
        for rec in &report.recommendations {
            writeln!(w, "{rec}")?;
        }
        writeln!(w, "\n{FINAL_SUGGESTION}")?;
    }
    Ok(())
}

//! Two-axis comparison figure saved next to the report.
//!
//! Consumption is drawn as bars against the left kWh axis and headcount as a
//! line against a secondary people axis, over the day labels. Output is SVG
//! so text is written as markup and no system font is needed.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use super::occupancy::OfficeOccupancyRecord;
use crate::error::{AnalyticsError, Result};

/// Figure size in pixels.
pub const FIGURE_SIZE: (u32, u32) = (1000, 600);

/// Figure caption.
pub const CAPTION: &str = "Análise de Sustentabilidade: Consumo Energético vs Ocupação";

const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);
const LINE_COLOR: RGBColor = RGBColor(200, 30, 30);

/// Draws the figure and saves it at `path`.
///
/// # Errors
///
/// Returns `AnalyticsError::Chart` if the figure cannot be drawn or written.
pub fn write_svg(rows: &[OfficeOccupancyRecord], path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    draw(&root, rows).map_err(chart_error)?;
    root.present().map_err(chart_error)?;
    info!(path = %path.display(), days = rows.len(), "comparison figure saved");
    Ok(())
}

/// Draws the figure into an in-memory SVG document.
///
/// # Errors
///
/// Returns `AnalyticsError::Chart` if the figure cannot be drawn.
pub fn render_svg(rows: &[OfficeOccupancyRecord]) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, FIGURE_SIZE).into_drawing_area();
        draw(&root, rows).map_err(chart_error)?;
        root.present().map_err(chart_error)?;
    }
    Ok(svg)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    rows: &[OfficeOccupancyRecord],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let days = rows.len().max(1);
    let kwh_max = rows.iter().map(|r| r.consumption_kwh).fold(0.0, f64::max);
    let people_max = rows.iter().map(|r| f64::from(r.headcount)).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(root)
        .caption(CAPTION, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d((0..days).into_segmented(), 0.0..headroom(kwh_max))?
        .set_secondary_coord((0..days).into_segmented(), 0.0..headroom(people_max));

    let day_label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => rows.get(*i).map(|r| r.day.clone()).unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(days)
        .x_label_formatter(&day_label)
        .x_desc("Dia da Semana")
        .y_desc("Consumo (kWh)")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Pessoas Presentes")
        .draw()?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, r)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), r.consumption_kwh.max(0.0)),
                ],
                BAR_COLOR.mix(0.6).filled(),
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))?
        .label("Consumo (kWh)")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], BAR_COLOR.filled()));

    let headcount: Vec<(SegmentValue<usize>, f64)> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (SegmentValue::CenterOf(i), f64::from(r.headcount)))
        .collect();
    chart
        .draw_secondary_series(LineSeries::new(
            headcount.iter().cloned(),
            LINE_COLOR.stroke_width(2),
        ))?
        .label("Pessoas Presentes")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], LINE_COLOR));
    chart.draw_secondary_series(
        headcount
            .iter()
            .map(|point| Circle::new(point.clone(), 4, LINE_COLOR.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Axis top with 15% headroom; `1.0` when there is nothing to show.
fn headroom(max: f64) -> f64 {
    if max.is_finite() && max > 0.0 {
        max * 1.15
    } else {
        1.0
    }
}

fn chart_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> AnalyticsError {
    AnalyticsError::Chart(err.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn rows() -> Vec<OfficeOccupancyRecord> {
        [("Segunda", 150.0, 20), ("Terça", 95.0, 50), ("Domingo", 18.0, 0)]
            .into_iter()
            .map(|(day, kwh, people)| OfficeOccupancyRecord {
                day: day.to_string(),
                consumption_kwh: kwh,
                headcount: people,
                ac_on: "Sim".to_string(),
            })
            .collect()
    }

    #[test]
    fn svg_has_both_axes_and_day_labels() {
        let svg = render_svg(&rows()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Consumo (kWh)"));
        assert!(svg.contains("Pessoas Presentes"));
        assert!(svg.contains("Segunda"));
        assert!(svg.contains("Domingo"));
        assert!(svg.contains("<rect"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn empty_rows_still_draw() {
        let svg = render_svg(&[]).unwrap();
        assert!(svg.contains("Análise de Sustentabilidade"));
    }

    #[test]
    fn figure_is_written_to_disk() {
        let path = std::env::temp_dir().join(format!(
            "ecowork_figure_{}.svg",
            std::process::id()
        ));
        write_svg(&rows(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Pessoas Presentes"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn unwritable_path_is_chart_error() {
        let err = write_svg(&rows(), Path::new("/nonexistent/dir/figure.svg")).unwrap_err();
        assert!(matches!(err, AnalyticsError::Chart(_)));
    }

    #[test]
    fn headroom_defaults_to_one() {
        assert_eq!(headroom(0.0), 1.0);
        assert_eq!(headroom(f64::NAN), 1.0);
        assert!((headroom(100.0) - 115.0).abs() < 1e-9);
    }
}

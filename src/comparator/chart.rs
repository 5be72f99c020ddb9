//! Terminal chart of office consumption against occupancy.
//!
//! Feature-gated behind `tui`. Consumption is drawn as bars against a kWh
//! axis and headcount as a line against a people axis, both sharing the day
//! labels, and printed inline below the text report.

use std::io::{self, IsTerminal};

use crossterm::style::Stylize;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};
use tracing::info;

use super::occupancy::OfficeOccupancyRecord;

/// Terminal rows reserved for the inline chart.
pub const CHART_HEIGHT: u16 = 22;

/// Chart title.
pub const TITLE: &str = "Análise de Sustentabilidade: Consumo Energético vs Ocupação";

/// Consumption bars color.
pub const CONSUMPTION_COLOR: Color = Color::Blue;
/// Occupancy line color.
pub const OCCUPANCY_COLOR: Color = Color::Red;

/// Draws the chart below the cursor without taking over the screen.
///
/// Does nothing when stdout is not a terminal.
///
/// # Errors
///
/// Returns an `io::Error` if the terminal cannot be queried or drawn to.
pub fn render_inline(rows: &[OfficeOccupancyRecord]) -> io::Result<()> {
    let stdout = io::stdout();
    if !stdout.is_terminal() {
        info!("stdout is not a terminal; skipping chart");
        return Ok(());
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(CHART_HEIGHT),
        },
    )?;
    terminal.draw(|frame| render(frame, rows))?;
    println!();
    println!("\n{}", "Gráfico gerado com sucesso!".green());
    Ok(())
}

/// Renders the full chart into the frame.
pub fn render(frame: &mut Frame, rows: &[OfficeOccupancyRecord]) {
    let outer = Block::default()
        .title(Line::from(format!(" {TITLE} ")).style(Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL);
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    if rows.is_empty() {
        frame.render_widget(Paragraph::new("Sem dados para apresentar."), inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    render_consumption(frame, rows, chunks[0]);
    render_occupancy(frame, rows, chunks[1]);
}

/// Consumption bars, one per day, against the kWh axis.
fn render_consumption(frame: &mut Frame, rows: &[OfficeOccupancyRecord], area: Rect) {
    let data: Vec<(&str, u64)> = rows
        .iter()
        .map(|r| (r.day.as_str(), r.consumption_kwh.max(0.0).round() as u64))
        .collect();

    let bar_width = bar_width(area.width, rows.len());
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Consumo (kWh) ")
                .title_style(Style::default().fg(CONSUMPTION_COLOR))
                .borders(Borders::ALL),
        )
        .data(data.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(CONSUMPTION_COLOR))
        .value_style(Style::default().fg(Color::White).bg(CONSUMPTION_COLOR));

    frame.render_widget(chart, area);
}

/// Headcount line against the people axis.
fn render_occupancy(frame: &mut Frame, rows: &[OfficeOccupancyRecord], area: Rect) {
    let points: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, f64::from(r.headcount)))
        .collect();

    let y_bounds = auto_bounds_y(&points);
    let x_hi = (rows.len().saturating_sub(1) as f64).max(1.0);

    let datasets = vec![
        Dataset::default()
            .name("Ocupação")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(OCCUPANCY_COLOR))
            .data(&points),
    ];

    let x_labels: Vec<String> = rows.iter().map(|r| r.day.clone()).collect();
    let y_labels = vec![
        format!("{:.0}", y_bounds[0]),
        format!("{:.0}", y_bounds[1]),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Pessoas Presentes ")
                .title_style(Style::default().fg(OCCUPANCY_COLOR))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Dia da Semana")
                .bounds([0.0, x_hi])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("pessoas")
                .style(Style::default().fg(OCCUPANCY_COLOR))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Spreads the bars across the available width.
fn bar_width(width: u16, bars: usize) -> u16 {
    let bars = u16::try_from(bars.max(1)).unwrap_or(u16::MAX);
    (width.saturating_sub(2) / bars).saturating_sub(1).clamp(1, 12)
}

/// Computes Y-axis bounds from data points, anchored at zero with 10% headroom.
pub fn auto_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let max = points.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return [0.0, 1.0];
    }
    [0.0, max * 1.1]
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;

    fn rows() -> Vec<OfficeOccupancyRecord> {
        [("Segunda", 120.0, 45), ("Terça", 95.0, 30), ("Sábado", 4.0, 0)]
            .into_iter()
            .map(|(day, kwh, people)| OfficeOccupancyRecord {
                day: day.to_string(),
                consumption_kwh: kwh,
                headcount: people,
                ac_on: "Sim".to_string(),
            })
            .collect()
    }

    fn draw(rows: &[OfficeOccupancyRecord]) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(100, CHART_HEIGHT)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, rows))
            .expect("draw should succeed");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn chart_has_both_axes_titles() {
        let screen = draw(&rows());
        assert!(screen.contains("Consumo (kWh)"));
        assert!(screen.contains("Pessoas Presentes"));
        assert!(screen.contains("Segunda"));
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let screen = draw(&[]);
        assert!(screen.contains("Sem dados"));
    }

    #[test]
    fn bounds_anchor_at_zero() {
        assert_eq!(auto_bounds_y(&[]), [0.0, 1.0]);
        let b = auto_bounds_y(&[(0.0, 10.0), (1.0, 50.0)]);
        assert_eq!(b[0], 0.0);
        assert!((b[1] - 55.0).abs() < 1e-9);
    }

    #[test]
    fn bar_width_is_bounded() {
        assert_eq!(bar_width(100, 3), 12);
        assert_eq!(bar_width(10, 50), 1);
    }

    #[test]
    fn bar_width_survives_more_bars_than_u16() {
        assert_eq!(bar_width(100, 65_536), 1);
        assert_eq!(bar_width(100, usize::MAX), 1);
    }
}

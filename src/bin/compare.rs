//! Compares office consumption per head against the remote-work baseline.

use std::io;
use std::process;

use clap::Parser;

use ecowork::cli::{CompareArgs, report_error};
use ecowork::observability::init_tracing;
use ecowork::runner::run_compare;

fn main() {
    init_tracing();
    let args = CompareArgs::parse();

    let cfg = match args.resolve() {
        Ok(cfg) => cfg,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    println!("Iniciando EcoWork Analytics...");

    let result = {
        let mut stdout = io::stdout().lock();
        run_compare(&cfg, &mut stdout)
    };

    let rows = match result {
        Ok((_report, rows)) => rows,
        // Missing files leave the analysis empty rather than failing the run.
        Err(e) if e.is_missing_input() => {
            report_error(&e);
            return;
        }
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    #[cfg(feature = "plot")]
    match ecowork::comparator::figure::write_svg(&rows, &cfg.comparator.chart_output) {
        Ok(()) => println!(
            "Gráfico guardado em {}",
            cfg.comparator.chart_output.display()
        ),
        Err(e) => tracing::error!(error = %e, "figure rendering failed"),
    }

    #[cfg(feature = "tui")]
    if !args.no_chart {
        if let Err(e) = ecowork::comparator::chart::render_inline(&rows) {
            tracing::error!(error = %e, "chart rendering failed");
        }
    }

    #[cfg(not(any(feature = "plot", feature = "tui")))]
    let _ = rows;
}

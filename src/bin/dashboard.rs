//! Serves the household consumption dashboard on localhost.

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use clap::Parser;

use ecowork::api::{AppState, serve};
use ecowork::cli::{DashboardArgs, report_error};
use ecowork::observability::init_tracing;
use ecowork::runner::load_dashboard;

fn main() {
    init_tracing();
    let args = DashboardArgs::parse();

    let cfg = match args.resolve() {
        Ok(cfg) => cfg,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    let (params, view) = match load_dashboard(&cfg) {
        Ok(loaded) => loaded,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    println!("{}", view.summary);

    let state = Arc::new(AppState {
        source: cfg.dashboard.input.clone(),
        params,
        view,
    });
    let addr = SocketAddr::from(([127, 0, 0, 1], cfg.dashboard.port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(serve(state, addr)) {
        eprintln!("error: dashboard server failed: {e}");
        process::exit(1);
    }
}

//! Writes a synthetic year of household appliance consumption to CSV.

use std::process;

use clap::Parser;

use ecowork::cli::{GenerateArgs, report_error};
use ecowork::observability::init_tracing;
use ecowork::runner::run_generate;

fn main() {
    init_tracing();
    let args = GenerateArgs::parse();

    let outcome = match args.resolve().and_then(|cfg| run_generate(&cfg)) {
        Ok(outcome) => outcome,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    println!(
        "Ficheiro '{}' gerado com {} dias (seed {}).",
        outcome.path.display(),
        outcome.records.len(),
        outcome.seed
    );
}

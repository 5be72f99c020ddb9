//! EcoWork Analytics: synthetic household consumption series, office
//! occupancy efficiency checks and a local consumption dashboard.

pub mod appliances;
#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod comparator;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod io;
pub mod observability;
pub mod runner;

/// Default location of the generated consumption file.
pub const DEFAULT_CONSUMPTION_FILE: &str = "consumo_anual_eletrodomesticos.csv";

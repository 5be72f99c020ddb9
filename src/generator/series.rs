//! Day-by-day generation loop.

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use super::calendar::Calendar;
use super::record::DailyConsumptionRecord;
use crate::appliances::{Appliance, ApplianceProfile, ProfileParams};
use crate::config::{GeneratorConfig, MAX_DAYS};

/// Generates an ordered series of [`DailyConsumptionRecord`]s.
///
/// Each appliance owns an independent RNG seeded from the master seed plus
/// its position in [`Appliance::ALL`], so adding draws to one category never
/// shifts the values of another.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ecowork::appliances::ProfileParams;
/// use ecowork::generator::SeriesGenerator;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let mut generator = SeriesGenerator::new(start, 7, ProfileParams::default(), 42);
/// let rows = generator.run();
/// assert_eq!(rows.len(), 7);
/// ```
pub struct SeriesGenerator {
    start: NaiveDate,
    days: usize,
    seed: u64,
    profiles: Vec<ApplianceProfile>,
}

impl SeriesGenerator {
    /// Creates a generator for `days` consecutive dates from `start`.
    ///
    /// # Arguments
    ///
    /// * `start` - First generated date
    /// * `days` - Number of rows to generate
    /// * `params` - Noise and spike parameters shared by every appliance
    /// * `seed` - Master random seed
    pub fn new(start: NaiveDate, days: usize, params: ProfileParams, seed: u64) -> Self {
        let profiles = Appliance::ALL
            .iter()
            .enumerate()
            .map(|(i, &appliance)| {
                ApplianceProfile::new(appliance, params, seed.wrapping_add(i as u64))
            })
            .collect();
        Self {
            start,
            days,
            seed,
            profiles,
        }
    }

    /// Builds a generator from configuration, drawing a seed when none is set.
    pub fn from_config(cfg: &GeneratorConfig) -> Self {
        let seed = cfg.seed.unwrap_or_else(|| {
            let seed = rand::rng().random::<u64>();
            info!(seed, "no seed configured; drew one from OS entropy");
            seed
        });
        let params = ProfileParams {
            noise_fraction: cfg.noise_fraction,
            spike_probability: cfg.spike_probability,
            spike_factor: cfg.spike_factor,
        };
        Self::new(cfg.start_date, cfg.days, params, seed)
    }

    /// Master seed used by this generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates every day in ascending date order.
    pub fn run(&mut self) -> Vec<DailyConsumptionRecord> {
        info!(
            start = %self.start,
            days = self.days,
            seed = self.seed,
            "generating consumption series"
        );
        let mut records = Vec::with_capacity(self.days.min(MAX_DAYS));
        let profiles = &mut self.profiles;
        Calendar::new(self.start, self.days).run(|ctx| {
            let values: Vec<(Appliance, f64)> = profiles
                .iter_mut()
                .map(|p| (p.appliance, p.daily_kwh(&ctx)))
                .collect();
            let record = DailyConsumptionRecord::from_values(&ctx, &values);
            debug!(date = %record.date, total_kwh = record.total_kwh, "day generated");
            records.push(record);
        });
        records
    }
}

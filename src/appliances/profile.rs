use rand::{Rng, SeedableRng, rngs::StdRng};

use super::types::{Appliance, DayContext};

/// Noise and spike parameters shared by every appliance profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileParams {
    /// Uniform noise band as a fraction of the baseline.
    pub noise_fraction: f64,
    /// Probability of an anomalous spike on any given day.
    pub spike_probability: f64,
    /// Multiplier applied on a spike.
    pub spike_factor: f64,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            noise_fraction: 0.15,
            spike_probability: 0.03,
            spike_factor: 3.0,
        }
    }
}

/// A daily consumption generator for one appliance category.
///
/// `ApplianceProfile` draws a noisy value around the category baseline,
/// applies the category's seasonal rule and occasionally injects a spike so
/// the dashboard has peaks to detect.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ecowork::appliances::{Appliance, ApplianceProfile, DayContext, ProfileParams};
///
/// let mut shower = ApplianceProfile::new(Appliance::Shower, ProfileParams::default(), 42);
/// let july = DayContext::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
/// let kwh = shower.daily_kwh(&july);
/// assert!(kwh >= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ApplianceProfile {
    /// Appliance category this profile generates values for
    pub appliance: Appliance,

    /// Baseline consumption in kWh/day
    pub base_kwh: f64,

    /// Noise and spike parameters
    pub params: ProfileParams,

    /// Random number generator for noise, multipliers and spikes
    rng: StdRng,
}

impl ApplianceProfile {
    /// Creates a profile for `appliance` using its stock baseline.
    ///
    /// # Arguments
    ///
    /// * `appliance` - The category to generate values for
    /// * `params` - Noise band and spike parameters
    /// * `seed` - Random seed for reproducible generation
    pub fn new(appliance: Appliance, params: ProfileParams, seed: u64) -> Self {
        Self::with_baseline(appliance, appliance.baseline_kwh(), params, seed)
    }

    /// Creates a profile with an explicit baseline (kWh/day).
    pub fn with_baseline(
        appliance: Appliance,
        base_kwh: f64,
        params: ProfileParams,
        seed: u64,
    ) -> Self {
        Self {
            appliance,
            base_kwh: base_kwh.max(0.0),
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates the consumption for one day.
    ///
    /// The value is computed as:
    /// - the baseline plus uniform noise within `±noise_fraction · base`
    /// - times the seasonal multiplier, when the category rule matches `ctx`
    /// - times `spike_factor` with probability `spike_probability`
    ///
    /// The result is guaranteed to be non-negative.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Calendar context of the day being generated
    ///
    /// # Returns
    ///
    /// Consumption in kWh for the day
    pub fn daily_kwh(&mut self, ctx: &DayContext) -> f64 {
        let band = self.params.noise_fraction * self.base_kwh;
        let mut kwh = self.base_kwh + self.rng.random_range(-band..=band);

        if let Some((min, max)) = self.appliance.rule().multiplier_range(ctx) {
            kwh *= self.rng.random_range(min..=max);
        }

        if self.rng.random::<f64>() < self.params.spike_probability {
            kwh *= self.params.spike_factor;
        }

        kwh.max(0.0) // no negative consumption
    }
}

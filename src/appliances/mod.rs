//! Household appliance categories and their daily consumption profiles.

/// Seeded per-appliance consumption generator.
pub mod profile;
pub mod types;

// Re-export the main types for convenience
pub use profile::{ApplianceProfile, ProfileParams};
pub use types::{Appliance, DayContext, SeasonalRule};

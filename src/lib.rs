#[forbid(unsafe_code)]
mod constants;
pub mod conversion;
pub mod csv;
mod error;
pub mod market;
mod model;
pub mod observations;
pub mod report;
pub mod sensitivity;

pub use constants::*;
pub use conversion::{
    annualize, car_equivalent, co2_equivalent, fee, leakage_percentage, mass_to_volume,
    social_cost, volume_to_mass, GasQuantity,
};
pub use error::{Error, Result};
pub use market::{cost_per_heat_unit, cost_per_heat_unit_annual, household_equivalent};
pub use model::*;
pub use observations::{load_observations, load_state_totals, StateTotals};
pub use report::Report;
pub use sensitivity::{fee_schedule_sensitivity, sweep, SensitivityTable};

//! Conversions between a leak rate and comparable quantities.
use serde::{Deserialize, Serialize};

use crate::error::{non_negative, ratio};
use crate::Result;

/// Returns the tons per year of a rate in tons per hour, for a year of `hours_per_year`.
pub fn annualize(rate_tons_per_hour: f64, hours_per_year: f64) -> Result<f64> {
    Ok(non_negative(rate_tons_per_hour, "rate")? * hours_per_year)
}

/// Returns the dollars per year charged by a fee of `fee_rate_per_ton` (USD / ton CH4).
pub fn fee(tons_per_year: f64, fee_rate_per_ton: f64) -> Result<f64> {
    Ok(non_negative(tons_per_year, "tons per year")? * fee_rate_per_ton)
}

/// Returns the social cost in dollars per year, for a cost of `cost_rate_per_ton` (USD / ton CH4).
pub fn social_cost(tons_per_year: f64, cost_rate_per_ton: f64) -> Result<f64> {
    fee(tons_per_year, cost_rate_per_ton)
}

/// Returns the million metric tons of CO2e of `tons_per_year` of CH4 with a given `gwp`.
pub fn co2_equivalent(tons_per_year: f64, gwp: f64) -> Result<f64> {
    Ok(non_negative(tons_per_year, "tons per year")? * gwp / 1e6)
}

/// Returns the number of typical passenger vehicles emitting `co2e_million_tons` per year.
pub fn car_equivalent(co2e_million_tons: f64, tons_co2_per_car: f64) -> Result<f64> {
    ratio(
        non_negative(co2e_million_tons, "CO2e")? * 1e6,
        tons_co2_per_car,
        "tons of CO2 per car",
    )
}

/// A quantity of natural gas, either as energy or as volume
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum GasQuantity {
    Terajoules(f64),
    /// million cubic feet
    Mmcf(f64),
}

/// Returns the million cubic feet of `quantity`, converting energy with `mmcf_per_terajoule`.
pub fn to_volume(quantity: GasQuantity, mmcf_per_terajoule: f64) -> f64 {
    match quantity {
        GasQuantity::Terajoules(tj) => tj * mmcf_per_terajoule,
        GasQuantity::Mmcf(mmcf) => mmcf,
    }
}

/// Returns the mass, in million metric tons, of `quantity` of natural gas with a mass `density`
/// (kg/m3).
/// mmcf -> ft3 (x1e6) -> m3 (x`cubic_meters_per_cubic_foot`) -> kg (x`density`) -> Mt (/1e9)
pub fn volume_to_mass(
    quantity: GasQuantity,
    mmcf_per_terajoule: f64,
    cubic_meters_per_cubic_foot: f64,
    density: f64,
) -> Result<f64> {
    let mmcf = non_negative(to_volume(quantity, mmcf_per_terajoule), "volume")?;
    let cubic_meters = mmcf * 1e6 * cubic_meters_per_cubic_foot;
    Ok(cubic_meters * density / 1e9)
}

/// The inverse of [`volume_to_mass`]: returns the million cubic feet of `mass_mt` million
/// metric tons of natural gas.
pub fn mass_to_volume(
    mass_mt: f64,
    cubic_meters_per_cubic_foot: f64,
    density: f64,
) -> Result<f64> {
    let cubic_meters = ratio(mass_mt * 1e9, density, "density")?;
    let cubic_feet = ratio(
        cubic_meters,
        cubic_meters_per_cubic_foot,
        "cubic meters per cubic foot",
    )?;
    Ok(cubic_feet / 1e6)
}

/// Returns `reported_leak_mass` as a percentage of `total_production_mass`.
pub fn leakage_percentage(reported_leak_mass: f64, total_production_mass: f64) -> Result<f64> {
    Ok(100.0 * ratio(reported_leak_mass, total_production_mass, "production")?)
}

/// Returns by how much (in percent) `co2e_mt` increases a CO2 inventory of `total_mt`.
pub fn state_increase_percent(co2e_mt: f64, total_mt: f64) -> Result<f64> {
    Ok(100.0 * (ratio(co2e_mt + total_mt, total_mt, "state CO2 total")? - 1.0))
}

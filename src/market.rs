use crate::error::{non_negative, ratio};
use crate::{HeatChain, Residential, Result};

/// Returns the mmbtu of natural gas that contain `kg_ch4` kg of CH4:
/// kg CH4 -> kg natural gas -> m3 -> ft3 -> Mcf -> mmbtu
pub fn methane_to_mmbtu(kg_ch4: f64, chain: &HeatChain) -> Result<f64> {
    let kg_gas = ratio(kg_ch4, chain.methane_mass_fraction, "methane mass fraction")?;
    let cubic_meters = ratio(kg_gas, chain.density, "density")?;
    let cubic_feet = ratio(
        cubic_meters,
        chain.cubic_meters_per_cubic_foot,
        "cubic meters per cubic foot",
    )?;
    Ok(cubic_feet / 1000.0 * chain.mmbtu_per_mcf)
}

/// Returns the market value in USD/hour of a leak of `emission_rate_kg_per_hr` of CH4 sold at
/// `price_per_mmbtu`.
pub fn cost_per_heat_unit(
    emission_rate_kg_per_hr: f64,
    chain: &HeatChain,
    price_per_mmbtu: f64,
) -> Result<f64> {
    let rate = non_negative(emission_rate_kg_per_hr, "rate")?;
    Ok(methane_to_mmbtu(rate, chain)? * price_per_mmbtu)
}

/// Same as [`cost_per_heat_unit`], in USD/year.
pub fn cost_per_heat_unit_annual(
    emission_rate_kg_per_hr: f64,
    chain: &HeatChain,
    price_per_mmbtu: f64,
    hours_per_year: f64,
) -> Result<f64> {
    Ok(cost_per_heat_unit(emission_rate_kg_per_hr, chain, price_per_mmbtu)? * hours_per_year)
}

/// Returns the kg of natural gas consumed per hour by a typical household of the region.
pub fn household_consumption_kg_per_hr(
    residential: &Residential,
    chain: &HeatChain,
    hours_per_year: f64,
) -> Result<f64> {
    let households = ratio(
        residential.population,
        residential.persons_per_household,
        "persons per household",
    )?;
    let kg_per_year = residential.consumption_mmcf_per_year
        * 1e6
        * chain.cubic_meters_per_cubic_foot
        * chain.density;
    let kg_per_household = ratio(kg_per_year, households, "population")?;
    ratio(kg_per_household, hours_per_year, "hours per year")
}

/// Returns the number of typical households whose natural gas consumption equals a leak of
/// `emission_rate_kg_per_hr` of CH4.
pub fn household_equivalent(
    emission_rate_kg_per_hr: f64,
    residential: &Residential,
    chain: &HeatChain,
    hours_per_year: f64,
) -> Result<f64> {
    let rate = non_negative(emission_rate_kg_per_hr, "rate")?;
    let kg_gas = ratio(rate, chain.methane_mass_fraction, "methane mass fraction")?;
    let household = household_consumption_kg_per_hr(residential, chain, hours_per_year)?;
    ratio(kg_gas, household, "household consumption")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Constants, Error};

    #[test]
    fn mmbtu_chain() {
        let chain = HeatChain {
            methane_mass_fraction: 1.0,
            density: 1.0,
            cubic_meters_per_cubic_foot: 1.0,
            mmbtu_per_mcf: 1.0,
        };
        assert_eq!(methane_to_mmbtu(1000.0, &chain).unwrap(), 1.0);
        assert_eq!(cost_per_heat_unit(1000.0, &chain, 3.0).unwrap(), 3.0);
        assert_eq!(
            cost_per_heat_unit_annual(1000.0, &chain, 3.0, 8760.0).unwrap(),
            3.0 * 8760.0
        );
    }

    #[test]
    fn value_scales_with_price() {
        let constants = Constants::default();
        let chain = constants.heat_chain();
        let low = cost_per_heat_unit(35_000.0, &chain, 3.0).unwrap();
        let high = cost_per_heat_unit(35_000.0, &chain, 6.0).unwrap();
        assert!((high / low - 2.0).abs() < 1e-12);
        // ~ 35 t CH4/h is ~ 1.8 thousand mmbtu/h
        assert!(low > 5_000.0 && low < 6_000.0);
    }

    #[test]
    fn zero_population() {
        let constants = Constants::default();
        let residential = Residential {
            population: 0.0,
            ..Default::default()
        };
        let r = household_equivalent(35_000.0, &residential, &constants.heat_chain(), 8760.0);
        assert!(matches!(
            r,
            Err(Error::UndefinedRatio { what: "population" })
        ));
    }

    #[test]
    fn households() {
        let constants = Constants::default();
        let chain = constants.heat_chain();
        let one = household_consumption_kg_per_hr(&constants.residential, &chain, 8760.0).unwrap();
        let leak = one * chain.methane_mass_fraction;
        let r = household_equivalent(leak, &constants.residential, &chain, 8760.0).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
        assert_eq!(
            household_equivalent(0.0, &constants.residential, &chain, 8760.0).unwrap(),
            0.0
        );
    }
}

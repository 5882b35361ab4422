use std::collections::HashMap;

use serde::Deserialize;

use crate::{EmissionObservation, Fact, Result};

static OBSERVATIONS: &[u8] = include_bytes!("observations.csv");
static STATE_CO2: &[u8] = include_bytes!("state_co2.csv");

#[derive(Deserialize)]
struct ObservationRecord {
    year: i32,
    rate_tons_per_hour: f64,
    source: String,
    date: String,
}

#[derive(Deserialize)]
struct StateRecord {
    year: i32,
    total_mt: f64,
    source: String,
    date: String,
}

/// Utah energy-related CO2 emissions (million metric tons) per year
pub type StateTotals = HashMap<i32, Fact<f64>>;

/// Parses a table of observations with columns `year,rate_tons_per_hour,source,date`,
/// keeping the order of the rows.
/// # Error
/// Errors if the table is not valid
pub fn parse_observations(data: &[u8]) -> Result<Vec<Fact<EmissionObservation>>> {
    Ok(crate::csv::deserialize::<ObservationRecord>(data)?
        .into_iter()
        .map(|r| Fact {
            claim: EmissionObservation {
                year: r.year,
                rate_tons_per_hour: r.rate_tons_per_hour,
            },
            source: r.source,
            date: r.date,
        })
        .collect())
}

/// Returns the basin's reported emission rates in chronological order, from `src/observations.csv`.
pub fn load_observations() -> Result<Vec<Fact<EmissionObservation>>> {
    parse_observations(OBSERVATIONS)
}

/// Returns Utah's CO2 inventory per year, from `src/state_co2.csv`.
pub fn load_state_totals() -> Result<StateTotals> {
    Ok(crate::csv::deserialize::<StateRecord>(STATE_CO2)?
        .into_iter()
        .map(|r| (r.year, Fact::new(r.total_mt, r.source, r.date)))
        .collect())
}

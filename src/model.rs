use serde::{Deserialize, Serialize};

/// A claim together with where it comes from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fact<R> {
    pub claim: R,
    pub source: String,
    pub date: String,
}

impl<R> Fact<R> {
    pub fn new(claim: R, source: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            claim,
            source: source.into(),
            date: date.into(),
        }
    }
}

/// A reported methane emission rate of the basin in a given year
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EmissionObservation {
    pub year: i32,
    /// metric tons of CH4 per hour
    pub rate_tons_per_hour: f64,
}

impl EmissionObservation {
    /// The rate in kg CH4 per hour
    pub fn rate_kg_per_hour(&self) -> f64 {
        self.rate_tons_per_hour * 1000.0
    }
}

/// A named value in USD per metric ton of CH4 (a fee schedule or a social cost)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Schedule {
    pub name: String,
    pub usd_per_ton: f64,
}

impl Schedule {
    pub fn new(name: impl Into<String>, usd_per_ton: f64) -> Self {
        Self {
            name: name.into(),
            usd_per_ton,
        }
    }
}

//! Physical and economic constants used across the calculation.
//!
//! All of them are literals transcribed from public reports. They are collected in
//! [`Constants`], which can be partially overridden from JSON via [`Constants::from_json`].
use serde::{Deserialize, Serialize};

use crate::{Result, Schedule};

/// The number of days in a year used to annualize hourly rates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum YearConvention {
    /// 365 days, 8760 hours
    #[default]
    Calendar,
    /// 365.25 days, 8766 hours
    Julian,
}

impl YearConvention {
    pub fn days(&self) -> f64 {
        match self {
            Self::Calendar => 365.0,
            Self::Julian => 365.25,
        }
    }

    pub fn hours(&self) -> f64 {
        24.0 * self.days()
    }
}

/// Global warming potentials of CH4
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GwpSet {
    /// IPCC AR5, WG1 chapter 8, p. 73
    /// https://www.ipcc.ch/site/assets/uploads/2018/02/WG1AR5_Chapter08_FINAL.pdf
    Ar5,
    /// IPCC AR6, WG1 chapter 7, table 7.15 (fossil CH4)
    Ar6,
    Custom { gwp20: f64, gwp100: f64 },
}

impl Default for GwpSet {
    fn default() -> Self {
        Self::Ar6
    }
}

impl GwpSet {
    pub fn gwp20(&self) -> f64 {
        match self {
            Self::Ar5 => 84.0,
            Self::Ar6 => 82.5,
            Self::Custom { gwp20, .. } => *gwp20,
        }
    }

    pub fn gwp100(&self) -> f64 {
        match self {
            Self::Ar5 => 28.0,
            Self::Ar6 => 29.8,
            Self::Custom { gwp100, .. } => *gwp100,
        }
    }

    pub fn get(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::Twenty => self.gwp20(),
            Horizon::Hundred => self.gwp100(),
        }
    }
}

/// The time horizon of a global warming potential
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    Twenty,
    Hundred,
}

impl Horizon {
    pub fn years(&self) -> u32 {
        match self {
            Self::Twenty => 20,
            Self::Hundred => 100,
        }
    }
}

/// Mass density of natural gas in kg/m3
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GasDensity {
    /// Union of Concerned Scientists, 0.678 kg/m3 (specific volume of 1.474 m3/kg)
    /// https://www.ucsusa.org/sites/default/files/attach/2015/03/climate-risks-of-natural-gas-fugitive-methane-emissions_methodology.pdf
    Ucs,
    /// 0.713 kg/m3, used with EIA production volumes
    Eia,
    /// https://www.unitrove.com/engineering/tools/gas/natural-gas-density at 15C and 96.5% CH4
    #[serde(rename = "unitrove15c")]
    Unitrove15C,
    /// https://www.unitrove.com/engineering/tools/gas/natural-gas-density at 21C and 96.5% CH4
    #[serde(rename = "unitrove21c")]
    Unitrove21C,
    Custom(f64),
}

impl Default for GasDensity {
    fn default() -> Self {
        Self::Eia
    }
}

impl GasDensity {
    pub fn kg_per_cubic_meter(&self) -> f64 {
        match self {
            Self::Ucs => 0.678,
            Self::Eia => 0.713,
            Self::Unitrove15C => 0.712,
            Self::Unitrove21C => 0.698,
            Self::Custom(density) => *density,
        }
    }
}

/// Residential consumption of natural gas in the region around the basin
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Residential {
    /// Total residential consumption, in million cubic feet per year.
    /// Utah 2020, approximately, from https://www.eia.gov/dnav/ng/ng_cons_sum_dcu_SUT_a.htm
    pub consumption_mmcf_per_year: f64,
    /// Utah 2020 census
    pub population: f64,
    /// https://www.census.gov/quickfacts/UT
    pub persons_per_household: f64,
}

impl Default for Residential {
    fn default() -> Self {
        Self {
            consumption_mmcf_per_year: 72_000.0,
            population: 3_271_616.0,
            persons_per_household: 3.12,
        }
    }
}

/// Russian production and reported leakage in 2013, used as a benchmark.
/// https://www.washingtonpost.com/climate-environment/interactive/2021/russia-greenhouse-gas-emissions/
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RussianReports {
    /// https://www.iea.org/countries/russia
    pub production_terajoules: f64,
    /// 2021 report, in million metric tons CH4
    pub low_mt: f64,
    /// 2015 report, in million metric tons CH4
    pub high_mt: f64,
}

impl Default for RussianReports {
    fn default() -> Self {
        Self {
            production_terajoules: 25_786_288.0,
            low_mt: 5.0,
            high_mt: 33.0,
        }
    }
}

/// All constants of the calculation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Constants {
    pub year: YearConvention,
    pub gwp: GwpSet,
    pub density: GasDensity,
    /// million cubic feet per terajoule
    pub mmcf_per_terajoule: f64,
    pub cubic_meters_per_cubic_foot: f64,
    /// kg CH4 per kg of natural gas
    pub methane_mass_fraction: f64,
    /// heat content of natural gas, in mmbtu per thousand cubic feet.
    /// https://www.eia.gov/tools/faqs/faq.php?id=45&t=8
    pub mmbtu_per_mcf: f64,
    /// A typical passenger vehicle emits 4.6 tons of CO2/yr.
    /// https://www.epa.gov/greenvehicles/greenhouse-gas-emissions-typical-passenger-vehicle
    pub tons_co2_per_car: f64,
    /// Cars and trucks registered in Utah in 2021.
    /// https://tax.utah.gov/econstats/mv/registrations
    pub registered_vehicles: f64,
    /// Methane fee of the reconciliation bill, per year of enactment
    pub fees: Vec<Schedule>,
    pub social_costs: Vec<Schedule>,
    /// Henry hub prices
    pub gas_prices_usd_per_mmbtu: Vec<f64>,
    /// The leak rate whose market value is reported
    pub reference_leak_kg_per_hour: f64,
    /// Leak rates, in percent of production, swept by the fee sensitivity table
    pub sensitivity_leak_rates: Vec<f64>,
    pub residential: Residential,
    pub russia: RussianReports,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            year: YearConvention::default(),
            gwp: GwpSet::default(),
            density: GasDensity::default(),
            mmcf_per_terajoule: 0.94781712,
            cubic_meters_per_cubic_foot: 0.0283168,
            methane_mass_fraction: 0.965,
            mmbtu_per_mcf: 1.037,
            tons_co2_per_car: 4.6,
            registered_vehicles: 2_700_000.0,
            fees: vec![
                Schedule::new("2024", 900.0),
                Schedule::new("2025", 1200.0),
                Schedule::new("2026", 1500.0),
            ],
            social_costs: vec![
                Schedule::new("low", 1000.0),
                Schedule::new("high", 1500.0),
            ],
            gas_prices_usd_per_mmbtu: vec![3.0, 6.0],
            reference_leak_kg_per_hour: 35_000.0,
            sensitivity_leak_rates: (0..=10).map(|x| x as f64).collect(),
            residential: Residential::default(),
            russia: RussianReports::default(),
        }
    }
}

impl Constants {
    /// Returns [`Constants`] whose fields present in `data` (a JSON object) are overridden.
    /// # Error
    /// Errors if `data` is not a valid JSON object of constants
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn hours_per_year(&self) -> f64 {
        self.year.hours()
    }

    pub fn density_kg_per_cubic_meter(&self) -> f64 {
        self.density.kg_per_cubic_meter()
    }

    /// The chain of ratios between a mass of CH4 and its heat content
    pub fn heat_chain(&self) -> HeatChain {
        HeatChain {
            methane_mass_fraction: self.methane_mass_fraction,
            density: self.density_kg_per_cubic_meter(),
            cubic_meters_per_cubic_foot: self.cubic_meters_per_cubic_foot,
            mmbtu_per_mcf: self.mmbtu_per_mcf,
        }
    }
}

/// Ratios used to convert kg of CH4 into mmbtu of natural gas
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HeatChain {
    /// kg CH4 / kg natural gas
    pub methane_mass_fraction: f64,
    /// kg / m3
    pub density: f64,
    /// m3 / ft3
    pub cubic_meters_per_cubic_foot: f64,
    /// mmbtu / Mcf
    pub mmbtu_per_mcf: f64,
}

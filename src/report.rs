//! Computes every derived quantity of the basin's observations and renders them.
use itertools::Itertools;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::conversion::*;
use crate::error::ratio;
use crate::market::*;
use crate::observations::{load_observations, load_state_totals, StateTotals};
use crate::sensitivity::{fee_schedule_sensitivity, SensitivityTable};
use crate::{Constants, EmissionObservation, Fact, Horizon, Result, Schedule};

static TEMPLATE: &str = include_str!("report_template.md");
static TEMPLATE_NAME: &str = "t";

/// An amount in USD per year under a named schedule
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Amount {
    pub schedule: Schedule,
    pub usd_per_year: f64,
}

/// The CO2 equivalent of an observation under one GWP horizon
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Equivalence {
    pub horizon: Horizon,
    pub gwp: f64,
    /// million metric tons of CO2e per year
    pub co2e_mt: f64,
    /// number of typical passenger vehicles
    pub cars: f64,
    /// `cars` as a percentage of the state's registered vehicles
    pub fleet_percent: f64,
    /// increase of the state's CO2 inventory of the same year, in percent
    pub state_increase_percent: Option<f64>,
}

/// The market value of a leak at a given price of gas
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MarketValue {
    pub emission_rate_kg_per_hr: f64,
    pub price_usd_per_mmbtu: f64,
    pub usd_per_hour: f64,
    pub usd_per_year: f64,
}

impl MarketValue {
    pub fn new(emission_rate_kg_per_hr: f64, price: f64, constants: &Constants) -> Result<Self> {
        let chain = constants.heat_chain();
        Ok(Self {
            emission_rate_kg_per_hr,
            price_usd_per_mmbtu: price,
            usd_per_hour: cost_per_heat_unit(emission_rate_kg_per_hr, &chain, price)?,
            usd_per_year: cost_per_heat_unit_annual(
                emission_rate_kg_per_hr,
                &chain,
                price,
                constants.hours_per_year(),
            )?,
        })
    }

    pub fn line(&self) -> String {
        format!(
            "Leakage of {} kg CH4/hr is worth ${}/hr (${}/yr) at ${:.2}/mmbtu",
            int(self.emission_rate_kg_per_hr),
            int(self.usd_per_hour),
            int(self.usd_per_year),
            self.price_usd_per_mmbtu,
        )
    }
}

/// All quantities derived from a single observation
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ObservationReport {
    pub observation: Fact<EmissionObservation>,
    pub tons_per_year: f64,
    pub fees: Vec<Amount>,
    pub social_costs: Vec<Amount>,
    /// 20 and 100 year horizons
    pub equivalences: Vec<Equivalence>,
    pub market: Vec<MarketValue>,
    pub households: f64,
    pub state_total_mt: Option<Fact<f64>>,
}

fn amounts(
    tons_per_year: f64,
    schedules: &[Schedule],
    f: fn(f64, f64) -> Result<f64>,
) -> Result<Vec<Amount>> {
    schedules
        .iter()
        .map(|schedule| -> Result<Amount> {
            Ok(Amount {
                schedule: schedule.clone(),
                usd_per_year: f(tons_per_year, schedule.usd_per_ton)?,
            })
        })
        .collect()
}

impl ObservationReport {
    /// Computes all quantities of `observation`. `state_total_mt` is the state's CO2 inventory
    /// of the same year, if known.
    pub fn new(
        observation: Fact<EmissionObservation>,
        state_total_mt: Option<Fact<f64>>,
        constants: &Constants,
    ) -> Result<Self> {
        let rate = observation.claim.rate_tons_per_hour;
        let tons_per_year = annualize(rate, constants.hours_per_year())?;

        let equivalences = [Horizon::Twenty, Horizon::Hundred]
            .into_iter()
            .map(|horizon| -> Result<Equivalence> {
                let gwp = constants.gwp.get(horizon);
                let co2e_mt = co2_equivalent(tons_per_year, gwp)?;
                let cars = car_equivalent(co2e_mt, constants.tons_co2_per_car)?;
                Ok(Equivalence {
                    horizon,
                    gwp,
                    co2e_mt,
                    cars,
                    fleet_percent: 100.0
                        * ratio(cars, constants.registered_vehicles, "registered vehicles")?,
                    state_increase_percent: state_total_mt
                        .as_ref()
                        .map(|total| state_increase_percent(co2e_mt, total.claim))
                        .transpose()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rate_kg = observation.claim.rate_kg_per_hour();
        let market = constants
            .gas_prices_usd_per_mmbtu
            .iter()
            .map(|&price| MarketValue::new(rate_kg, price, constants))
            .collect::<Result<Vec<_>>>()?;

        let households = household_equivalent(
            rate_kg,
            &constants.residential,
            &constants.heat_chain(),
            constants.hours_per_year(),
        )?;

        Ok(Self {
            fees: amounts(tons_per_year, &constants.fees, fee)?,
            social_costs: amounts(tons_per_year, &constants.social_costs, social_cost)?,
            observation,
            tons_per_year,
            equivalences,
            market,
            households,
            state_total_mt,
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} t CH4/hr is {} t CH4/yr",
            self.observation.claim.rate_tons_per_hour,
            int(self.tons_per_year)
        )];
        lines.extend(self.fees.iter().map(|a| {
            format!(
                "Methane fee ({}, ${}/t): ${}/yr",
                a.schedule.name,
                int(a.schedule.usd_per_ton),
                int(a.usd_per_year)
            )
        }));
        lines.extend(self.social_costs.iter().map(|a| {
            format!(
                "Social cost ({}, ${}/t): ${}/yr",
                a.schedule.name,
                int(a.schedule.usd_per_ton),
                int(a.usd_per_year)
            )
        }));
        for e in &self.equivalences {
            let mut line = format!(
                "{}-year GWP ({}): {:.1} million metric tons CO2e, or {} cars \
({:.0}% of the state's registered vehicles)",
                e.horizon.years(),
                e.gwp,
                e.co2e_mt,
                int(e.cars),
                e.fleet_percent,
            );
            let state = (e.state_increase_percent, &self.state_total_mt);
            if let (Some(increase), Some(total)) = state {
                line.push_str(&format!(
                    "; +{increase:.1}% over the state's {} million metric tons CO2",
                    total.claim
                ));
            }
            lines.push(line);
        }
        lines.extend(self.market.iter().map(MarketValue::line));
        lines.push(format!(
            "Same natural gas as consumed by {} households",
            int(self.households)
        ));
        lines
    }
}

/// Russian leakage in 2013 as a percentage of its production
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RussianBenchmark {
    pub production_mmcf: f64,
    /// million metric tons of natural gas
    pub production_mt: f64,
    pub low_percent: f64,
    pub high_percent: f64,
}

impl RussianBenchmark {
    pub fn new(constants: &Constants) -> Result<Self> {
        let production = GasQuantity::Terajoules(constants.russia.production_terajoules);
        let production_mt = volume_to_mass(
            production,
            constants.mmcf_per_terajoule,
            constants.cubic_meters_per_cubic_foot,
            constants.density_kg_per_cubic_meter(),
        )?;
        Ok(Self {
            production_mmcf: to_volume(production, constants.mmcf_per_terajoule),
            production_mt,
            low_percent: leakage_percentage(constants.russia.low_mt, production_mt)?,
            high_percent: leakage_percentage(constants.russia.high_mt, production_mt)?,
        })
    }

    pub fn line(&self, constants: &Constants) -> String {
        format!(
            "Russian production in 2013 of {} TJ is {} mmcf or {:.1} million metric tons of gas: \
reported leakage of {} Mt CH4 is {:.1}% and of {} Mt CH4 is {:.1}%",
            int(constants.russia.production_terajoules),
            int(self.production_mmcf),
            self.production_mt,
            constants.russia.low_mt,
            self.low_percent,
            constants.russia.high_mt,
            self.high_percent,
        )
    }
}

/// The complete result set
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub constants: Constants,
    pub observations: Vec<ObservationReport>,
    /// market value of [`Constants::reference_leak_kg_per_hour`]
    pub reference: Vec<MarketValue>,
    pub russia: RussianBenchmark,
    pub sensitivity: SensitivityTable,
}

#[derive(Serialize)]
struct Section {
    year: i32,
    source: String,
    lines: Vec<String>,
}

#[derive(Serialize)]
struct Context {
    gwp20: f64,
    gwp100: f64,
    hours_per_year: String,
    density: f64,
    observations: Vec<Section>,
    market: Vec<String>,
    russia: String,
    sensitivity_header: String,
    sensitivity_separator: String,
    sensitivity: Vec<String>,
}

impl Report {
    /// Computes the report of the embedded observations with `constants`.
    pub fn new(constants: Constants) -> Result<Self> {
        let observations = load_observations()?;
        let state_totals = load_state_totals()?;
        Self::compute(observations, &state_totals, constants)
    }

    /// Computes the report of `observations`.
    pub fn compute(
        observations: Vec<Fact<EmissionObservation>>,
        state_totals: &StateTotals,
        constants: Constants,
    ) -> Result<Self> {
        log::info!("Computing report of {} observations", observations.len());
        let observations = observations
            .into_iter()
            .map(|observation| {
                let total = state_totals.get(&observation.claim.year).cloned();
                log::debug!(
                    "{}: {} t/hr (state total known: {})",
                    observation.claim.year,
                    observation.claim.rate_tons_per_hour,
                    total.is_some()
                );
                ObservationReport::new(observation, total, &constants)
            })
            .collect::<Result<Vec<_>>>()?;

        let reference = constants
            .gas_prices_usd_per_mmbtu
            .iter()
            .map(|&price| MarketValue::new(constants.reference_leak_kg_per_hour, price, &constants))
            .collect::<Result<Vec<_>>>()?;

        let russia = RussianBenchmark::new(&constants)?;
        log::info!(
            "Russian leakage between {:.1}% and {:.1}%",
            russia.low_percent,
            russia.high_percent
        );

        let sensitivity = fee_schedule_sensitivity(
            &constants.sensitivity_leak_rates,
            &constants.fees,
            &constants.heat_chain(),
        )?;

        Ok(Self {
            constants,
            observations,
            reference,
            russia,
            sensitivity,
        })
    }

    /// All reported quantities as text lines
    pub fn lines(&self) -> Vec<String> {
        self.observations
            .iter()
            .flat_map(|o| {
                let year = o.observation.claim.year;
                o.lines().into_iter().map(move |line| format!("{year}: {line}"))
            })
            .chain(self.reference.iter().map(MarketValue::line))
            .chain(std::iter::once(self.russia.line(&self.constants)))
            .collect()
    }

    /// Renders the report as markdown
    pub fn render(&self) -> Result<String> {
        let context = Context {
            gwp20: self.constants.gwp.gwp20(),
            gwp100: self.constants.gwp.gwp100(),
            hours_per_year: int(self.constants.hours_per_year()),
            density: self.constants.density_kg_per_cubic_meter(),
            observations: self
                .observations
                .iter()
                .map(|o| Section {
                    year: o.observation.claim.year,
                    source: o.observation.source.clone(),
                    lines: o.lines(),
                })
                .collect(),
            market: self.reference.iter().map(MarketValue::line).collect(),
            russia: self.russia.line(&self.constants),
            sensitivity_header: std::iter::once("leak rate (%)".to_string())
                .chain(
                    self.sensitivity
                        .schedules
                        .iter()
                        .map(|s| format!("{} (${}/t)", s.name, int(s.usd_per_ton))),
                )
                .join(" | "),
            sensitivity_separator: std::iter::repeat("---")
                .take(self.sensitivity.schedules.len() + 1)
                .join(" | "),
            sensitivity: self
                .sensitivity
                .rows
                .iter()
                .map(|row| {
                    std::iter::once(format!("{}", row.leak_rate_percent))
                        .chain(row.usd_per_mmbtu.iter().map(|x| format!("{x:.3}")))
                        .join(" | ")
                })
                .collect(),
        };

        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

        Ok(tt.render(TEMPLATE_NAME, &context)?)
    }
}

/// Formats `x` rounded to an integer with thousands separators
fn int(x: f64) -> String {
    let rounded = x.round();
    let formatted = (rounded.abs() as u64).to_formatted_string(&Locale::en);
    if rounded < 0.0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn int_() {
        assert_eq!(int(354_780_000.0), "354,780,000");
        assert_eq!(int(0.4), "0");
        assert_eq!(int(-1234.6), "-1,235");
    }

    #[test]
    fn observation_2015() {
        let observation = Fact::new(
            EmissionObservation {
                year: 2015,
                rate_tons_per_hour: 45.0,
            },
            "",
            "",
        );
        let report = ObservationReport::new(
            observation,
            Some(Fact::new(63.5, "", "")),
            &Constants::default(),
        )
        .unwrap();
        assert_eq!(report.tons_per_year, 394_200.0);
        assert_eq!(report.fees[0].usd_per_year, 354_780_000.0);
        assert_eq!(report.social_costs[1].usd_per_year, 394_200.0 * 1500.0);
        assert_eq!(report.equivalences.len(), 2);
        assert!(report.equivalences[0].co2e_mt > report.equivalences[1].co2e_mt);
        assert!(report.equivalences[0].state_increase_percent.unwrap() > 50.0);
        assert_eq!(report.market.len(), 2);
        assert!(report.households > 0.0);

        let lines = report.lines();
        assert!(lines.iter().any(|l| l.contains("$354,780,000/yr")));
    }

    #[test]
    fn no_state_total() {
        let observation = Fact::new(
            EmissionObservation {
                year: 1999,
                rate_tons_per_hour: 1.0,
            },
            "",
            "",
        );
        let report = ObservationReport::new(observation, None, &Constants::default()).unwrap();
        assert!(report
            .equivalences
            .iter()
            .all(|e| e.state_increase_percent.is_none()));
    }

    #[test]
    fn zero_registered_vehicles() {
        let constants = Constants {
            registered_vehicles: 0.0,
            ..Default::default()
        };
        let observation = Fact::new(
            EmissionObservation {
                year: 2020,
                rate_tons_per_hour: 25.0,
            },
            "",
            "",
        );
        assert!(matches!(
            ObservationReport::new(observation, None, &constants),
            Err(Error::UndefinedRatio {
                what: "registered vehicles"
            })
        ));
    }

    #[test]
    fn market_line() {
        let value = MarketValue {
            emission_rate_kg_per_hr: 35_000.0,
            price_usd_per_mmbtu: 3.0,
            usd_per_hour: 5_589.4,
            usd_per_year: 48_963_144.0,
        };
        assert_eq!(
            value.line(),
            "Leakage of 35,000 kg CH4/hr is worth $5,589/hr ($48,963,144/yr) at $3.00/mmbtu"
        );
    }

    #[test]
    fn render() {
        let report = Report::new(Constants::default()).unwrap();
        assert_eq!(report.observations.len(), 3);
        assert_eq!(report.sensitivity.rows.len(), 11);

        let rendered = report.render().unwrap();
        assert!(rendered.contains("## 2012"));
        assert!(rendered.contains("## 2020"));
        assert!(rendered.contains("Leakage of 35,000 kg CH4/hr"));
        assert!(rendered.contains("Russian production"));
        assert!(rendered.contains(", 8,760 hours per year"));
        assert!(!rendered.contains("8760.0"));
    }
}

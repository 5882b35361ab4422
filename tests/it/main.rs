use std::error::Error;

use uinta::{Constants, GasDensity, GasQuantity, GwpSet, YearConvention};

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

/// Verifies the conversion of Russian production in 2013 (IEA, in TJ) into mass,
/// and that reported leakages correspond to ~1% and ~6.7% of it.
#[test]
fn acceptance_russian_production() -> Result<(), Box<dyn Error>> {
    let accepted_error = 0.01; // 1%
    let constants = Constants::default();

    let mmcf = uinta::conversion::to_volume(GasQuantity::Terajoules(25_786_288.0), 0.94781712);
    let expected = 24_438_918.0;
    assert!(abs_difference(mmcf, expected) / expected < accepted_error);

    let mass = uinta::volume_to_mass(
        GasQuantity::Terajoules(25_786_288.0),
        constants.mmcf_per_terajoule,
        constants.cubic_meters_per_cubic_foot,
        GasDensity::Eia.kg_per_cubic_meter(),
    )?;
    let expected = 493.4;
    assert!(abs_difference(mass, expected) / expected < accepted_error);

    let low = uinta::leakage_percentage(5.0, mass)?;
    let high = uinta::leakage_percentage(33.0, mass)?;
    assert!(abs_difference(low, 1.0) < 0.05);
    assert!(abs_difference(high, 6.7) < 0.05);
    Ok(())
}

/// 45 t/hr in 2015 under a $900/t fee
#[test]
fn acceptance_fee_2015() -> Result<(), Box<dyn Error>> {
    let tons = uinta::annualize(45.0, YearConvention::Calendar.hours())?;
    assert_eq!(tons, 394_200.0);
    assert_eq!(uinta::fee(tons, 900.0)?, 354_780_000.0);
    Ok(())
}

/// 25 t/hr in 2020 with AR6's 100-year GWP
#[test]
fn acceptance_co2e_2020() -> Result<(), Box<dyn Error>> {
    let tons = uinta::annualize(25.0, 8760.0)?;
    let co2e = uinta::co2_equivalent(tons, GwpSet::Ar6.gwp100())?;
    assert!(abs_difference(co2e, 6.5262) < 0.001);

    // with AR5 (84), ~4 million cars
    let cars = uinta::car_equivalent(uinta::co2_equivalent(tons, GwpSet::Ar5.gwp20())?, 4.6)?;
    assert!(abs_difference(cars, 3_999_130.0) < 1.0);
    Ok(())
}

/// The year convention is applied consistently to every annualized figure
#[test]
fn julian_year() -> Result<(), Box<dyn Error>> {
    let calendar = uinta::Report::new(Constants::default())?;
    let julian = uinta::Report::new(Constants {
        year: YearConvention::Julian,
        ..Default::default()
    })?;
    for (c, j) in calendar.observations.iter().zip(julian.observations.iter()) {
        let ratio = 8766.0 / 8760.0;
        assert!(abs_difference(j.tons_per_year / c.tons_per_year, ratio) < 1e-12);
        assert!(abs_difference(j.fees[0].usd_per_year / c.fees[0].usd_per_year, ratio) < 1e-12);
        assert!(abs_difference(j.market[0].usd_per_year / c.market[0].usd_per_year, ratio) < 1e-12);
    }
    Ok(())
}

#[test]
fn household_zero_population() {
    let constants = Constants::default();
    let mut residential = constants.residential.clone();
    residential.population = 0.0;
    let r = uinta::household_equivalent(
        35_000.0,
        &residential,
        &constants.heat_chain(),
        constants.hours_per_year(),
    );
    assert!(matches!(r, Err(uinta::Error::UndefinedRatio { .. })));
}

#[test]
fn sensitivity_sweep() -> Result<(), Box<dyn Error>> {
    let constants = Constants::default();
    let fees = [uinta::Schedule::new("2024", 900.0)];
    let rates = uinta::sweep(0.0, 10.0, 11);
    let table = uinta::fee_schedule_sensitivity(&rates, &fees, &constants.heat_chain())?;
    assert_eq!(table.rows[0].usd_per_mmbtu[0], 0.0);
    let series = table.series(0).collect::<Vec<_>>();
    assert!(series.windows(2).all(|w| w[0] < w[1]));
    // 1% leakage of ~18.8 kg CH4/mmbtu at $900/t is ~$0.17/mmbtu
    assert!(abs_difference(series[1], 0.169) < 0.001);
    Ok(())
}

#[test]
fn report_lines() -> Result<(), Box<dyn Error>> {
    let report = uinta::Report::new(Constants::default())?;
    let lines = report.lines();
    assert!(lines.iter().any(|l| l == "2015: 45 t CH4/hr is 394,200 t CH4/yr"));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("Leakage of 35,000 kg CH4/hr is worth $")));
    assert!(lines.last().unwrap().starts_with("Russian production"));
    Ok(())
}

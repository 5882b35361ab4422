use serde::Serialize;

use crate::error::{non_negative, ratio};
use crate::market::methane_to_mmbtu;
use crate::{HeatChain, Result, Schedule};

/// The fees implied by a leak rate, one per fee schedule
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SensitivityRow {
    pub leak_rate_percent: f64,
    /// USD per mmbtu of produced gas, positionally matching [`SensitivityTable::schedules`]
    pub usd_per_mmbtu: Vec<f64>,
}

/// How a methane fee translates into a price per unit of heat as the leak rate changes
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SensitivityTable {
    pub schedules: Vec<Schedule>,
    /// positionally matching the swept leak rates
    pub rows: Vec<SensitivityRow>,
}

impl SensitivityTable {
    /// The fees of schedule `index`, one per row
    pub fn series(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row.usd_per_mmbtu[index])
    }

    /// Serializes the table as CSV, one column per schedule, for plotting
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let header = std::iter::once("leak_rate_percent".to_string())
            .chain(self.schedules.iter().map(|s| format!("fee_{}", s.name)));
        let rows = self.rows.iter().map(|row| {
            std::iter::once(row.leak_rate_percent)
                .chain(row.usd_per_mmbtu.iter().copied())
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
        });
        Ok(crate::csv::write(header, rows)?)
    }
}

/// Returns `steps` evenly spaced values from `start` to `end` (inclusive).
pub fn sweep(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Returns the USD per mmbtu of produced gas charged by a fee of `usd_per_ton` (per ton of CH4)
/// when `leak_rate_percent` of the gas leaks.
pub fn fee_per_mmbtu(leak_rate_percent: f64, usd_per_ton: f64, chain: &HeatChain) -> Result<f64> {
    let leak = non_negative(leak_rate_percent, "leak rate")? / 100.0;
    let kg_ch4_per_mmbtu = ratio(1.0, methane_to_mmbtu(1.0, chain)?, "heat content")?;
    Ok(leak * kg_ch4_per_mmbtu / 1000.0 * usd_per_ton)
}

/// Returns the table of fees (in USD per mmbtu) for every leak rate in
/// `leak_rate_percentages` and every schedule in `fee_per_ton_schedules`.
pub fn fee_schedule_sensitivity(
    leak_rate_percentages: &[f64],
    fee_per_ton_schedules: &[Schedule],
    chain: &HeatChain,
) -> Result<SensitivityTable> {
    let rows = leak_rate_percentages
        .iter()
        .map(|&leak_rate_percent| -> Result<SensitivityRow> {
            let usd_per_mmbtu = fee_per_ton_schedules
                .iter()
                .map(|schedule| fee_per_mmbtu(leak_rate_percent, schedule.usd_per_ton, chain))
                .collect::<Result<Vec<_>>>()?;
            Ok(SensitivityRow {
                leak_rate_percent,
                usd_per_mmbtu,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    log::debug!(
        "sensitivity of {} schedules over {} leak rates",
        fee_per_ton_schedules.len(),
        rows.len()
    );

    Ok(SensitivityTable {
        schedules: fee_per_ton_schedules.to_vec(),
        rows,
    })
}

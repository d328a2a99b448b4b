use std::time::{Duration, Instant};

use ising::{IsingHamiltonian, Result, ThermalAverages};

pub mod instances;
pub mod output;
pub mod parallel;
pub mod sweep;

pub use parallel::{par_ground_state, par_thermal_averages};
pub use sweep::{temperature_grid, temperature_sweep, SweepRow};

/// Wall time of one parallel enumeration of the thermal averages.
pub fn time_enumeration(
    h: &IsingHamiltonian,
    temperature: f64,
) -> Result<(ThermalAverages, Duration)> {
    let start = Instant::now();
    let averages = par_thermal_averages(h, temperature)?;
    Ok((averages, start.elapsed()))
}

use std::ops::Range;

use ising::ground_state::lower_of;
use ising::thermal::check_temperature;
use ising::{GroundState, IsingHamiltonian, Moments, Result, ThermalAverages};
use rayon::prelude::*;
use tracing::debug;

/// States per rayon task.
pub const CHUNK_STATES: u64 = 1 << 12;

/// Splits `0..states` into consecutive ranges of at most `chunk` states.
pub fn chunks(states: u64, chunk: u64) -> Vec<Range<u64>> {
    let chunk = chunk.max(1);
    (0..states.div_ceil(chunk))
        .map(|k| k * chunk..((k + 1) * chunk).min(states))
        .collect()
}

/// [`IsingHamiltonian::thermal_averages`] with every pass spread over rayon.
///
/// Partial results are collected in chunk order and reduced sequentially, so
/// the result does not depend on the number of worker threads.
pub fn par_thermal_averages(h: &IsingHamiltonian, temperature: f64) -> Result<ThermalAverages> {
    check_temperature(temperature)?;
    let states = h.state_count()?;
    let ranges = chunks(states, CHUNK_STATES);
    debug!(
        sites = h.size(),
        states,
        chunks = ranges.len(),
        temperature,
        "parallel thermal averages"
    );

    let (_, min_energy) = par_lowest(h, &ranges)?;

    let partial_z: Vec<f64> = ranges
        .par_iter()
        .map(|r| h.partition_function(temperature, min_energy, r.clone()))
        .collect::<Result<_>>()?;
    let z: f64 = partial_z.iter().sum();

    let partial: Vec<Moments> = ranges
        .par_iter()
        .map(|r| h.moments(temperature, min_energy, z, r.clone()))
        .collect::<Result<_>>()?;
    let moments = partial
        .into_iter()
        .fold(Moments::default(), Moments::merge);

    Ok(moments.finish(min_energy, temperature))
}

/// Lowest `(state index, energy)` over `ranges`, ties to the lower index.
fn par_lowest(h: &IsingHamiltonian, ranges: &[Range<u64>]) -> Result<(u64, f64)> {
    let partial: Vec<Option<(u64, f64)>> = ranges
        .par_iter()
        .map(|r| h.lowest_in(r.clone()))
        .collect::<Result<_>>()?;
    Ok(partial
        .into_iter()
        .flatten()
        .fold(None, lower_of)
        .unwrap_or((0, 0.0)))
}

/// [`IsingHamiltonian::ground_state`] over rayon; ties go to the lower state
/// index, as in the sequential scan.
pub fn par_ground_state(h: &IsingHamiltonian) -> Result<GroundState> {
    let states = h.state_count()?;
    let ranges = chunks(states, CHUNK_STATES);
    debug!(sites = h.size(), states, chunks = ranges.len(), "parallel ground state");

    let (index, energy) = par_lowest(h, &ranges)?;
    h.ground_state_from(index, energy)
}

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IsingError, Result};
use crate::hamiltonian::IsingHamiltonian;
use crate::observables::magnetization;

/// Boltzmann averages at one temperature (k_B = 1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThermalAverages {
    pub energy: f64,
    pub magnetization: f64,
    pub heat_capacity: f64,
    pub susceptibility: f64,
}

impl ThermalAverages {
    /// `(energy, magnetization, heat_capacity, susceptibility)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.energy,
            self.magnetization,
            self.heat_capacity,
            self.susceptibility,
        )
    }
}

/// Weighted first and second moments of energy and magnetization.
///
/// Energies are measured from the ground-state energy and weights are
/// already normalized by the partition function, so partial moments over
/// disjoint state ranges add up to the full moments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    pub excess: f64,
    pub excess_sq: f64,
    pub magnetization: f64,
    pub magnetization_sq: f64,
}

impl Moments {
    /// `excess` is `E - E_min` of the state.
    pub fn accumulate(&mut self, excess: f64, magnetization: f64, weight: f64) {
        self.excess += excess * weight;
        self.excess_sq += excess * excess * weight;
        self.magnetization += magnetization * weight;
        self.magnetization_sq += magnetization * magnetization * weight;
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            excess: self.excess + other.excess,
            excess_sq: self.excess_sq + other.excess_sq,
            magnetization: self.magnetization + other.magnetization,
            magnetization_sq: self.magnetization_sq + other.magnetization_sq,
        }
    }

    /// Fluctuation formulas for heat capacity and susceptibility.
    ///
    /// Variances are clamped at zero; rounding can push a vanishing variance
    /// slightly negative.
    pub fn finish(self, min_energy: f64, temperature: f64) -> ThermalAverages {
        let var_e = (self.excess_sq - self.excess * self.excess).max(0.0);
        let var_m = (self.magnetization_sq - self.magnetization * self.magnetization).max(0.0);
        ThermalAverages {
            energy: min_energy + self.excess,
            magnetization: self.magnetization,
            heat_capacity: if var_e == 0.0 {
                0.0
            } else {
                var_e / (temperature * temperature)
            },
            susceptibility: if var_m == 0.0 { 0.0 } else { var_m / temperature },
        }
    }
}

pub fn check_temperature(temperature: f64) -> Result<()> {
    if temperature > 0.0 && temperature.is_finite() {
        Ok(())
    } else {
        Err(IsingError::InvalidTemperature(temperature))
    }
}

/// Boltzmann factor relative to the ground state, at most 1.
fn relative_weight(excess: f64, beta: f64) -> f64 {
    (-beta * excess).exp()
}

impl IsingHamiltonian {
    /// Exact averages at `temperature`.
    ///
    /// One pass finds the ground-state energy `E_min`, then the partition
    /// function and the moments are enumerated with weights
    /// `exp(-(E - E_min)/T)`, which never overflow.
    pub fn thermal_averages(&self, temperature: f64) -> Result<ThermalAverages> {
        check_temperature(temperature)?;
        let states = self.state_count()?;
        debug!(sites = self.size(), states, temperature, "enumerating thermal averages");

        let min_energy = self.min_energy()?;
        let z = self.partition_function(temperature, min_energy, 0..states)?;
        let moments = self.moments(temperature, min_energy, z, 0..states)?;
        Ok(moments.finish(min_energy, temperature))
    }

    /// Lowest energy over all states.
    pub fn min_energy(&self) -> Result<f64> {
        let states = self.state_count()?;
        Ok(self.lowest_in(0..states)?.map_or(0.0, |(_, e)| e))
    }

    /// Sum of `exp(-(E - min_energy)/T)` over the states in `range`.
    pub fn partition_function(
        &self,
        temperature: f64,
        min_energy: f64,
        range: Range<u64>,
    ) -> Result<f64> {
        check_temperature(temperature)?;
        let beta = 1.0 / temperature;
        let mut z = 0.0;
        self.visit_states(range, |_, _, e| z += relative_weight(e - min_energy, beta))?;
        Ok(z)
    }

    /// Moments over `range`, weighting each state by
    /// `exp(-(E - min_energy)/T) / z`.
    ///
    /// `min_energy` must be the ground-state energy and `z` the matching
    /// partition function over the full state space.
    pub fn moments(
        &self,
        temperature: f64,
        min_energy: f64,
        z: f64,
        range: Range<u64>,
    ) -> Result<Moments> {
        check_temperature(temperature)?;
        let beta = 1.0 / temperature;
        let mut moments = Moments::default();
        self.visit_states(range, |_, config, e| {
            let excess = e - min_energy;
            let p = relative_weight(excess, beta) / z;
            moments.accumulate(excess, magnetization(config) as f64, p);
        })?;
        Ok(moments)
    }
}

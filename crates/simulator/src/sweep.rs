use ising::{IsingHamiltonian, Result, ThermalAverages};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SweepRow {
    pub temperature: f64,
    #[serde(flatten)]
    pub averages: ThermalAverages,
}

/// `steps` evenly spaced temperatures from `t_min` to `t_max` inclusive.
pub fn temperature_grid(t_min: f64, t_max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![t_min],
        _ => (0..steps)
            .map(|i| t_min + (t_max - t_min) * i as f64 / (steps - 1) as f64)
            .collect(),
    }
}

/// Exact averages at each temperature; rows follow the input order.
pub fn temperature_sweep(h: &IsingHamiltonian, temperatures: &[f64]) -> Result<Vec<SweepRow>> {
    info!(
        sites = h.size(),
        points = temperatures.len(),
        "temperature sweep"
    );

    temperatures
        .par_iter()
        .map(|&temperature| -> Result<SweepRow> {
            let averages = h.thermal_averages(temperature)?;
            Ok(SweepRow {
                temperature,
                averages,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_endpoints() {
        let g = temperature_grid(0.5, 2.5, 5);
        assert_eq!(g.len(), 5);
        assert_eq!(g[0], 0.5);
        assert_eq!(g[4], 2.5);
        assert!((g[1] - 1.0).abs() < 1e-12);
        assert!(temperature_grid(1.0, 2.0, 0).is_empty());
        assert_eq!(temperature_grid(1.0, 2.0, 1), vec![1.0]);
    }
}

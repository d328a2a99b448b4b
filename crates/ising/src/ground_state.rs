use std::ops::Range;

use bits::BitString;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::hamiltonian::IsingHamiltonian;

/// Lowest-energy configuration found by enumeration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundState {
    pub energy: f64,
    pub config: BitString,
}

/// Keeps `candidate` only if strictly lower; equal energies keep the
/// earlier state index.
pub fn lower_of(best: Option<(u64, f64)>, candidate: (u64, f64)) -> Option<(u64, f64)> {
    match best {
        Some((index, e)) if e < candidate.1 || (e == candidate.1 && index < candidate.0) => best,
        _ => Some(candidate),
    }
}

impl IsingHamiltonian {
    /// Minimum energy and the configuration reaching it.
    ///
    /// With `trace` set, every enumerated state is emitted as a TRACE event.
    pub fn ground_state(&self, trace: bool) -> Result<GroundState> {
        if trace {
            self.ground_state_with(|e, config| {
                trace!(target: "ising::ground_state", "{:12.8} {}", e, config);
            })
        } else {
            self.ground_state_with(|_, _| {})
        }
    }

    /// Like [`ground_state`](Self::ground_state), handing each
    /// `(energy, config)` pair to `observe` on the way.
    pub fn ground_state_with<F>(&self, mut observe: F) -> Result<GroundState>
    where
        F: FnMut(f64, &BitString),
    {
        let states = self.state_count()?;
        debug!(sites = self.size(), states, "enumerating ground state");

        let mut best: Option<(u64, f64)> = None;
        self.visit_states(0..states, |index, config, e| {
            observe(e, config);
            if best.map_or(true, |(_, emin)| e < emin) {
                best = Some((index, e));
            }
        })?;

        // the state space is never empty, so the first sample always lands
        let (index, energy) = best.unwrap_or((0, 0.0));
        self.ground_state_from(index, energy)
    }

    /// Partial minimum over `range`, `None` for an empty range.
    pub fn lowest_in(&self, range: Range<u64>) -> Result<Option<(u64, f64)>> {
        let mut best = None;
        self.visit_states(range, |index, _, e| {
            if best.map_or(true, |(_, emin)| e < emin) {
                best = Some((index, e));
            }
        })?;
        Ok(best)
    }

    /// Builds the [`GroundState`] for a state index found by a reduction.
    pub fn ground_state_from(&self, index: u64, energy: f64) -> Result<GroundState> {
        let mut config = BitString::new(self.size())?;
        config.set_from_integer(index)?;
        Ok(GroundState { energy, config })
    }
}

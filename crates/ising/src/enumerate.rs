use std::ops::Range;

use bits::BitString;

use crate::error::{IsingError, Result};
use crate::hamiltonian::IsingHamiltonian;

/// Largest site count whose state count `2^n` fits a `u64`.
pub const MAX_ENUMERATION_SITES: usize = 63;

impl IsingHamiltonian {
    /// Number of configurations, `2^size`.
    pub fn state_count(&self) -> Result<u64> {
        let sites = self.size();
        if sites > MAX_ENUMERATION_SITES {
            return Err(IsingError::TooManySites {
                sites,
                limit: MAX_ENUMERATION_SITES,
            });
        }
        Ok(1u64 << sites)
    }

    /// Calls `visit(index, config, energy)` for every state index in `range`,
    /// in ascending order, decoding into a single reused buffer.
    pub fn visit_states<F>(&self, range: Range<u64>, mut visit: F) -> Result<()>
    where
        F: FnMut(u64, &BitString, f64),
    {
        let count = self.state_count()?;
        if range.start > range.end || range.end > count {
            return Err(IsingError::StateRange {
                start: range.start,
                end: range.end,
                count,
            });
        }
        self.validate()?;

        let mut config = BitString::new(self.size())?;
        for index in range {
            config.set_from_integer(index)?;
            let e = self.energy_of(config.bits());
            visit(index, &config, e);
        }
        Ok(())
    }
}

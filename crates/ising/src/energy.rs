use bits::BitString;

use crate::error::{IsingError, Result};
use crate::hamiltonian::IsingHamiltonian;
use crate::observables::spin;

impl IsingHamiltonian {
    /// Energy of `config`.
    ///
    /// Bond `(i, j, w)` contributes `+w` when both bits agree and `-w`
    /// otherwise. Entries with `j < i` are skipped so a bond listed under both
    /// endpoints is counted once. Fields add `h_k * (2 b_k - 1)`.
    pub fn energy(&self, config: &BitString) -> Result<f64> {
        if config.len() != self.size() {
            return Err(IsingError::DimensionMismatch {
                expected: self.size(),
                found: config.len(),
            });
        }
        self.validate()?;
        Ok(self.energy_of(config.bits()))
    }

    /// Shape checks are the caller's job.
    pub(crate) fn energy_of(&self, bits: &[u8]) -> f64 {
        let mut e = 0.0;

        for (i, partners) in self.couplings().iter().enumerate() {
            for &(j, w) in partners {
                if j < i {
                    continue;
                }
                if bits[i] == bits[j] {
                    e += w;
                } else {
                    e -= w;
                }
            }
        }

        for (&h, &b) in self.fields().iter().zip(bits) {
            e += h * spin(b);
        }

        e
    }
}

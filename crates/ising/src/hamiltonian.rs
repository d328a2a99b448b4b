use serde::{Deserialize, Serialize};

use crate::error::{IsingError, Result};

/// Pairwise couplings plus optional local fields over `size()` sites.
///
/// `couplings[i]` lists `(j, w)` pairs. An undirected bond may be listed under
/// both endpoints; energy evaluation only counts the listing with `j >= i`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IsingHamiltonian {
    couplings: Vec<Vec<(usize, f64)>>,
    /// local fields h_k * s_k, empty when the model has no field term
    #[serde(default)]
    fields: Vec<f64>,
}

impl IsingHamiltonian {
    pub fn new(couplings: Vec<Vec<(usize, f64)>>, fields: Vec<f64>) -> Self {
        Self { couplings, fields }
    }

    pub fn without_fields(couplings: Vec<Vec<(usize, f64)>>) -> Self {
        Self::new(couplings, Vec::new())
    }

    /// Periodic ring where every site lists both neighbours.
    ///
    /// Below three sites the two neighbours coincide: a 2-ring has one bond
    /// (listed under both sites, counted once) and a 1-ring has none.
    pub fn ring(n: usize, coupling: f64, field: f64) -> Self {
        let couplings = (0..n)
            .map(|i| {
                let mut partners: Vec<(usize, f64)> = Vec::with_capacity(2);
                for j in [(i + 1) % n, (i + n - 1) % n] {
                    if j != i && !partners.iter().any(|&(p, _)| p == j) {
                        partners.push((j, coupling));
                    }
                }
                partners
            })
            .collect();
        Self::new(couplings, vec![field; n])
    }

    /// Open chain, each bond listed once under its lower endpoint.
    pub fn chain(n: usize, coupling: f64, field: f64) -> Self {
        let couplings = (0..n)
            .map(|i| {
                if i + 1 < n {
                    vec![(i + 1, coupling)]
                } else {
                    Vec::new()
                }
            })
            .collect();
        Self::new(couplings, vec![field; n])
    }

    /// Number of sites.
    pub fn size(&self) -> usize {
        self.couplings.len()
    }

    pub fn couplings(&self) -> &[Vec<(usize, f64)>] {
        &self.couplings
    }

    pub fn fields(&self) -> &[f64] {
        &self.fields
    }

    /// Checks partner indices and the field vector length.
    pub fn validate(&self) -> Result<()> {
        let size = self.size();
        for (site, partners) in self.couplings.iter().enumerate() {
            if let Some(&(partner, _)) = partners.iter().find(|&&(j, _)| j >= size) {
                return Err(IsingError::InvalidCoupling {
                    site,
                    partner,
                    size,
                });
            }
        }
        if !self.fields.is_empty() && self.fields.len() != size {
            return Err(IsingError::FieldLength {
                expected: size,
                found: self.fields.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_lists_both_neighbours() {
        let h = IsingHamiltonian::ring(4, 1.5, 0.2);
        assert_eq!(h.size(), 4);
        assert_eq!(h.couplings()[0], vec![(1, 1.5), (3, 1.5)]);
        assert_eq!(h.couplings()[3], vec![(0, 1.5), (2, 1.5)]);
        assert_eq!(h.fields(), &[0.2; 4]);
        assert!(h.validate().is_ok());
    }

    #[test]
    fn small_rings_have_no_repeated_or_self_bonds() {
        let pair = IsingHamiltonian::ring(2, 1.0, 0.0);
        assert_eq!(pair.couplings()[0], vec![(1, 1.0)]);
        assert_eq!(pair.couplings()[1], vec![(0, 1.0)]);

        let aligned: bits::BitString = "11".parse().unwrap();
        let opposed: bits::BitString = "01".parse().unwrap();
        assert_eq!(pair.energy(&aligned).unwrap(), 1.0);
        assert_eq!(pair.energy(&opposed).unwrap(), -1.0);

        let single = IsingHamiltonian::ring(1, 1.0, 0.5);
        assert!(single.couplings()[0].is_empty());
        let up: bits::BitString = "1".parse().unwrap();
        assert_eq!(single.energy(&up).unwrap(), 0.5);
    }

    #[test]
    fn chain_lists_lower_endpoint_only() {
        let h = IsingHamiltonian::chain(3, -1.0, 0.0);
        assert_eq!(h.couplings()[0], vec![(1, -1.0)]);
        assert_eq!(h.couplings()[1], vec![(2, -1.0)]);
        assert!(h.couplings()[2].is_empty());
    }

    #[test]
    fn default_is_empty() {
        let h = IsingHamiltonian::default();
        assert_eq!(h.size(), 0);
        assert!(h.couplings().is_empty());
        assert!(h.fields().is_empty());
        assert!(h.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_partner() {
        let h = IsingHamiltonian::without_fields(vec![vec![(1, 1.0)], vec![(2, 1.0)]]);
        assert_eq!(
            h.validate(),
            Err(IsingError::InvalidCoupling {
                site: 1,
                partner: 2,
                size: 2
            })
        );
    }

    #[test]
    fn validate_rejects_short_fields() {
        let h = IsingHamiltonian::new(vec![vec![], vec![]], vec![0.1]);
        assert_eq!(
            h.validate(),
            Err(IsingError::FieldLength {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn fields_default_when_missing_from_json() {
        let h: IsingHamiltonian = serde_json::from_str(r#"{"couplings": [[[1, 1.0]], []]}"#).unwrap();
        assert_eq!(h.size(), 2);
        assert!(h.fields().is_empty());
        assert_eq!(h.couplings()[0], vec![(1, 1.0)]);
    }
}

use bits::BitStringError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsingError {
    #[error("dimension mismatch: hamiltonian has {expected} sites, configuration has {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid temperature {0}: must be positive and finite")]
    InvalidTemperature(f64),

    #[error("site {site} couples to partner {partner}, outside 0..{size}")]
    InvalidCoupling {
        site: usize,
        partner: usize,
        size: usize,
    },

    #[error("field vector has length {found}, expected 0 or {expected}")]
    FieldLength { expected: usize, found: usize },

    #[error("{sites} sites is too many to enumerate (limit {limit})")]
    TooManySites { sites: usize, limit: usize },

    #[error("state range {start}..{end} exceeds the {count} states of the model")]
    StateRange { start: u64, end: u64, count: u64 },

    #[error(transparent)]
    BitString(#[from] BitStringError),
}

pub type Result<T> = std::result::Result<T, IsingError>;

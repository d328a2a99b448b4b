//! Exact thermodynamics of classical Ising models by enumerating every
//! configuration of a small system.

pub mod energy;
pub mod enumerate;
pub mod error;
pub mod ground_state;
pub mod hamiltonian;
pub mod observables;
pub mod thermal;

pub use bits::BitString;
pub use enumerate::MAX_ENUMERATION_SITES;
pub use error::{IsingError, Result};
pub use ground_state::GroundState;
pub use hamiltonian::IsingHamiltonian;
pub use thermal::{Moments, ThermalAverages};

use std::fs;

use ising::IsingHamiltonian;
use simulator::instances::spin_glass;
use tracing::info;

use crate::cli::{Lattice, ModelArgs};
use crate::error::{CliError, Result};

pub fn build_model(args: &ModelArgs) -> Result<IsingHamiltonian> {
    let h = match &args.model {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let h: IsingHamiltonian =
                serde_json::from_str(&text).map_err(|source| CliError::Json {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), sites = h.size(), "loaded model file");
            h
        }
        None => {
            info!(lattice = ?args.lattice, sites = args.sites, "built-in lattice");
            match args.lattice {
                Lattice::Ring => IsingHamiltonian::ring(args.sites, args.coupling, args.field),
                Lattice::Chain => IsingHamiltonian::chain(args.sites, args.coupling, args.field),
                Lattice::SpinGlass => {
                    spin_glass(args.sites, args.coupling, args.field, args.seed)
                }
            }
        }
    };
    h.validate()?;
    Ok(h)
}

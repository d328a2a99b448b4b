use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Exact Ising thermodynamics by full state enumeration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, global = true, default_value_t = 0)]
    pub threads: usize,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Energy of a single configuration
    Energy {
        /// Configuration as a 0/1 string, most significant site first
        #[arg(long)]
        bits: String,

        #[command(flatten)]
        model: ModelArgs,
    },
    /// Mean energy, magnetization, heat capacity and susceptibility
    Averages {
        #[arg(long, default_value_t = 2.0)]
        temperature: f64,

        /// Enumerate on the Rayon pool
        #[arg(long)]
        parallel: bool,

        #[command(flatten)]
        model: ModelArgs,
    },
    /// Lowest-energy configuration
    GroundState {
        /// Print every enumerated state with its energy
        #[arg(long, conflicts_with = "parallel")]
        trace: bool,

        /// Enumerate on the Rayon pool
        #[arg(long)]
        parallel: bool,

        #[command(flatten)]
        model: ModelArgs,
    },
    /// Averages over a temperature grid, written as CSV
    Sweep {
        #[arg(long, default_value_t = 0.5)]
        t_min: f64,

        #[arg(long, default_value_t = 5.0)]
        t_max: f64,

        /// Number of temperatures, endpoints included
        #[arg(long, default_value_t = 20)]
        steps: usize,

        /// Output CSV path
        #[arg(long, default_value = "sweep.csv")]
        out: PathBuf,

        #[command(flatten)]
        model: ModelArgs,
    },
}

/// Model selection shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// JSON model file ({"couplings": [[[j, w], ...], ...], "fields": [...]}); overrides the lattice options
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Lattice::Ring)]
    pub lattice: Lattice,

    /// Number of sites
    #[arg(long, default_value_t = 10)]
    pub sites: usize,

    /// Bond strength (spin glass: half-width of the coupling distribution)
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub coupling: f64,

    /// Local field per site (spin glass: half-width of the field distribution)
    #[arg(long, default_value_t = 0.1, allow_hyphen_values = true)]
    pub field: f64,

    /// Seed for spin-glass instances
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lattice {
    Ring,
    Chain,
    SpinGlass,
}

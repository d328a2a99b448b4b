use std::process::ExitCode;

use bits::BitString;
use clap::Parser;
use serde_json::json;
use simulator::{
    output::write_sweep_csv, par_ground_state, par_thermal_averages, temperature_grid,
    temperature_sweep,
};
use tracing::info;

mod cli;
mod error;
mod logging;
mod model;

use cli::{Cli, Command};
use error::{CliError, Result};
use model::build_model;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone()) {
        eprintln!("Failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()?;
    }

    match cli.command {
        Command::Energy { bits, model } => {
            let h = build_model(&model)?;
            let config: BitString = bits.parse()?;
            let e = h.energy(&config)?;

            if cli.json {
                println!("{}", json!({ "config": config, "energy": e }));
            } else {
                println!("E({}) = {:.12}", config, e);
            }
        }
        Command::Averages {
            temperature,
            parallel,
            model,
        } => {
            let h = build_model(&model)?;
            let avg = if parallel {
                par_thermal_averages(&h, temperature)?
            } else {
                h.thermal_averages(temperature)?
            };

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "temperature": temperature,
                        "averages": avg,
                    }))?
                );
            } else {
                println!("T = {}", temperature);
                println!("<E>  = {:.12}", avg.energy);
                println!("<M>  = {:.12}", avg.magnetization);
                println!("C_v  = {:.12}", avg.heat_capacity);
                println!("chi  = {:.12}", avg.susceptibility);
            }
        }
        Command::GroundState {
            trace,
            parallel,
            model,
        } => {
            let h = build_model(&model)?;
            let gs = if parallel {
                par_ground_state(&h)?
            } else if trace {
                h.ground_state_with(|e, config| println!(" {:12.8} {}", e, config))?
            } else {
                h.ground_state(false)?
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&gs)?);
            } else {
                println!("E_min = {:.12} at {}", gs.energy, gs.config);
            }
        }
        Command::Sweep {
            t_min,
            t_max,
            steps,
            out,
            model,
        } => {
            if steps == 0 || !(t_min > 0.0) || t_max < t_min {
                return Err(CliError::Config(format!(
                    "need steps > 0 and 0 < t_min <= t_max, got steps={} t_min={} t_max={}",
                    steps, t_min, t_max
                )));
            }

            let h = build_model(&model)?;
            let rows = temperature_sweep(&h, &temperature_grid(t_min, t_max, steps))?;
            write_sweep_csv(&out, &rows)?;
            info!(path = %out.display(), rows = rows.len(), "wrote sweep");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("Sweep: {} temperatures -> {}", rows.len(), out.display());
            }
        }
    }

    Ok(())
}

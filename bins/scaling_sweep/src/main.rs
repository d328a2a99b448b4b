use clap::Parser;
use ising::IsingHamiltonian;
use simulator::time_enumeration;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;

#[derive(Parser, Debug)]
#[command(author, version, about = "Enumeration throughput versus sites and Rayon threads")]
struct Args {
    /// Smallest ring size
    #[arg(long, default_value_t = 12)]
    n_min: usize,

    /// Largest ring size
    #[arg(long, default_value_t = 20)]
    n_max: usize,

    /// Comma-separated list of worker thread counts
    #[arg(long, default_value = "1,2,4,8")]
    threads: String,

    /// Temperature of the thermal averages
    #[arg(long, default_value_t = 2.0)]
    temperature: f64,

    /// Output CSV path
    #[arg(long, default_value = "scaling_sweep.csv")]
    out: String,
}

struct Row {
    sites: usize,
    threads: usize,
    seconds: f64,
    states_per_sec: f64,
}

fn main() {
    let args = Args::parse();

    if args.n_min > args.n_max {
        eprintln!("n_min must be <= n_max");
        process::exit(1);
    }

    let thread_counts = parse_list(&args.threads);
    if thread_counts.is_empty() {
        eprintln!("threads must contain at least one positive integer");
        process::exit(1);
    }

    let mut rows = Vec::new();

    for &threads in &thread_counts {
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool,
            Err(err) => {
                eprintln!("failed to build pool with {} threads: {}", threads, err);
                process::exit(1);
            }
        };

        for sites in args.n_min..=args.n_max {
            let h = IsingHamiltonian::ring(sites, 1.0, 0.1);
            let (avg, elapsed) = match pool.install(|| time_enumeration(&h, args.temperature)) {
                Ok(res) => res,
                Err(err) => {
                    eprintln!("sites={}: {}", sites, err);
                    process::exit(1);
                }
            };

            let seconds = elapsed.as_secs_f64();
            let states = (1u64 << sites) as f64;
            let row = Row {
                sites,
                threads,
                seconds,
                states_per_sec: if seconds > 0.0 { states / seconds } else { f64::INFINITY },
            };
            println!(
                "sites={} threads={} seconds={:.4} states/s={:.3e} <E>={:.6}",
                row.sites, row.threads, row.seconds, row.states_per_sec, avg.energy
            );
            rows.push(row);
        }
    }

    if let Err(err) = write_csv(&args.out, &rows) {
        eprintln!("Failed to write CSV to {}: {}", args.out, err);
        process::exit(1);
    }
}

fn write_csv(path: &str, rows: &[Row]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "sites,threads,seconds,states_per_sec")?;
    for r in rows {
        writeln!(w, "{},{},{},{}", r.sites, r.threads, r.seconds, r.states_per_sec)?;
    }
    w.flush()
}

fn parse_list(input: &str) -> Vec<usize> {
    input
        .split(',')
        .filter_map(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .collect()
}

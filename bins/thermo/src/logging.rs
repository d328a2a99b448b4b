use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

use crate::error::Result;

/// `-v` count to level: WARN, INFO, DEBUG, then TRACE.
fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbosity) {
        (true, _) => LevelFilter::OFF,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Stderr logging, plus an uncoloured copy in `log_file` when given.
///
/// Targets are shown on stderr only at TRACE, where per-state ground-state
/// events (target `ising::ground_state`) interleave with the rest.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level = level_for(verbosity, quiet);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(level == LevelFilter::TRACE)
        .without_time()
        .compact()
        .with_filter(level);

    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_writer(Mutex::new(File::create(&path)?))
                .with_ansi(false)
                .with_filter(level),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

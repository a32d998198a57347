//! influence: influence score calculator for social graph edge lists.
//!
//! Wraps influence-core to load two CSV edge lists, run BFS over the
//! unweighted one and Dijkstra over the weighted one, and print each start
//! node's influence score.
//!
//! ```bash
//! # Fixed inputs under Files/, start nodes Diana and B
//! influence
//!
//! # Another dataset, JSON report without the Dijkstra trace
//! influence --weighted data/roads.csv --weighted-start Depot -f json --no-trace
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod error;
mod pipeline;
mod report;
mod settings;
mod trace;

use error::CliResult;
use settings::{OutputFormat, Settings};
use trace::{ConsoleTrace, MissingStartOnly};

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn execute(settings: &Settings) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let analyses = match settings.format {
        OutputFormat::Text => {
            let mut console = ConsoleTrace::new(&mut out);
            let analyses = if settings.streams_trace() {
                pipeline::run(settings, &mut console)?
            } else {
                pipeline::run(settings, &mut MissingStartOnly(&mut console))?
            };
            console.finish()?;
            analyses
        }
        OutputFormat::Json => pipeline::run(settings, &mut ())?,
    };

    report::render(settings.format, &analyses, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let settings = Settings::parse();

    setup_logging(settings.verbose, settings.quiet);

    match execute(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

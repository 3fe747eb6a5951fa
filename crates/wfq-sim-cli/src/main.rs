//! `wfq-sim`: reads an arrival trace from stdin, drives the weighted
//! fair queueing scheduler, and writes the resulting departure trace to
//! stdout. Single-threaded and synchronous end to end — there is no
//! async runtime in this binary.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use wfq_cli_config::Config;
use wfq_core::Error;
use wfq_scheduler::Scheduler;
use wfq_trace_io::{format_departure, ArrivalReader};

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    wfq_scheduler::logging::init_tracing_with_filter(&config.log_filter);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "wfq-sim terminated");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> wfq_core::Result<()> {
    let stdin = io::stdin();
    let arrivals = ArrivalReader::new(stdin.lock());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut scheduler = Scheduler::with_config(config.tie_tolerance, config.default_weight);
    scheduler.drive(arrivals, |departure| {
        let line = format_departure(&departure);
        if let Err(err) = writeln!(out, "{line}") {
            tracing::warn!(error = %err, "failed to write departure line");
        }
    })?;

    out.flush().map_err(Error::Io)?;
    Ok(())
}

//! `cachesim`: drives a memory-access trace through a three-level cache
//! hierarchy modeled on one of six Intel CPU generations and reports the
//! per-access hit/miss classification, effective cycle cost, and aggregate
//! statistics.

mod args;
mod error;
mod report;
mod trace;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim_core::config::CpuProfile;
use cachesim_core::sim::HierarchyDriver;

use crate::args::CliArgs;
use crate::error::SimError;
use crate::report::ReportWriter;
use crate::trace::TraceReader;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a `tracing-subscriber` filter at the level implied by `-v`
/// repetitions (warn by default, up through trace), writing to stderr so
/// diagnostics never interleave with the trace output on stdout.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &CliArgs) -> Result<(), SimError> {
    let profile = CpuProfile::for_selector(&args.cpu);
    tracing::info!(cpu = ?profile.cpu, "loaded cache profile");

    let source = open_trace(&args.trace)?;
    let mut driver = HierarchyDriver::new(profile);

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), args.format);

    for record in TraceReader::new(source) {
        let result = driver.access(record.kind, record.address);
        writer.write_access(&result);
    }
    writer.write_summary(&driver.stats().report());

    Ok(())
}

/// Opens `trace` for buffered reading; `-` reads from stdin instead of the
/// filesystem. The only fallible step in the whole CLI — see [`SimError`].
fn open_trace(trace: &str) -> Result<Box<dyn BufRead>, SimError> {
    if trace == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let path = PathBuf::from(trace);
    let file = File::open(&path).map_err(|source| SimError::TraceOpen {
        path: path.clone(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

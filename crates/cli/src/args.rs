//! Command-line argument decoding for the `cachesim` binary.

use clap::{Parser, ValueEnum};

/// Deterministic, cycle-accurate L1/L2/L3 cache hierarchy simulator.
#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Reproduce reverse-engineered Intel cache replacement policies over a memory-access trace",
    long_about = "Reads a stream of R/W memory-access records and drives them through a three-level\n(L1/L2/L3) cache hierarchy modeled on one of six Intel CPU generations, reporting the\nhit/miss classification and effective cycle cost at every level.\n\nExamples:\n  cachesim --cpu hsw --trace access.log\n  cachesim --cpu skl --format csv --trace - < access.log"
)]
pub struct CliArgs {
    /// CPU generation to simulate: nhm/nehalem, snb/sandybridge, ivb/ivybridge,
    /// hsw/haswell, skl/skylake, cfl/coffeelake. Unrecognized selectors fall
    /// back to Coffee Lake.
    #[arg(long, default_value = "cfl")]
    pub cpu: String,

    /// Trace file to read access records from. Pass `-` to read from stdin.
    #[arg(long, default_value = "-")]
    pub trace: String,

    /// Output format for per-access rows and the final summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Presentation format for per-access rows and the final statistics summary.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One readable block per access, plus a human summary at the end.
    #[default]
    Human,
    /// One CSV header row plus one data row per access; no trailing summary
    /// block, since CSV output is parseable data only.
    Csv,
}

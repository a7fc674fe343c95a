//! Formats per-access rows and the final [`StatsReport`] as either a human
//! banner or CSV, to any [`Write`].
//!
//! Mirrors the teacher's convention of keeping metric computation on the
//! stats struct itself and presentation in the caller: this module only
//! ever renders data `cachesim_core` already produced, never computes it.

use std::io::Write;

use cachesim_core::common::ALL_ONES;
use cachesim_core::sim::{AccessResult, LevelOutcome, LevelResult};
use cachesim_core::stats::StatsReport;

use crate::args::OutputFormat;

const CSV_HEADER: &str =
    "address,l1,l1_cycles,l1_evicted,l2,l2_cycles,l2_evicted,l3,l3_cycles,l3_evicted,total_cycles";

/// Writes per-access rows and the final summary in the format chosen by
/// `--format`, to any [`Write`] sink (typically locked stdout).
pub struct ReportWriter<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    /// Builds a writer for `format`, emitting the CSV header row immediately
    /// if `format` is [`OutputFormat::Csv`].
    pub fn new(out: W, format: OutputFormat) -> Self {
        let mut writer = Self { out, format };
        if format == OutputFormat::Csv {
            let _ = writeln!(writer.out, "{CSV_HEADER}");
        }
        writer
    }

    /// Renders one [`AccessResult`] row.
    pub fn write_access(&mut self, result: &AccessResult) {
        match self.format {
            OutputFormat::Human => self.write_access_human(result),
            OutputFormat::Csv => self.write_access_csv(result),
        }
    }

    fn write_access_human(&mut self, result: &AccessResult) {
        let _ = writeln!(
            self.out,
            "{:#018x}  L1 {:<9} L2 {:<9} L3 {:<9} total {:>3} cyc",
            result.address,
            format_level_human(&result.l1),
            format_level_human(&result.l2),
            format_level_human(&result.l3),
            result.total_cycles,
        );
    }

    fn write_access_csv(&mut self, result: &AccessResult) {
        let _ = writeln!(
            self.out,
            "{:#x},{},{},{},{},{},{},{},{},{},{}",
            result.address,
            outcome_csv(result.l1.outcome),
            result.l1.cycles,
            evicted_csv(result.l1.evicted),
            outcome_csv(result.l2.outcome),
            result.l2.cycles,
            evicted_csv(result.l2.evicted),
            outcome_csv(result.l3.outcome),
            result.l3.cycles,
            evicted_csv(result.l3.evicted),
            result.total_cycles,
        );
    }

    /// Renders the final [`StatsReport`]. A no-op in CSV mode: CSV output is
    /// parseable data only, so the summary block only appears in the human
    /// banner.
    pub fn write_summary(&mut self, report: &StatsReport) {
        if self.format == OutputFormat::Human {
            self.write_summary_human(report);
        }
    }

    fn write_summary_human(&mut self, report: &StatsReport) {
        let stats = &report.stats;
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "accesses      {}", stats.total_accesses);
        let _ = writeln!(
            self.out,
            "L1 hit rate   {}% ({}/{})",
            report.l1_hit_rate_pct, stats.l1_hits, stats.total_accesses
        );
        let _ = writeln!(
            self.out,
            "L2 hit rate   {}% ({}/{})",
            report.l2_hit_rate_pct, stats.l2_hits, stats.l1_misses
        );
        let _ = writeln!(
            self.out,
            "L3 hit rate   {}% ({}/{})",
            report.l3_hit_rate_pct, stats.l3_hits, stats.l2_misses
        );
        let _ = writeln!(self.out, "total cycles  {}", stats.total_cycles);
        let _ = writeln!(self.out, "avg cycles    {}", report.average_cycles);
    }
}

fn format_level_human(level: &LevelResult) -> String {
    match level.outcome {
        LevelOutcome::NotAccessed => "-".to_string(),
        LevelOutcome::Hit => format!("HIT({})", level.cycles),
        LevelOutcome::Miss => "MISS".to_string(),
    }
}

fn outcome_csv(outcome: LevelOutcome) -> &'static str {
    match outcome {
        LevelOutcome::NotAccessed => "-",
        LevelOutcome::Hit => "HIT",
        LevelOutcome::Miss => "MISS",
    }
}

fn evicted_csv(evicted: u64) -> String {
    if evicted == ALL_ONES {
        String::new()
    } else {
        format!("{evicted:#x}")
    }
}

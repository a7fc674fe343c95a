//! Buffered trace-line parser: the external collaborator the core's
//! `HierarchyDriver` never touches (distilled spec §1/§6 draws this
//! boundary explicitly).
//!
//! Grammar: `('R' | 'W') ' ' ('0x')? HEX{1..16}` per line. Leading/trailing
//! whitespace is tolerated, a carriage return is stripped, lines that don't
//! match are silently skipped, a trailing partial line (no final newline)
//! is accepted, and hex digits are parsed case-insensitively.

use std::io::{BufRead, Lines};

use cachesim_core::common::AccessKind;

/// One parsed trace line: an access kind and the address it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRecord {
    /// Whether the record was a read or a write.
    pub kind: AccessKind,
    /// The 64-bit address accessed.
    pub address: u64,
}

/// Pulls [`AccessRecord`]s out of any buffered line source, skipping
/// malformed lines rather than failing the whole trace.
pub struct TraceReader<R> {
    lines: Lines<R>,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps `reader`, whose lines will be parsed on demand by [`Iterator::next`].
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = AccessRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            let Ok(line) = line else { continue };
            if let Some(record) = parse_line(&line) {
                return Some(record);
            }
        }
    }
}

fn parse_line(line: &str) -> Option<AccessRecord> {
    let trimmed = line.trim().trim_end_matches('\r');
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let kind = match parts.next()? {
        "R" => AccessKind::Read,
        "W" => AccessKind::Write,
        _ => return None,
    };
    let hex = parts.next()?.trim();
    let hex = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")).unwrap_or(hex);
    if hex.is_empty() || hex.len() > 16 {
        return None;
    }
    u64::from_str_radix(hex, 16)
        .ok()
        .map(|address| AccessRecord { kind, address })
}

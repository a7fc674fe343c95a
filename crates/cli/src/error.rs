//! The CLI's one fallible boundary: opening the trace file.
//!
//! The simulation core has no recoverable error states (see the core
//! crate's design notes); the only externally-sourced failure in this whole
//! system is a trace path that cannot be opened. A malformed trace *line*
//! is not an error either — [`crate::trace::TraceReader`] silently skips it.

use std::path::PathBuf;

/// Errors surfaced at the CLI's I/O boundary.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// The trace file named by `--trace` could not be opened for reading.
    #[error("failed to open trace file {path}: {source}")]
    TraceOpen {
        /// The path that was passed to `--trace`.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

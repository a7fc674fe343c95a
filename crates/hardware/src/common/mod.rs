//! Common types and constants shared across the cache hierarchy engine.

/// Constants shared by every cache level (sentinel tag, line size, memory penalty).
pub mod constants;

pub use constants::{ALL_ONES, LINE_BYTES, LINE_OFFSET_BITS, MEMORY_PENALTY_CYCLES};

/// Classification of a single memory access record fed into the hierarchy.
///
/// Captured for completeness and passed through to the result record, but
/// has no effect on lookup, insertion, or replacement: reads and writes are
/// treated identically by every level and every policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    /// A read access.
    Read,
    /// A write access.
    Write,
}

//! Global constants shared across the cache hierarchy engine.

/// Sentinel tag value denoting an empty way, and the null "nothing evicted" tag.
///
/// Every bit set. Reserved by convention, matching the reverse-engineered
/// hardware behavior this simulator reproduces.
pub const ALL_ONES: u64 = u64::MAX;

/// Cache line size in bytes for every modeled level (64-byte lines).
pub const LINE_BYTES: u64 = 64;

/// Number of low address bits consumed by the line offset.
pub const LINE_OFFSET_BITS: u32 = LINE_BYTES.trailing_zeros();

/// Fixed memory-access penalty in cycles charged when all three levels miss.
pub const MEMORY_PENALTY_CYCLES: u64 = 200;

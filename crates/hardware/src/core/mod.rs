//! Core simulation components.
//!
//! There is no instruction pipeline or architectural state here — this
//! crate simulates a cache hierarchy, not a processor core — so this module
//! holds only the execution units, which in turn holds only `cache`.

/// Execution units (presently just the cache hierarchy).
pub mod units;

//! Integration-level tests organized by the component they exercise.

/// Table-driven checks over the six-CPU profile catalogue.
pub mod config;
/// Invariants that must hold across every replacement policy and profile.
pub mod invariants;

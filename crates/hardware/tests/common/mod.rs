//! Shared test fixtures for driving traces through a [`HierarchyDriver`]
//! without every test re-deriving address arithmetic by hand.

use cachesim_core::common::AccessKind;
use cachesim_core::config::CpuProfile;
use cachesim_core::sim::{AccessResult, HierarchyDriver};

/// Drives every `(kind, address)` pair in `trace` through a fresh
/// [`HierarchyDriver`] built from `selector`'s profile, returning one
/// [`AccessResult`] per access in order.
pub fn run_trace(selector: &str, trace: &[(AccessKind, u64)]) -> Vec<AccessResult> {
    let mut driver = HierarchyDriver::new(CpuProfile::for_selector(selector));
    trace
        .iter()
        .map(|&(kind, address)| driver.access(kind, address))
        .collect()
}

/// Builds a read-only trace from bare addresses, for tests that don't care
/// about the write path.
pub fn reads(addresses: &[u64]) -> Vec<(AccessKind, u64)> {
    addresses.iter().map(|&addr| (AccessKind::Read, addr)).collect()
}

/// Every CPU selector this crate supports, in the table order of the
/// distilled spec's §6 selector table.
pub const ALL_SELECTORS: [&str; 6] = ["nhm", "snb", "ivb", "hsw", "skl", "cfl"];

//! `HierarchyDriver`: sequences one memory access across L1 -> L2 -> L3.
//!
//! Mirrors the teacher's `sim::simulator::Simulator`, which owns the CPU and
//! pipeline side-by-side instead of threading borrows through both on every
//! tick: this driver owns the three [`CacheLevel`]s and the running
//! [`Stats`] outright, and is the only thing a caller needs to drive a
//! trace. It touches no I/O — reading a trace file and rendering the result
//! is the CLI crate's job (see the distilled spec's §1/§6 boundary).

use crate::common::{AccessKind, ALL_ONES, MEMORY_PENALTY_CYCLES};
use crate::config::CpuProfile;
use crate::core::units::cache::{CacheLevel, Outcome};
use crate::stats::Stats;

/// Per-level classification inside one [`AccessResult`].
///
/// `NotAccessed` covers levels the driver never reached because an earlier
/// level already hit — the distilled spec names this state in its result
/// record without formalizing it; this is a third variant rather than an
/// overload of `Miss` so a report writer can render `-` instead of a
/// misleading `MISS` for a level that was never looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelOutcome {
    /// An earlier level already satisfied the access; this level was never looked up.
    NotAccessed,
    /// The address was resident in this level.
    Hit,
    /// The address was not resident in this level and has now been installed.
    Miss,
}

/// One level's slice of a full [`AccessResult`]: outcome, cycles charged to
/// that level, and the tag evicted to make room (`ALL_ONES` if nothing was
/// displaced).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelResult {
    /// This level's classification for the access.
    pub outcome: LevelOutcome,
    /// Cycles attributed to this level; nonzero only for the level that served the access.
    pub cycles: u64,
    /// Tag evicted from this level, or `ALL_ONES` if none was displaced.
    pub evicted: u64,
}

impl LevelResult {
    const NOT_ACCESSED: Self = Self {
        outcome: LevelOutcome::NotAccessed,
        cycles: 0,
        evicted: ALL_ONES,
    };

    const fn hit(cycles: u64) -> Self {
        Self {
            outcome: LevelOutcome::Hit,
            cycles,
            evicted: ALL_ONES,
        }
    }

    const fn miss(evicted: u64) -> Self {
        Self {
            outcome: LevelOutcome::Miss,
            cycles: 0,
            evicted,
        }
    }
}

/// Full per-access result record: one [`LevelResult`] per level, the
/// address and access kind that produced it, and the total cycle cost.
///
/// Ephemeral by design — constructed by [`HierarchyDriver::access`],
/// consumed by a report writer, then discarded. `HierarchyDriver` keeps no
/// history of past records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessResult {
    /// The address that was looked up.
    pub address: u64,
    /// Whether this access was a read or a write (carried through, no effect on the result).
    pub kind: AccessKind,
    /// L1's slice of this access.
    pub l1: LevelResult,
    /// L2's slice of this access.
    pub l2: LevelResult,
    /// L3's slice of this access.
    pub l3: LevelResult,
    /// Total cycles charged: the latency of the level that served the
    /// access, or the fixed memory penalty if every level missed.
    pub total_cycles: u64,
}

/// Sequences one access across L1 -> L2 -> L3, short-circuiting on the
/// first hit, and owns the three levels plus the running [`Stats`].
///
/// Built once from a [`CpuProfile`] and driven one access at a time via
/// [`HierarchyDriver::access`] — there is no batch "run a trace" entry
/// point here; that loop lives in the CLI crate so this crate never reads a
/// byte of input itself.
pub struct HierarchyDriver {
    l1: CacheLevel,
    l2: CacheLevel,
    l3: CacheLevel,
    stats: Stats,
}

impl HierarchyDriver {
    /// Builds a cold hierarchy driver from `profile`.
    #[must_use]
    pub fn new(profile: CpuProfile) -> Self {
        Self {
            l1: CacheLevel::new(profile.l1),
            l2: CacheLevel::new(profile.l2),
            l3: CacheLevel::new(profile.l3),
            stats: Stats::default(),
        }
    }

    /// The running totals accumulated across every [`access`](Self::access) call so far.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Looks up `address` across L1 -> L2 -> L3, stopping at the first hit.
    ///
    /// Each level independently installs a block only on its own local
    /// miss: an L1 miss that hits in L2 does not insert into L1, and an
    /// L3-miss-to-memory does not insert into L2 or L3. This is the
    /// non-inclusion simplification the distilled spec calls out and
    /// deliberately preserves.
    pub fn access(&mut self, kind: AccessKind, address: u64) -> AccessResult {
        let (outcome, evicted) = self.l1.access(address);
        if outcome == Outcome::Hit {
            let cycles = self.l1.latency();
            self.stats.record_l1_hit();
            self.stats.record(cycles);
            tracing::trace!(address, cycles, "access served by L1");
            return AccessResult {
                address,
                kind,
                l1: LevelResult::hit(cycles),
                l2: LevelResult::NOT_ACCESSED,
                l3: LevelResult::NOT_ACCESSED,
                total_cycles: cycles,
            };
        }
        self.stats.record_l1_miss();
        let l1_result = LevelResult::miss(evicted);

        let (outcome, evicted) = self.l2.access(address);
        if outcome == Outcome::Hit {
            let cycles = self.l2.latency();
            self.stats.record_l2_hit();
            self.stats.record(cycles);
            tracing::trace!(address, cycles, "access served by L2");
            return AccessResult {
                address,
                kind,
                l1: l1_result,
                l2: LevelResult::hit(cycles),
                l3: LevelResult::NOT_ACCESSED,
                total_cycles: cycles,
            };
        }
        self.stats.record_l2_miss();
        let l2_result = LevelResult::miss(evicted);

        let (outcome, evicted) = self.l3.access(address);
        if outcome == Outcome::Hit {
            let cycles = self.l3.latency();
            self.stats.record_l3_hit();
            self.stats.record(cycles);
            tracing::trace!(address, cycles, "access served by L3");
            return AccessResult {
                address,
                kind,
                l1: l1_result,
                l2: l2_result,
                l3: LevelResult::hit(cycles),
                total_cycles: cycles,
            };
        }
        self.stats.record_l3_miss();
        self.stats.record(MEMORY_PENALTY_CYCLES);
        tracing::trace!(address, cycles = MEMORY_PENALTY_CYCLES, "access served by memory");
        AccessResult {
            address,
            kind,
            l1: l1_result,
            l2: l2_result,
            l3: LevelResult::miss(evicted),
            total_cycles: MEMORY_PENALTY_CYCLES,
        }
    }
}

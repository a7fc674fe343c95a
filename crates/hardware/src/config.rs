//! CPU profile catalogue for the cache hierarchy.
//!
//! This module defines the per-generation configuration of the three-level
//! cache hierarchy: number of sets, associativity, hit latency, and
//! replacement policy for L1, L2, and L3. Configuration is a closed
//! enumeration over six reverse-engineered Intel microarchitectures rather
//! than an open schema — there is no file format to parse, only a selector
//! string to map onto one of six static profiles.

/// One of the five QLRU hit-age rewrite tables (see [`QlruParams`]).
///
/// Each variant names the new age as a function of the hit way's *old* age
/// (0, 1, 2, 3), read left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitFn {
    /// 0, 0, 0, 0
    H00,
    /// 0, 0, 0, 1
    H10,
    /// 0, 0, 1, 1
    H11,
    /// 0, 0, 0, 2
    H20,
    /// 0, 0, 1, 2
    H21,
}

impl HitFn {
    /// Rewrites an old 2-bit age into the new age this hit function assigns.
    #[must_use]
    pub const fn apply(self, old_age: u8) -> u8 {
        let table: [u8; 4] = match self {
            Self::H00 => [0, 0, 0, 0],
            Self::H10 => [0, 0, 0, 1],
            Self::H11 => [0, 0, 1, 1],
            Self::H20 => [0, 0, 0, 2],
            Self::H21 => [0, 0, 1, 2],
        };
        table[old_age as usize]
    }
}

/// QLRU victim-selection scan order (see [`QlruParams`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceFn {
    /// Scan ways ascending (0..W); first empty-or-age-3 way wins, else way 0.
    R0,
    /// Same scan order as `R0`, named separately because it is paired with a
    /// distinct cold-age pool in the source policy catalogue.
    R1,
    /// Scan ways descending (W-1..0); first empty-or-age-3 way wins, else way W-1.
    R2,
}

/// QLRU global age-update rule, applied after every hit or miss (see [`QlruParams`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFn {
    /// Increment every way (including the touched way) by `3 - max_age_over_all_ways`, saturating at 3.
    U0,
    /// Increment every way except the touched way by `3 - max_age_of_others`, saturating at 3; no-op if the increment is 0.
    U1,
    /// If any way already has age 3, no-op; otherwise increment every way by 1, saturating at 3.
    U2,
    /// If any way already has age 3, no-op; otherwise increment every way except the touched way by 1, saturating at 3.
    U3,
}

/// The four-dimensional QLRU parameter family: hit (H), miss (M), replace (R), update (U).
///
/// `miss_age` is the constant age assigned to a freshly installed block
/// (M0..M3 in the distilled naming; stored directly as the 2-bit value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QlruParams {
    /// Hit-age rewrite rule.
    pub hit: HitFn,
    /// Age assigned to a newly inserted block.
    pub miss_age: u8,
    /// Victim-selection scan rule.
    pub replace: ReplaceFn,
    /// Global age-update rule.
    pub update: UpdateFn,
}

impl QlruParams {
    /// Coffee Lake L3: `QLRU_H11_M1_R0_U0`.
    pub const H11_M1_R0_U0: Self = Self {
        hit: HitFn::H11,
        miss_age: 1,
        replace: ReplaceFn::R0,
        update: UpdateFn::U0,
    };

    /// Ivy Bridge / Haswell / Skylake L3: `QLRU_H11_M1_R1_U2`.
    pub const H11_M1_R1_U2: Self = Self {
        hit: HitFn::H11,
        miss_age: 1,
        replace: ReplaceFn::R1,
        update: UpdateFn::U2,
    };

    /// Haswell-and-later L2: `QLRU_H00_M1_R2_U1`.
    pub const H00_M1_R2_U1: Self = Self {
        hit: HitFn::H00,
        miss_age: 1,
        replace: ReplaceFn::R2,
        update: UpdateFn::U1,
    };
}

/// The replacement policy driving victim selection for one cache level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Tree pseudo-LRU (binary tree of direction bits).
    TreePlru,
    /// Quad-age LRU, parameterised by [`QlruParams`].
    Qlru(QlruParams),
    /// 1-bit most-recently-used policy (Nehalem L3).
    Mru,
    /// 1-bit most-recently-used policy, "N" variant (Sandy Bridge L3).
    ///
    /// Observationally identical to [`PolicyKind::Mru`] in this simulator; see
    /// the design notes on the preserved MRU_N simplification.
    MruN,
}

/// Configuration for a single cache level: geometry, latency, and policy.
///
/// `set_mask` and `tag_shift` are derived once at construction so
/// `CacheLevel` never recomputes them on the per-access path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProfile {
    /// Number of sets (always a power of two).
    pub sets: usize,
    /// Associativity (ways per set).
    pub ways: usize,
    /// Hit latency in cycles.
    pub latency: u64,
    /// Replacement policy for this level.
    pub policy: PolicyKind,
    /// `sets - 1`, used to mask the set index out of a shifted address.
    pub set_mask: u64,
    /// Number of bits to shift an address right to obtain its tag (`6 + log2(sets)`).
    pub tag_shift: u32,
}

impl LevelProfile {
    /// Builds a level profile, deriving `set_mask` and `tag_shift` from `sets`.
    ///
    /// # Panics
    ///
    /// Panics if `sets` is zero or not a power of two; every profile in this
    /// module's catalogue satisfies that invariant by construction.
    #[must_use]
    pub fn new(sets: usize, ways: usize, latency: u64, policy: PolicyKind) -> Self {
        assert!(sets.is_power_of_two(), "cache level set count must be a power of two");
        Self {
            sets,
            ways,
            latency,
            policy,
            set_mask: (sets - 1) as u64,
            tag_shift: crate::common::LINE_OFFSET_BITS + sets.trailing_zeros(),
        }
    }
}

/// Immutable bundle describing all three levels of one CPU's cache hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuProfile {
    /// The CPU generation this profile models.
    pub cpu: CpuKind,
    /// L1 data cache configuration.
    pub l1: LevelProfile,
    /// L2 cache configuration.
    pub l2: LevelProfile,
    /// L3 cache configuration.
    pub l3: LevelProfile,
}

/// The six supported CPU generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CpuKind {
    /// Nehalem.
    Nehalem,
    /// Sandy Bridge.
    SandyBridge,
    /// Ivy Bridge.
    IvyBridge,
    /// Haswell.
    Haswell,
    /// Skylake.
    Skylake,
    /// Coffee Lake. The default profile for unrecognized selectors.
    #[default]
    CoffeeLake,
}

impl CpuKind {
    /// Maps a CPU selector string (case-insensitive) to a [`CpuKind`].
    ///
    /// Unrecognized selectors fall back to [`CpuKind::CoffeeLake`] — this is
    /// not an error, matching the distilled spec's framing of CPU selection
    /// as a closed enumeration with a defined default.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        match selector.to_ascii_lowercase().as_str() {
            "nhm" | "nehalem" => Self::Nehalem,
            "snb" | "sandybridge" => Self::SandyBridge,
            "ivb" | "ivybridge" => Self::IvyBridge,
            "hsw" | "haswell" => Self::Haswell,
            "skl" | "skylake" => Self::Skylake,
            "cfl" | "coffeelake" => Self::CoffeeLake,
            _ => Self::CoffeeLake,
        }
    }

    /// Builds the immutable [`CpuProfile`] for this CPU generation.
    #[must_use]
    pub fn profile(self) -> CpuProfile {
        let (l1, l2, l3) = match self {
            Self::Nehalem => (
                LevelProfile::new(64, 8, 4, PolicyKind::TreePlru),
                LevelProfile::new(512, 8, 12, PolicyKind::TreePlru),
                LevelProfile::new(4096, 16, 40, PolicyKind::Mru),
            ),
            Self::SandyBridge => (
                LevelProfile::new(64, 8, 4, PolicyKind::TreePlru),
                LevelProfile::new(512, 8, 12, PolicyKind::TreePlru),
                LevelProfile::new(2048, 16, 36, PolicyKind::MruN),
            ),
            Self::IvyBridge => (
                LevelProfile::new(64, 8, 4, PolicyKind::TreePlru),
                LevelProfile::new(512, 8, 12, PolicyKind::TreePlru),
                LevelProfile::new(2048, 16, 36, PolicyKind::Qlru(QlruParams::H11_M1_R1_U2)),
            ),
            Self::Haswell => (
                LevelProfile::new(64, 8, 4, PolicyKind::TreePlru),
                LevelProfile::new(512, 8, 12, PolicyKind::Qlru(QlruParams::H00_M1_R2_U1)),
                LevelProfile::new(2048, 16, 36, PolicyKind::Qlru(QlruParams::H11_M1_R1_U2)),
            ),
            Self::Skylake => (
                LevelProfile::new(64, 8, 4, PolicyKind::TreePlru),
                LevelProfile::new(1024, 4, 12, PolicyKind::Qlru(QlruParams::H00_M1_R2_U1)),
                LevelProfile::new(2048, 16, 42, PolicyKind::Qlru(QlruParams::H11_M1_R1_U2)),
            ),
            Self::CoffeeLake => (
                LevelProfile::new(64, 8, 4, PolicyKind::TreePlru),
                LevelProfile::new(512, 8, 12, PolicyKind::Qlru(QlruParams::H00_M1_R2_U1)),
                LevelProfile::new(2048, 16, 42, PolicyKind::Qlru(QlruParams::H11_M1_R0_U0)),
            ),
        };
        CpuProfile { cpu: self, l1, l2, l3 }
    }
}

impl CpuProfile {
    /// Builds the profile for a CPU selector string, falling back to Coffee Lake.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachesim_core::config::CpuProfile;
    ///
    /// let profile = CpuProfile::for_selector("hsw");
    /// assert_eq!(profile.l1.sets, 64);
    /// assert_eq!(profile.l2.latency, 12);
    ///
    /// // Unknown selectors degrade to Coffee Lake, not an error.
    /// let fallback = CpuProfile::for_selector("pentium");
    /// assert_eq!(fallback.cpu, cachesim_core::config::CpuKind::CoffeeLake);
    /// ```
    #[must_use]
    pub fn for_selector(selector: &str) -> Self {
        CpuKind::from_selector(selector).profile()
    }
}

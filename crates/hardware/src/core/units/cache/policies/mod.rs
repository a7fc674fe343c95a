//! Cache replacement policies: victim selection and age-update state machines.
//!
//! Every policy here is a pure function of the tag/age arrays `CacheLevel`
//! already owns for one set — there is no per-policy instance state to carry
//! around, so dispatch is a plain match over [`PolicyKind`] rather than a
//! boxed trait object. This also makes the hit/miss-age invariants in
//! `tests/` trivial to check directly against a bare `&mut [u8]`.

/// 1-bit most-recently-used policy (Nehalem L3, and the simplified Sandy Bridge L3 "N" variant).
pub mod mru;

/// Tree pseudo-LRU policy (L1 on every CPU; L2 on pre-Haswell CPUs).
pub mod plru;

/// Quad-age LRU policy family, parameterised by H/M/R/U (L2 from Haswell on; L3 on IVB/HSW/SKL/CFL).
pub mod qlru;

use crate::config::PolicyKind;

/// Operations a cache level's replacement policy must provide.
///
/// `select_victim`, `on_hit`, and `on_miss` mirror the three hooks
/// `CacheLevel::access` calls into, each handed the tag/age slices for the
/// one set being looked up.
pub trait ReplacementPolicy {
    /// The age value every way is initialized to at cold start.
    fn cold_age(self) -> u8;

    /// Chooses the way to evict from one set's `tags`/`ages` on a miss.
    fn select_victim(self, tags: &[u64], ages: &[u8]) -> usize;

    /// Rewrites `ages` after a hit at `way`.
    fn on_hit(self, way: usize, ages: &mut [u8]);

    /// Rewrites `ages` after a miss installed a new block at `victim_way`.
    fn on_miss(self, victim_way: usize, ages: &mut [u8]);
}

impl ReplacementPolicy for PolicyKind {
    fn cold_age(self) -> u8 {
        match self {
            Self::TreePlru => 0,
            Self::Qlru(_) => 3,
            Self::Mru | Self::MruN => mru::COLD_BIT,
        }
    }

    fn select_victim(self, tags: &[u64], ages: &[u8]) -> usize {
        match self {
            Self::TreePlru => plru::select_victim(tags.len(), ages[0]),
            Self::Qlru(params) => qlru::select_victim(tags, ages, params),
            Self::Mru | Self::MruN => mru::select_victim(tags, ages),
        }
    }

    fn on_hit(self, way: usize, ages: &mut [u8]) {
        match self {
            Self::TreePlru => plru::touch(ages, way),
            Self::Qlru(params) => qlru::on_hit(ages, way, params),
            Self::Mru | Self::MruN => mru::touch(ages, way),
        }
    }

    fn on_miss(self, victim_way: usize, ages: &mut [u8]) {
        match self {
            Self::TreePlru => plru::touch(ages, victim_way),
            Self::Qlru(params) => qlru::on_miss(ages, victim_way, params),
            Self::Mru | Self::MruN => mru::touch(ages, victim_way),
        }
    }
}

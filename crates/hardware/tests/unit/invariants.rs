//! Properties that must hold for every supported CPU profile, not just
//! Coffee Lake — the distilled spec's §8 "Invariants" and "Round-trip /
//! idempotence" sections, generalized across the whole selector table.

use cachesim_core::common::{AccessKind, ALL_ONES};
use cachesim_core::config::CpuProfile;
use cachesim_core::sim::{HierarchyDriver, LevelOutcome};
use rstest::rstest;

use crate::common::{reads, run_trace, ALL_SELECTORS};

#[rstest]
#[case::nehalem("nhm")]
#[case::sandybridge("snb")]
#[case::ivybridge("ivb")]
#[case::haswell("hsw")]
#[case::skylake("skl")]
#[case::coffeelake("cfl")]
fn hit_reproducibility_on_a_cold_hierarchy(#[case] selector: &str) {
    let mut driver = HierarchyDriver::new(CpuProfile::for_selector(selector));
    let miss = driver.access(AccessKind::Read, 0x1234_5000);
    assert_ne!(miss.l1.outcome, LevelOutcome::Hit);

    let hit = driver.access(AccessKind::Read, 0x1234_5000);
    assert_eq!(hit.l1.outcome, LevelOutcome::Hit);
}

#[rstest]
#[case::nehalem("nhm")]
#[case::sandybridge("snb")]
#[case::ivybridge("ivb")]
#[case::haswell("hsw")]
#[case::skylake("skl")]
#[case::coffeelake("cfl")]
fn determinism_across_profiles(#[case] selector: &str) {
    let addresses: Vec<u64> = (0..64).map(|i| i * 0x4000).collect();
    let trace = reads(&addresses);

    let results_a = run_trace(selector, &trace);
    let results_b = run_trace(selector, &trace);
    assert_eq!(results_a, results_b);
}

#[test]
fn locality_distinct_l1_sets_never_interfere_across_every_profile() {
    for selector in ALL_SELECTORS {
        let mut driver = HierarchyDriver::new(CpuProfile::for_selector(selector));
        let l1 = CpuProfile::for_selector(selector).l1;
        let stride = 1u64 << (6 + l1.sets.trailing_zeros());

        driver.access(AccessKind::Read, 0x1000);
        let other_set = driver.access(AccessKind::Read, 0x1000 + stride);
        assert_ne!(
            other_set.l1.outcome,
            LevelOutcome::Hit,
            "{selector}: a different L1 set must start cold"
        );
        let original_still_resident = driver.access(AccessKind::Read, 0x1000);
        assert_eq!(
            original_still_resident.l1.outcome,
            LevelOutcome::Hit,
            "{selector}: touching a different set must not evict the original"
        );
    }
}

#[test]
fn uniqueness_filling_l1_with_distinct_tags_never_silently_drops_one() {
    // L1 is Tree-PLRU on every supported CPU. Installing exactly `ways`
    // distinct tags into one cold set never evicts a slot that's still
    // cold, so all `ways` addresses must still be resident afterward.
    for selector in ALL_SELECTORS {
        let mut driver = HierarchyDriver::new(CpuProfile::for_selector(selector));
        let l1 = CpuProfile::for_selector(selector).l1;
        let stride = 1u64 << l1.tag_shift;

        for way in 0..l1.ways as u64 {
            let result = driver.access(AccessKind::Read, way * stride);
            assert_ne!(result.l1.outcome, LevelOutcome::Hit, "{selector}: way {way} should start cold");
        }
        for way in 0..l1.ways as u64 {
            let result = driver.access(AccessKind::Read, way * stride);
            assert_eq!(
                result.l1.outcome,
                LevelOutcome::Hit,
                "{selector}: way {way} should still be resident after filling the set exactly full"
            );
        }
    }
}

#[test]
fn tree_plru_pinning_repeated_access_never_evicts_the_pinned_way() {
    let mut driver = HierarchyDriver::new(CpuProfile::for_selector("cfl"));
    let l1 = CpuProfile::for_selector("cfl").l1;

    let pinned = 0u64;
    driver.access(AccessKind::Read, pinned);

    // Fill the remaining W-1 ways with distinct tags, re-touching `pinned`
    // between each so it is always the most recently used way.
    for way in 1..l1.ways as u64 {
        let filler = driver.access(AccessKind::Read, way << l1.tag_shift);
        assert_ne!(filler.l1.outcome, LevelOutcome::Hit);
        let repin = driver.access(AccessKind::Read, pinned);
        assert_eq!(repin.l1.outcome, LevelOutcome::Hit, "pinned way must survive fill step {way}");
    }
}

#[test]
fn qlru_levels_stay_well_behaved_under_heavy_reuse() {
    // Haswell's L2 runs QLRU_H00_M1_R2_U1 and its L3 runs
    // QLRU_H11_M1_R1_U2; age-range correctness for the policy itself is
    // checked directly in `core::units::cache::policies::qlru`'s unit
    // tests. This end-to-end pass just confirms the hierarchy keeps
    // producing sane, monotonic stats under sustained reuse pressure.
    let mut driver = HierarchyDriver::new(CpuProfile::for_selector("hsw"));
    let mut previous_total: u64 = 0;
    for round in 0..4 {
        for address in 0..128u64 {
            let result = driver.access(AccessKind::Read, address * 64 + round);
            assert!(result.total_cycles > 0);
        }
        let total = driver.stats().total_accesses;
        assert!(total > previous_total);
        previous_total = total;
    }
}

#[test]
fn evicted_tag_sentinel_is_all_ones_for_every_cold_slot_across_profiles() {
    for selector in ALL_SELECTORS {
        let mut driver = HierarchyDriver::new(CpuProfile::for_selector(selector));
        let result = driver.access(AccessKind::Write, 0x9000);
        assert_eq!(result.l1.evicted, ALL_ONES, "{selector}");
        assert_eq!(result.l2.evicted, ALL_ONES, "{selector}");
        assert_eq!(result.l3.evicted, ALL_ONES, "{selector}");
    }
}

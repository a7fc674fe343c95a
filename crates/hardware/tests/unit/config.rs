//! Table-driven checks that every supported CPU's profile matches the
//! distilled spec's §6 selector table exactly.

use cachesim_core::config::{CpuProfile, PolicyKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("nhm", 64, 8, 4, 512, 8, 12, 4096, 16, 40)]
#[case("snb", 64, 8, 4, 512, 8, 12, 2048, 16, 36)]
#[case("ivb", 64, 8, 4, 512, 8, 12, 2048, 16, 36)]
#[case("hsw", 64, 8, 4, 512, 8, 12, 2048, 16, 36)]
#[case("skl", 64, 8, 4, 1024, 4, 12, 2048, 16, 42)]
#[case("cfl", 64, 8, 4, 512, 8, 12, 2048, 16, 42)]
fn geometry_matches_selector_table(
    #[case] selector: &str,
    #[case] l1_sets: usize,
    #[case] l1_ways: usize,
    #[case] l1_latency: u64,
    #[case] l2_sets: usize,
    #[case] l2_ways: usize,
    #[case] l2_latency: u64,
    #[case] l3_sets: usize,
    #[case] l3_ways: usize,
    #[case] l3_latency: u64,
) {
    let profile = CpuProfile::for_selector(selector);

    assert_eq!(profile.l1.sets, l1_sets);
    assert_eq!(profile.l1.ways, l1_ways);
    assert_eq!(profile.l1.latency, l1_latency);

    assert_eq!(profile.l2.sets, l2_sets);
    assert_eq!(profile.l2.ways, l2_ways);
    assert_eq!(profile.l2.latency, l2_latency);

    assert_eq!(profile.l3.sets, l3_sets);
    assert_eq!(profile.l3.ways, l3_ways);
    assert_eq!(profile.l3.latency, l3_latency);
}

#[rstest]
#[case("nhm", PolicyKind::Mru)]
#[case("snb", PolicyKind::MruN)]
fn l3_policy_matches_selector_table_mru_generations(#[case] selector: &str, #[case] expected: PolicyKind) {
    assert_eq!(CpuProfile::for_selector(selector).l3.policy, expected);
}

#[rstest]
#[case("ivb")]
#[case("hsw")]
#[case("skl")]
#[case("cfl")]
fn l3_policy_is_qlru_from_ivy_bridge_onward(#[case] selector: &str) {
    assert!(matches!(
        CpuProfile::for_selector(selector).l3.policy,
        PolicyKind::Qlru(_)
    ));
}

#[rstest]
#[case("", "cfl")]
#[case("pentium", "cfl")]
#[case("UNKNOWN_CPU", "cfl")]
fn unrecognized_selectors_fall_back_to_coffee_lake(#[case] selector: &str, #[case] fallback: &str) {
    assert_eq!(CpuProfile::for_selector(selector), CpuProfile::for_selector(fallback));
}

#[rstest]
#[case("NHM", "nhm")]
#[case("Nehalem", "nehalem")]
#[case("SkL", "skl")]
fn selectors_are_case_insensitive(#[case] mixed_case: &str, #[case] canonical: &str) {
    assert_eq!(
        CpuProfile::for_selector(mixed_case),
        CpuProfile::for_selector(canonical)
    );
}

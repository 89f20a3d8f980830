//! Statistics Tests.
//!
//! Verifies derived rates on empty and populated counters, transition counting,
//! and the report layout.

use rvpipe_core::core::pipeline::skid::Transition;
use rvpipe_core::stats::SimStats;

#[test]
fn rates_are_zero_before_any_activity() {
    let stats = SimStats::default();
    assert_eq!(stats.dcache_hit_rate(), 0.0);
    assert_eq!(stats.ipc(), 0.0);
}

#[test]
fn hit_rate_and_ipc() {
    let stats = SimStats {
        cycles: 8,
        retired: 6,
        dcache_hits: 3,
        dcache_misses: 1,
        ..SimStats::default()
    };
    assert!((stats.dcache_hit_rate() - 0.75).abs() < f64::EPSILON);
    assert!((stats.ipc() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn only_skid_events_are_counted() {
    let mut stats = SimStats::default();
    stats.record_transitions(&[
        Transition::Load,
        Transition::Overflow,
        Transition::Hold,
        Transition::Drain,
        Transition::Overflow,
        Transition::Consume,
    ]);
    assert_eq!((stats.overflows, stats.drains), (2, 1));
}

#[test]
fn report_lists_every_counter() {
    let stats = SimStats {
        cycles: 10,
        accepted: 5,
        retired: 4,
        loads: 2,
        dcache_hits: 1,
        dcache_misses: 1,
        sink_stall_cycles: 3,
        overflows: 1,
        drains: 1,
    };
    let report = stats.to_string();
    for line in [
        "sim_cycles               10",
        "sim_accepted             5",
        "sim_retired              4",
        "sim_ipc                  0.4000",
        "dcache.hit_rate        50.00%",
        "sink_stall_cycles      3",
        "skid.drains            1",
    ] {
        assert!(report.contains(line), "missing {line:?} in\n{report}");
    }
}

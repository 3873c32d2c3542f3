//! Summary statistics tests.
//!
//! Verifies averages, CPU accounting, and hit/miss percentages, including the
//! zero-denominator cases.

use std::num::NonZeroU64;

use pretty_assertions::assert_eq;

use ossim_core::sched::{ProcessSpec, ScheduleResult, simulate_round_robin};
use ossim_core::simulate_lru;
use ossim_core::stats::{CacheStats, ScheduleStats};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn schedule_stats_without_idle_time() {
    let specs = [ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 1, 3)];
    let result = simulate_round_robin(&specs, NonZeroU64::new(2).unwrap());
    let stats = ScheduleStats::from_result(&result);

    assert_eq!(stats.completed, 2);
    assert!(close(stats.avg_waiting_time, 3.0));
    assert!(close(stats.avg_turnaround_time, 7.0));
    assert_eq!((stats.makespan, stats.busy_time, stats.idle_time), (8, 8, 0));
    assert!(close(stats.cpu_utilization, 100.0));
}

#[test]
fn schedule_stats_count_idle_gap() {
    let specs = [ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 5, 3)];
    let result = simulate_round_robin(&specs, NonZeroU64::new(2).unwrap());
    let stats = ScheduleStats::from_result(&result);

    assert!(close(stats.avg_waiting_time, 0.0));
    assert!(close(stats.avg_turnaround_time, 2.5));
    assert_eq!((stats.makespan, stats.busy_time, stats.idle_time), (8, 5, 3));
    assert!(close(stats.cpu_utilization, 62.5));
}

#[test]
fn schedule_stats_of_empty_run_are_zero() {
    let stats = ScheduleStats::from_result(&ScheduleResult::default());
    assert_eq!(stats, ScheduleStats::default());
}

#[test]
fn cache_stats() {
    let result = simulate_lru(3, &[1, 2, 3, 1, 4, 5]);
    let stats = CacheStats::from_result(&result);

    assert_eq!(stats.accesses, 6);
    assert_eq!(stats.evictions, 2);
    assert!(close(stats.hit_rate, 100.0 / 6.0));
    assert!(close(stats.hit_rate + stats.miss_rate, 100.0));
}

#[test]
fn cache_stats_of_empty_run_are_zero() {
    let result = simulate_lru::<u8>(2, &[]);
    assert_eq!(CacheStats::from_result(&result), CacheStats::default());
}

//! Summary statistics for simulation results.
//!
//! This module derives the aggregate figures reported beside the step tables:
//! 1. **Scheduling:** Average waiting and turnaround time, makespan, CPU busy/idle time.
//! 2. **Caching:** Access count and hit/miss percentages.
//!
//! All divisions are guarded so empty runs report zeros rather than NaN.

use serde::Serialize;

use crate::cache::CacheResult;
use crate::common::Ticks;
use crate::sched::ScheduleResult;

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Aggregate figures for a Round-Robin run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    /// Number of processes that completed.
    pub completed: usize,
    /// Mean waiting time over completed processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over completed processes.
    pub avg_turnaround_time: f64,
    /// Clock value when the last slice ended.
    pub makespan: Ticks,
    /// Ticks the CPU spent running a process.
    pub busy_time: Ticks,
    /// Ticks between 0 and the makespan with nothing running.
    pub idle_time: Ticks,
    /// `busy_time / makespan` as a percentage.
    pub cpu_utilization: f64,
}

impl ScheduleStats {
    /// Computes the summary for `result`.
    pub fn from_result(result: &ScheduleResult) -> Self {
        let finished: Vec<_> = result
            .processes
            .iter()
            .filter_map(|p| p.waiting_time.zip(p.turnaround_time))
            .collect();
        let completed = finished.len();
        let total_waiting: Ticks = finished.iter().map(|&(w, _)| w).sum();
        let total_turnaround: Ticks = finished.iter().map(|&(_, t)| t).sum();

        let makespan = result.makespan();
        let busy_time: Ticks = result.timeline.iter().map(|e| e.duration()).sum();
        let idle_time = makespan.saturating_sub(busy_time);

        Self {
            completed,
            avg_waiting_time: ratio(total_waiting, completed as u64),
            avg_turnaround_time: ratio(total_turnaround, completed as u64),
            makespan,
            busy_time,
            idle_time,
            cpu_utilization: ratio(busy_time, makespan) * 100.0,
        }
    }
}

/// Aggregate figures for an LRU run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Total references processed.
    pub accesses: usize,
    /// Hits as a percentage of accesses.
    pub hit_rate: f64,
    /// Faults as a percentage of accesses.
    pub miss_rate: f64,
    /// Number of references that evicted a page.
    pub evictions: usize,
}

impl CacheStats {
    /// Computes the summary for `result`.
    pub fn from_result<P>(result: &CacheResult<P>) -> Self {
        let accesses = result.accesses();
        let hit_rate = ratio(result.hits as u64, accesses as u64) * 100.0;
        let miss_rate = if accesses == 0 { 0.0 } else { 100.0 - hit_rate };
        Self {
            accesses,
            hit_rate,
            miss_rate,
            evictions: result.history.iter().filter(|s| s.evicted.is_some()).count(),
        }
    }
}

//! Round-Robin scheduling engine.
//!
//! Simulates one CPU with a fixed time quantum. Processes are considered in arrival
//! order, ties broken by input order, and the clock jumps forward over idle gaps.
//!
//! # Queue discipline
//!
//! - Only the earliest arrival is queued before the first slice. Processes sharing its
//!   arrival time join through the arrival scan after that slice.
//! - At every slice boundary, newly arrived processes are queued before the process that
//!   just ran is put back.
//! - When the queue drains while work remains, the earliest unqueued process is queued
//!   and the clock jumps to its arrival.

use std::num::NonZeroU64;

use serde::Serialize;

use super::process::{Process, ProcessSpec};
use super::ready_queue::ReadyQueue;
use crate::common::{ProcessId, Ticks};

/// One executed slice of CPU time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Process that ran.
    pub process_id: ProcessId,
    /// Clock value when the slice started.
    pub start_time: Ticks,
    /// Clock value when the slice finished.
    pub end_time: Ticks,
}

impl TimelineEntry {
    /// Length of the slice in ticks.
    pub const fn duration(&self) -> Ticks {
        self.end_time - self.start_time
    }
}

/// Outcome of a Round-Robin run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// Final process records, ordered by id.
    pub processes: Vec<Process>,
    /// Executed slices in execution order.
    pub timeline: Vec<TimelineEntry>,
}

impl ScheduleResult {
    /// Looks up a process record by id.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Clock value at which the last slice ended, or 0 if nothing ran.
    pub fn makespan(&self) -> Ticks {
        self.timeline.last().map_or(0, |e| e.end_time)
    }
}

/// Simulates Round-Robin scheduling of `processes` with the given quantum.
///
/// The input is left untouched; a working copy is simulated and returned ordered by id.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU64;
/// use ossim_core::{ProcessSpec, simulate_round_robin};
///
/// let procs = [ProcessSpec::new(1, 0, 3), ProcessSpec::new(2, 0, 2)];
/// let result = simulate_round_robin(&procs, NonZeroU64::new(2).unwrap());
///
/// let order: Vec<_> = result.timeline.iter().map(|e| e.process_id).collect();
/// assert_eq!(order, [1, 2, 1]);
/// assert_eq!(result.makespan(), 5);
/// ```
pub fn simulate_round_robin(processes: &[ProcessSpec], quantum: NonZeroU64) -> ScheduleResult {
    let quantum = quantum.get();
    let mut procs: Vec<Process> = processes.iter().map(Process::from_spec).collect();
    procs.sort_by_key(|p| p.arrival_time);

    let n = procs.len();
    tracing::debug!(processes = n, quantum, "starting round-robin run");

    let mut queue = ReadyQueue::with_len(n);
    let mut timeline = Vec::new();
    let mut time: Ticks = 0;
    let mut completed = 0;

    if n > 0 {
        let _ = queue.admit(0);
    }

    while completed < n {
        let Some(i) = queue.pop() else {
            break;
        };

        let current = &mut procs[i];
        if time < current.arrival_time {
            time = current.arrival_time;
        }

        let start_time = time;
        time += current.run_for(quantum);
        timeline.push(TimelineEntry {
            process_id: current.id,
            start_time,
            end_time: time,
        });
        tracing::trace!(
            pid = current.id,
            start = start_time,
            end = time,
            remaining = current.remaining_time,
            "slice"
        );

        if current.remaining_time == 0 {
            current.complete(time);
            completed += 1;
            tracing::debug!(pid = current.id, completion = time, "process complete");
        }
        let unfinished = current.remaining_time > 0;

        admit_arrivals(&procs, &mut queue, time);

        if unfinished {
            queue.requeue(i);
        }

        if queue.is_empty() && completed < n {
            let next = (0..n).find(|&k| !queue.is_admitted(k) && procs[k].remaining_time > 0);
            if let Some(k) = next {
                let _ = queue.admit(k);
                tracing::debug!(from = time, to = procs[k].arrival_time, "cpu idle");
                time = procs[k].arrival_time;
            }
        }
    }

    procs.sort_by_key(|p| p.id);
    ScheduleResult {
        processes: procs,
        timeline,
    }
}

/// Queues every not-yet-admitted process that has arrived by `time` and still needs CPU,
/// in arrival order.
fn admit_arrivals(procs: &[Process], queue: &mut ReadyQueue, time: Ticks) {
    for (k, p) in procs.iter().enumerate() {
        if p.arrival_time <= time && p.remaining_time > 0 && queue.admit(k) {
            tracing::trace!(pid = p.id, at = time, "arrived");
        }
    }
}

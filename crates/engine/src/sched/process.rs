//! Process records for the scheduler.
//!
//! A [`ProcessSpec`] is what the user supplies; a [`Process`] is the engine's working
//! record for one run, carrying the remaining time and, once finished, the timing metrics.

use serde::{Deserialize, Serialize};

use crate::common::{ProcessId, Ticks};

/// Immutable description of one process as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSpec {
    /// 1-based identity in input order.
    pub id: ProcessId,
    /// Instant the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time the process needs.
    pub burst_time: Ticks,
}

impl ProcessSpec {
    /// Creates a process spec.
    pub const fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// A process as simulated and reported by the scheduler.
///
/// The three metrics are `None` until `remaining_time` reaches zero, and are set exactly
/// once at that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// 1-based identity in input order.
    pub id: ProcessId,
    /// Instant the process became eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time the process needed.
    pub burst_time: Ticks,
    /// CPU time still owed; zero once complete.
    pub remaining_time: Ticks,
    /// Clock value at which the last slice finished.
    pub completion_time: Option<Ticks>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Option<Ticks>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<Ticks>,
}

impl Process {
    /// Starts a fresh working record from a spec.
    pub const fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            remaining_time: spec.burst_time,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Returns true once the process has been assigned a completion time.
    pub const fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Runs the process for up to `quantum` ticks and returns the ticks actually used.
    pub fn run_for(&mut self, quantum: Ticks) -> Ticks {
        let slice = quantum.min(self.remaining_time);
        self.remaining_time -= slice;
        slice
    }

    /// Records completion at `time` and derives turnaround and waiting time.
    ///
    /// Only the first call has any effect, and only once `remaining_time` is zero.
    pub(crate) fn complete(&mut self, time: Ticks) {
        if self.remaining_time != 0 || self.is_complete() {
            return;
        }
        let turnaround = time - self.arrival_time;
        self.completion_time = Some(time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}

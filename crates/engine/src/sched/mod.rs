//! Round-Robin CPU scheduling.
//!
//! This module simulates a single CPU shared by a set of processes under Round-Robin
//! scheduling with a fixed time quantum. It includes:
//! 1. **Processes:** Immutable input specs and the mutable per-run process records.
//! 2. **Ready Queue:** FIFO of process indices with an admit-once guard.
//! 3. **Engine:** The slice-by-slice simulation producing metrics and a timeline.

/// Process input specs and per-run process records.
pub mod process;

/// FIFO ready queue with admit-once tracking.
pub mod ready_queue;

/// The Round-Robin simulation loop and its result types.
pub mod round_robin;

pub use process::{Process, ProcessSpec};
pub use ready_queue::ReadyQueue;
pub use round_robin::{ScheduleResult, TimelineEntry, simulate_round_robin};

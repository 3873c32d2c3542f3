//! Step-by-step operating-systems algorithm simulators.
//!
//! This crate computes the exact traces an instructor would produce by hand for two
//! classic algorithms, along with the layers that feed and present them:
//! 1. **Scheduling:** Round-Robin CPU scheduling with a fixed quantum, idle-gap handling,
//!    and per-process completion/turnaround/waiting metrics.
//! 2. **Caching:** Least-Recently-Used page replacement with a per-reference trace of the
//!    resident set.
//! 3. **Input:** Parsing and validation of raw user-entered values into engine inputs.
//! 4. **Reporting:** Summary statistics and plain-text tables for the results.
//!
//! Both engines are pure functions: they never mutate their input and return a freshly
//! allocated result.
//!
//! ```
//! use std::num::NonZeroU64;
//! use ossim_core::{ProcessSpec, simulate_lru, simulate_round_robin};
//!
//! let procs = [ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 1, 3)];
//! let quantum = NonZeroU64::new(2).unwrap();
//! let schedule = simulate_round_robin(&procs, quantum);
//! assert_eq!(schedule.processes[0].completion_time, Some(8));
//!
//! let cache = simulate_lru(3, &[1, 2, 3, 1, 4, 5]);
//! assert_eq!((cache.hits, cache.faults), (1, 5));
//! ```

/// Shared types and error definitions.
pub mod common;
/// Run defaults (quantum, capacity) and JSON configuration loading.
pub mod config;
/// Input adapter: raw text to validated engine inputs.
pub mod input;
/// Plain-text rendering of simulation results.
pub mod report;
/// Derived summary statistics.
pub mod stats;

/// LRU cache / page-replacement engine.
pub mod cache;
/// Round-Robin scheduling engine.
pub mod sched;

pub use crate::cache::{AccessStatus, CacheResult, TraceStep, simulate_lru};
pub use crate::config::Config;
pub use crate::sched::{Process, ProcessSpec, ScheduleResult, TimelineEntry, simulate_round_robin};

//! Round-Robin invariants over generated workloads.
//!
//! Every completed schedule must satisfy:
//! - `turnaround = completion - arrival` and `waiting = turnaround - burst`.
//! - The slices of a process sum to its burst, and no slice exceeds the quantum.
//! - Slices never overlap, never start before the process arrived, and are ordered.

use std::collections::HashMap;
use std::num::NonZeroU64;

use proptest::prelude::*;

use ossim_core::sched::{ProcessSpec, simulate_round_robin};

fn workload() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0u64..30, 1u64..12), 1..10).prop_map(|rows| {
        rows.into_iter()
            .zip(1..)
            .map(|((arrival, burst), id)| ProcessSpec::new(id, arrival, burst))
            .collect()
    })
}

proptest! {
    #[test]
    fn metrics_are_consistent(specs in workload(), q in 1u64..6) {
        let result = simulate_round_robin(&specs, NonZeroU64::new(q).unwrap());

        prop_assert_eq!(result.processes.len(), specs.len());
        for p in &result.processes {
            let completion = p.completion_time.unwrap();
            let turnaround = p.turnaround_time.unwrap();
            let waiting = p.waiting_time.unwrap();
            prop_assert_eq!(turnaround, completion - p.arrival_time);
            prop_assert_eq!(waiting, turnaround - p.burst_time);
            prop_assert!(completion >= p.arrival_time + p.burst_time);
        }
    }

    #[test]
    fn slices_cover_each_burst(specs in workload(), q in 1u64..6) {
        let result = simulate_round_robin(&specs, NonZeroU64::new(q).unwrap());

        let mut ran: HashMap<u32, u64> = HashMap::new();
        for e in &result.timeline {
            prop_assert!(e.duration() >= 1 && e.duration() <= q);
            *ran.entry(e.process_id).or_default() += e.duration();
        }
        for s in &specs {
            prop_assert_eq!(ran.get(&s.id).copied(), Some(s.burst_time));
        }
    }

    #[test]
    fn timeline_is_ordered_and_respects_arrivals(specs in workload(), q in 1u64..6) {
        let result = simulate_round_robin(&specs, NonZeroU64::new(q).unwrap());

        for pair in result.timeline.windows(2) {
            prop_assert!(pair[0].end_time <= pair[1].start_time);
        }
        for e in &result.timeline {
            let arrival = result.process(e.process_id).unwrap().arrival_time;
            prop_assert!(e.start_time >= arrival);
        }
        let last_completion = result.processes.iter().filter_map(|p| p.completion_time).max();
        prop_assert_eq!(Some(result.makespan()), last_completion);
    }

    /// The engine is a pure function of its input.
    #[test]
    fn rerun_is_identical(specs in workload(), q in 1u64..6) {
        let q = NonZeroU64::new(q).unwrap();
        prop_assert_eq!(simulate_round_robin(&specs, q), simulate_round_robin(&specs, q));
    }
}

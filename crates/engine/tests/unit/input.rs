//! Input Adapter Tests.
//!
//! Verifies that raw text is either turned into a valid engine input or rejected with the
//! matching [`InputError`], and that rejected entries leave no partial state behind.

use std::num::NonZeroU64;

use pretty_assertions::assert_eq;
use rstest::rstest;

use ossim_core::common::InputError;
use ossim_core::config::{CacheConfig, SchedulerConfig};
use ossim_core::input::{
    CacheInput, ProcessTable, SchedulerInput, capacity_or_default, parse_capacity, parse_pages,
    parse_processes, parse_quantum, quantum_or_default, split_process,
};
use ossim_core::sched::ProcessSpec;

fn allow_zero() -> CacheConfig {
    CacheConfig {
        allow_zero_capacity: true,
        ..CacheConfig::default()
    }
}

// ══════════════════════════════════════════════════════════
// 1. Process entry
// ══════════════════════════════════════════════════════════

#[test]
fn ids_follow_entry_order() {
    let mut table = ProcessTable::new();
    let _ = table.add("3", "1").unwrap();
    let _ = table.add(" 0 ", " 5 ").unwrap();

    assert_eq!(
        table.specs(),
        [ProcessSpec::new(1, 3, 1), ProcessSpec::new(2, 0, 5)]
    );
}

#[rstest]
#[case::empty_arrival("", "3", InputError::EmptyField { field: "arrival time" })]
#[case::blank_burst("0", "  ", InputError::EmptyField { field: "burst time" })]
#[case::text_arrival("soon", "3", InputError::NotAnInteger { field: "arrival time", value: "soon".into() })]
#[case::fractional_burst("0", "2.5", InputError::NotAnInteger { field: "burst time", value: "2.5".into() })]
#[case::negative_arrival("-1", "3", InputError::NegativeArrival(-1))]
#[case::zero_burst("0", "0", InputError::NonPositiveBurst(0))]
#[case::negative_burst("0", "-4", InputError::NonPositiveBurst(-4))]
fn rejected_process_rows(#[case] arrival: &str, #[case] burst: &str, #[case] expected: InputError) {
    let mut table = ProcessTable::new();
    assert_eq!(table.add(arrival, burst), Err(expected));
    assert!(table.is_empty());
}

#[test]
fn split_process_requires_one_colon() {
    assert_eq!(split_process("0:5"), Ok(("0", "5")));
    assert_eq!(
        split_process("0-5"),
        Err(InputError::MalformedProcess("0-5".into()))
    );
    assert_eq!(
        split_process("0:5:1"),
        Err(InputError::MalformedProcess("0:5:1".into()))
    );
}

#[test]
fn parse_processes_stops_at_first_error() {
    let table = parse_processes(&["0:5", "1:3"]).unwrap();
    assert_eq!(table.len(), 2);

    assert_eq!(
        parse_processes(&["0:5", "1:x", "bad"]),
        Err(InputError::NotAnInteger {
            field: "burst time",
            value: "x".into()
        })
    );
}

// ══════════════════════════════════════════════════════════
// 2. Quantum and capacity
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("2", Ok(2))]
#[case(" 10 ", Ok(10))]
#[case("0", Err(InputError::NonPositiveQuantum(0)))]
#[case("-3", Err(InputError::NonPositiveQuantum(-3)))]
#[case("", Err(InputError::EmptyField { field: "time quantum" }))]
fn quantum_parsing(#[case] text: &str, #[case] expected: Result<u64, InputError>) {
    assert_eq!(parse_quantum(text).map(NonZeroU64::get), expected);
}

#[test]
fn quantum_falls_back_to_config() {
    let config = SchedulerConfig { quantum: 4 };
    assert_eq!(quantum_or_default(None, &config).map(NonZeroU64::get), Ok(4));
    assert_eq!(quantum_or_default(Some("1"), &config).map(NonZeroU64::get), Ok(1));

    let zero = SchedulerConfig { quantum: 0 };
    assert_eq!(
        quantum_or_default(None, &zero),
        Err(InputError::NonPositiveQuantum(0))
    );
}

#[rstest]
#[case("3", Ok(3))]
#[case("-1", Err(InputError::NegativeCapacity(-1)))]
#[case("0", Err(InputError::ZeroCapacity))]
#[case("three", Err(InputError::NotAnInteger { field: "cache capacity", value: "three".into() }))]
fn capacity_parsing(#[case] text: &str, #[case] expected: Result<usize, InputError>) {
    assert_eq!(parse_capacity(text, &CacheConfig::default()), expected);
}

#[test]
fn zero_capacity_allowed_by_config() {
    assert_eq!(parse_capacity("0", &allow_zero()), Ok(0));
    assert_eq!(
        capacity_or_default(None, &CacheConfig::default()),
        Ok(3)
    );
    let zero_default = CacheConfig {
        capacity: 0,
        ..CacheConfig::default()
    };
    assert_eq!(
        capacity_or_default(None, &zero_default),
        Err(InputError::ZeroCapacity)
    );
}

// ══════════════════════════════════════════════════════════
// 3. Reference strings
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("1, 2, 3, 1, 4, 5", vec![1, 2, 3, 1, 4, 5])]
#[case("7,0,1", vec![7, 0, 1])]
#[case("  42  ", vec![42])]
#[case("1, , 2,", vec![1, 2])]
#[case("1, two, 3", vec![1, 3])]
#[case("-1, 1", vec![-1, 1])]
fn page_parsing(#[case] text: &str, #[case] expected: Vec<i64>) {
    assert_eq!(parse_pages(text), Ok(expected));
}

#[rstest]
#[case("")]
#[case(" , ,")]
#[case("a, b")]
fn no_valid_pages(#[case] text: &str) {
    assert_eq!(
        parse_pages(text),
        Err(InputError::NoPages(text.trim().to_owned()))
    );
}

// ══════════════════════════════════════════════════════════
// 4. Frozen inputs
// ══════════════════════════════════════════════════════════

#[test]
fn scheduler_input_requires_processes() {
    let q = NonZeroU64::new(2).unwrap();
    assert_eq!(
        SchedulerInput::new(ProcessTable::new(), q),
        Err(InputError::NoProcesses)
    );

    let input = SchedulerInput::new(parse_processes(&["0:5", "1:3"]).unwrap(), q).unwrap();
    assert_eq!(input.processes().len(), 2);
    assert_eq!(input.quantum(), q);
    assert_eq!(input.run().process(2).and_then(|p| p.completion_time), Some(7));
}

#[test]
fn cache_input_runs_engine() {
    assert!(CacheInput::new(3, Vec::new()).is_err());

    let input = CacheInput::new(3, parse_pages("1, 2, 3, 1, 4, 5").unwrap()).unwrap();
    assert_eq!(input.capacity(), 3);
    assert_eq!(input.pages().len(), 6);
    let result = input.run();
    assert_eq!((result.hits, result.faults), (1, 5));
}

//! Input adapter.
//!
//! Turns raw user-entered text into the validated, immutable inputs the engines consume.
//! It performs:
//! 1. **Process entry:** An append-only process table that assigns 1-based ids.
//! 2. **Scalar parsing:** Quantum and capacity, falling back to configured defaults.
//! 3. **Reference strings:** Comma-separated page lists.
//!
//! The engines assume their preconditions hold; everything that could violate them is
//! rejected here.

use std::num::NonZeroU64;

use crate::cache::{CacheResult, simulate_lru};
use crate::common::{InputError, ProcessId, Ticks};
use crate::config::{CacheConfig, SchedulerConfig};
use crate::sched::{ProcessSpec, ScheduleResult, simulate_round_robin};

/// Page identifier type produced by [`parse_pages`].
pub type Page = i64;

/// Parses one integer field, rejecting blanks and non-numeric text.
fn parse_int(field: &'static str, text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::EmptyField { field });
    }
    text.parse().map_err(|_| InputError::NotAnInteger {
        field,
        value: text.to_owned(),
    })
}

/// Ordered list of processes being entered, one row per "add".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    specs: Vec<ProcessSpec>,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates an arrival/burst pair and appends it with the next id.
    ///
    /// # Errors
    ///
    /// Rejects empty or non-integer fields, a negative arrival time, and a burst time
    /// that is not strictly positive. The table is unchanged on error.
    pub fn add(&mut self, arrival: &str, burst: &str) -> Result<&ProcessSpec, InputError> {
        let arrival = parse_int("arrival time", arrival)?;
        let burst = parse_int("burst time", burst)?;
        let arrival = Ticks::try_from(arrival).map_err(|_| InputError::NegativeArrival(arrival))?;
        let burst = match Ticks::try_from(burst) {
            Ok(b) if b > 0 => b,
            _ => return Err(InputError::NonPositiveBurst(burst)),
        };

        let id = ProcessId::try_from(self.specs.len() + 1).unwrap_or(ProcessId::MAX);
        self.specs.push(ProcessSpec::new(id, arrival, burst));
        tracing::debug!(id, arrival, burst, "process added");
        Ok(&self.specs[self.specs.len() - 1])
    }

    /// Entries so far, in input order.
    pub fn specs(&self) -> &[ProcessSpec] {
        &self.specs
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Parses an `ARRIVAL:BURST` pair.
///
/// Returns the two raw fields for [`ProcessTable::add`] to validate.
///
/// # Errors
///
/// Returns [`InputError::MalformedProcess`] if there is not exactly one `:`.
pub fn split_process(text: &str) -> Result<(&str, &str), InputError> {
    match text.split_once(':') {
        Some((arrival, burst)) if !burst.contains(':') => Ok((arrival, burst)),
        _ => Err(InputError::MalformedProcess(text.trim().to_owned())),
    }
}

/// Builds a process table from `ARRIVAL:BURST` entries, assigning ids in order.
///
/// # Errors
///
/// Returns the first entry's error, if any.
pub fn parse_processes<S: AsRef<str>>(entries: &[S]) -> Result<ProcessTable, InputError> {
    let mut table = ProcessTable::new();
    for entry in entries {
        let (arrival, burst) = split_process(entry.as_ref())?;
        let _ = table.add(arrival, burst)?;
    }
    Ok(table)
}

/// Parses a time quantum.
///
/// # Errors
///
/// Rejects empty, non-integer, zero, and negative values.
pub fn parse_quantum(text: &str) -> Result<NonZeroU64, InputError> {
    let value = parse_int("time quantum", text)?;
    u64::try_from(value)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(InputError::NonPositiveQuantum(value))
}

/// Uses `text` if given, else the configured quantum.
///
/// # Errors
///
/// As [`parse_quantum`]; a configured quantum of 0 is rejected the same way.
pub fn quantum_or_default(
    text: Option<&str>,
    config: &SchedulerConfig,
) -> Result<NonZeroU64, InputError> {
    match text {
        Some(text) => parse_quantum(text),
        None => NonZeroU64::new(config.quantum).ok_or(InputError::NonPositiveQuantum(0)),
    }
}

/// Parses a cache capacity.
///
/// # Errors
///
/// Rejects empty, non-integer, and negative values, and 0 unless
/// `config.allow_zero_capacity` is set.
pub fn parse_capacity(text: &str, config: &CacheConfig) -> Result<usize, InputError> {
    let value = parse_int("cache capacity", text)?;
    let capacity = usize::try_from(value).map_err(|_| InputError::NegativeCapacity(value))?;
    check_capacity(capacity, config)
}

/// Uses `text` if given, else the configured capacity.
///
/// # Errors
///
/// As [`parse_capacity`].
pub fn capacity_or_default(text: Option<&str>, config: &CacheConfig) -> Result<usize, InputError> {
    match text {
        Some(text) => parse_capacity(text, config),
        None => check_capacity(config.capacity, config),
    }
}

fn check_capacity(capacity: usize, config: &CacheConfig) -> Result<usize, InputError> {
    if capacity == 0 && !config.allow_zero_capacity {
        return Err(InputError::ZeroCapacity);
    }
    Ok(capacity)
}

/// Parses a comma-separated reference string such as `"1, 2, 3, 1"`.
///
/// Tokens are trimmed; tokens that are not integers are skipped.
///
/// # Errors
///
/// Returns [`InputError::NoPages`] if no token is a valid page.
pub fn parse_pages(text: &str) -> Result<Vec<Page>, InputError> {
    let pages: Vec<Page> = text
        .split(',')
        .filter_map(|token| {
            let token = token.trim();
            let page: Option<Page> = token.parse().ok();
            if page.is_none() && !token.is_empty() {
                tracing::warn!(token, "skipping non-numeric page reference");
            }
            page
        })
        .collect();
    if pages.is_empty() {
        return Err(InputError::NoPages(text.trim().to_owned()));
    }
    Ok(pages)
}

/// Validated scheduler input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerInput {
    processes: Vec<ProcessSpec>,
    quantum: NonZeroU64,
}

impl SchedulerInput {
    /// Freezes a process table together with a quantum.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NoProcesses`] for an empty table.
    pub fn new(table: ProcessTable, quantum: NonZeroU64) -> Result<Self, InputError> {
        if table.is_empty() {
            return Err(InputError::NoProcesses);
        }
        Ok(Self {
            processes: table.specs,
            quantum,
        })
    }

    /// Processes in input order.
    pub fn processes(&self) -> &[ProcessSpec] {
        &self.processes
    }

    /// Time quantum.
    pub const fn quantum(&self) -> NonZeroU64 {
        self.quantum
    }

    /// Runs the Round-Robin engine on this input.
    pub fn run(&self) -> ScheduleResult {
        simulate_round_robin(&self.processes, self.quantum)
    }
}

/// Validated cache input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheInput {
    capacity: usize,
    pages: Vec<Page>,
}

impl CacheInput {
    /// Pairs a capacity with a reference string.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NoPages`] for an empty reference string.
    pub fn new(capacity: usize, pages: Vec<Page>) -> Result<Self, InputError> {
        if pages.is_empty() {
            return Err(InputError::NoPages(String::new()));
        }
        Ok(Self { capacity, pages })
    }

    /// Cache capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reference string.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Runs the LRU engine on this input.
    pub fn run(&self) -> CacheResult<Page> {
        simulate_lru(self.capacity, &self.pages)
    }
}

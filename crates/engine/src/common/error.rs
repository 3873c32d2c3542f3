//! Input and configuration error definitions.
//!
//! The engines themselves never fail: every degenerate input has a defined outcome.
//! Errors only arise at the edges, where raw user text is turned into engine inputs
//! or a configuration document is read from disk.
//! 1. **Input Errors:** Rejected form values (empty, non-numeric, out of range).
//! 2. **Configuration Errors:** Unreadable or malformed JSON configuration files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A raw user-entered value that cannot be turned into an engine input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required field was left blank.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Human-readable name of the field.
        field: &'static str,
    },

    /// A field did not hold an integer.
    #[error("{field} must be an integer, got {value:?}")]
    NotAnInteger {
        /// Human-readable name of the field.
        field: &'static str,
        /// The offending text, trimmed.
        value: String,
    },

    /// Arrival times start at zero.
    #[error("arrival time must be >= 0, got {0}")]
    NegativeArrival(i64),

    /// A process must need at least one tick of CPU time.
    #[error("burst time must be > 0, got {0}")]
    NonPositiveBurst(i64),

    /// The Round-Robin quantum must be at least one tick.
    #[error("time quantum must be > 0, got {0}")]
    NonPositiveQuantum(i64),

    /// Cache capacity cannot be negative.
    #[error("cache capacity must be >= 0, got {0}")]
    NegativeCapacity(i64),

    /// Capacity 0 is rejected unless explicitly allowed by configuration.
    #[error("cache capacity 0 is degenerate; set cache.allow_zero_capacity to run it anyway")]
    ZeroCapacity,

    /// A process entry was not of the form `ARRIVAL:BURST`.
    #[error("process entry {0:?} is not of the form ARRIVAL:BURST")]
    MalformedProcess(String),

    /// The scheduler was asked to run with no processes.
    #[error("no processes to schedule")]
    NoProcesses,

    /// The reference string held no valid page numbers.
    #[error("no valid page references in {0:?}")]
    NoPages(String),
}

/// Failure to load a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The document was not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Common types used throughout the simulators.
//!
//! This module provides the building blocks shared by the engines and the input layer:
//! 1. **Time and identity:** Tick counts and process identifiers.
//! 2. **Error Handling:** Input validation and configuration errors.

/// Error types for input parsing and configuration loading.
pub mod error;

/// Scalar aliases for simulated time and identities.
pub mod types;

pub use error::{ConfigError, InputError};
pub use types::{ProcessId, Ticks};

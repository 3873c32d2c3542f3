//! Scalar aliases for simulated time and process identity.

/// Simulated clock value or duration, in scheduler time units.
pub type Ticks = u64;

/// Stable 1-based process identity, assigned by input order.
pub type ProcessId = u32;

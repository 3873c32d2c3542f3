//! Least-Recently-Used page replacement.
//!
//! This module simulates a fully associative cache of page identifiers under the LRU
//! policy. It includes:
//! 1. **Resident set:** An O(1) recency-ordered list of resident pages.
//! 2. **Cache:** A fixed-capacity cache that classifies each access as hit or fault.
//! 3. **Engine:** The per-reference trace over a whole reference string.

/// Recency-ordered resident set.
pub mod lru;

/// LRU cache model and the reference-string simulation.
pub mod simulator;

pub use lru::LruList;
pub use simulator::{Access, AccessStatus, CacheResult, LruCache, TraceStep, simulate_lru};

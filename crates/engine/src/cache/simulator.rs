//! LRU cache simulation.
//!
//! [`LruCache`] models a cache holding at most `capacity` pages. [`simulate_lru`] feeds it a
//! reference string and records, after every access, whether it hit and what is resident.
//!
//! # Capacity zero
//!
//! The eviction check compares the resident count with the capacity *before* inserting.
//! With capacity 0 that check only matches the empty cache, where there is nothing to
//! evict, so the first page is inserted anyway and later faults never evict either. The
//! resident set therefore grows with every distinct page. This is reproduced as-is; the
//! input layer rejects capacity 0 unless configured otherwise.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use super::lru::LruList;

/// Outcome of a single page access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccessStatus {
    /// The page was resident.
    Hit,
    /// The page had to be loaded.
    Fault,
}

impl AccessStatus {
    /// Returns true for [`AccessStatus::Hit`].
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("Hit"),
            Self::Fault => f.write_str("Fault"),
        }
    }
}

/// What one access did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Access<P> {
    /// Hit or fault.
    pub status: AccessStatus,
    /// Page evicted to make room, if any.
    pub evicted: Option<P>,
}

/// A fixed-capacity LRU cache of page identifiers.
#[derive(Debug, Clone)]
pub struct LruCache<P> {
    capacity: usize,
    resident: LruList<P>,
    hits: usize,
    faults: usize,
}

impl<P: Eq + Hash + Clone> LruCache<P> {
    /// Creates an empty cache.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            resident: LruList::with_capacity(capacity),
            hits: 0,
            faults: 0,
        }
    }

    /// Nominal capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resident pages, least recently used first.
    pub const fn resident(&self) -> &LruList<P> {
        &self.resident
    }

    /// Hits so far.
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Faults so far.
    pub const fn faults(&self) -> usize {
        self.faults
    }

    /// References `page`.
    ///
    /// A resident page is refreshed to most recently used. Otherwise the least recently
    /// used page is evicted if the cache is at capacity, and `page` is inserted as most
    /// recently used.
    pub fn access(&mut self, page: P) -> Access<P> {
        if self.resident.touch(&page) {
            self.hits += 1;
            return Access {
                status: AccessStatus::Hit,
                evicted: None,
            };
        }

        self.faults += 1;
        let evicted = if self.resident.len() == self.capacity {
            self.resident.pop_lru()
        } else {
            None
        };
        self.resident.push_mru(page);
        Access {
            status: AccessStatus::Fault,
            evicted,
        }
    }
}

/// One row of the step-by-step trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep<P> {
    /// 1-based position in the reference string.
    pub step: usize,
    /// Page referenced.
    pub page: P,
    /// Hit or fault.
    pub status: AccessStatus,
    /// Resident pages after the access, least recently used first.
    pub cache_state: Vec<P>,
    /// Page evicted by this access, if any.
    pub evicted: Option<P>,
}

/// Outcome of an LRU run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheResult<P> {
    /// Number of hits.
    pub hits: usize,
    /// Number of faults.
    pub faults: usize,
    /// `hits / (hits + faults)`, or 0 when nothing was referenced.
    pub hit_ratio: f64,
    /// One entry per reference, in input order.
    pub history: Vec<TraceStep<P>>,
}

impl<P> CacheResult<P> {
    /// Total number of references processed.
    pub const fn accesses(&self) -> usize {
        self.hits + self.faults
    }

    /// Resident pages after the last reference, least recently used first.
    pub fn final_state(&self) -> &[P] {
        self.history
            .last()
            .map(|s| s.cache_state.as_slice())
            .unwrap_or(&[])
    }
}

/// Simulates an LRU cache of `capacity` pages over the reference string `pages`.
///
/// # Examples
///
/// ```
/// use ossim_core::{AccessStatus, simulate_lru};
///
/// let result = simulate_lru(2, &["a", "b", "a", "c"]);
/// assert_eq!(result.history[2].status, AccessStatus::Hit);
/// assert_eq!(result.history[3].evicted, Some("b"));
/// assert_eq!(result.final_state(), ["a", "c"]);
/// ```
pub fn simulate_lru<P>(capacity: usize, pages: &[P]) -> CacheResult<P>
where
    P: Eq + Hash + Clone + fmt::Debug,
{
    tracing::debug!(capacity, references = pages.len(), "starting lru run");
    if capacity == 0 {
        tracing::warn!("capacity 0: resident set will grow past capacity");
    }

    let mut cache = LruCache::new(capacity);
    let history: Vec<TraceStep<P>> = pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let Access { status, evicted } = cache.access(page.clone());
            tracing::trace!(step = i + 1, ?page, %status, ?evicted, "access");
            TraceStep {
                step: i + 1,
                page: page.clone(),
                status,
                cache_state: cache.resident().snapshot(),
                evicted,
            }
        })
        .collect();

    let hits = cache.hits();
    let faults = cache.faults();
    let total = hits + faults;
    let hit_ratio = if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    };

    CacheResult {
        hits,
        faults,
        hit_ratio,
        history,
    }
}

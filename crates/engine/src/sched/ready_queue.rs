//! Round-Robin ready queue.
//!
//! A FIFO of indices into the arrival-sorted process list, paired with a per-index flag
//! recording whether the process has ever been admitted. A process is admitted at most
//! once; after that it only returns to the queue by being re-queued after its slice.

use std::collections::VecDeque;

/// FIFO ready queue with admit-once tracking.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    queue: VecDeque<usize>,
    admitted: Vec<bool>,
}

impl ReadyQueue {
    /// Creates an empty queue for `len` processes.
    pub fn with_len(len: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(len),
            admitted: vec![false; len],
        }
    }

    /// Appends `idx` to the tail if it has never been admitted.
    ///
    /// Returns `true` if the index was admitted by this call.
    pub fn admit(&mut self, idx: usize) -> bool {
        if self.admitted[idx] {
            return false;
        }
        self.admitted[idx] = true;
        self.queue.push_back(idx);
        true
    }

    /// Puts an already admitted process back at the tail after it used its slice.
    pub fn requeue(&mut self, idx: usize) {
        debug_assert!(self.admitted[idx], "requeue of a process never admitted");
        self.queue.push_back(idx);
    }

    /// Removes and returns the head of the queue.
    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    /// Returns true if `idx` has been admitted at some point.
    pub fn is_admitted(&self, idx: usize) -> bool {
        self.admitted[idx]
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued indices, head first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue.iter().copied()
    }
}

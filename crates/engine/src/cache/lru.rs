//! Recency-ordered resident set.
//!
//! [`LruList`] keeps resident pages ordered from least to most recently used. Pages live in
//! a slot arena linked by index in both directions, and a hash map locates a page's slot,
//! so lookup, refresh, insertion and eviction are all O(1).
//!
//! ```text
//!   index: HashMap<P, slot>          slots: Vec<Option<Node>>
//!   ┌──────┬──────┐                  ┌────┬────┬────┐
//!   │ page │ slot │ ───────────────► │ n0 │ n1 │ n2 │
//!   └──────┴──────┘                  └────┴────┴────┘
//!   head (LRU) ⇄ ... ⇄ tail (MRU)
//! ```
//!
//! # Performance
//!
//! - `contains`, `touch`, `push_mru`, `pop_lru`: O(1) expected
//! - `iter`, `snapshot`: O(n)
//! - Freed slots are reused, so the arena never grows past the peak resident count.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Node<P> {
    page: P,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Resident pages ordered least recently used first.
#[derive(Clone)]
pub struct LruList<P> {
    slots: Vec<Option<Node<P>>>,
    free: Vec<usize>,
    index: HashMap<P, usize>,
    /// Least recently used end.
    head: Option<usize>,
    /// Most recently used end.
    tail: Option<usize>,
}

impl<P: Eq + Hash + Clone> LruList<P> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` pages before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no page is resident.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns true if `page` is resident. Does not change recency.
    pub fn contains(&self, page: &P) -> bool {
        self.index.contains_key(page)
    }

    /// Moves a resident `page` to the most recently used end.
    ///
    /// Returns `false` if the page is not resident.
    pub fn touch(&mut self, page: &P) -> bool {
        let Some(&idx) = self.index.get(page) else {
            return false;
        };
        if self.tail != Some(idx) {
            self.detach(idx);
            self.attach_mru(idx);
        }
        true
    }

    /// Inserts `page` at the most recently used end.
    ///
    /// A page that is already resident is refreshed instead, so no duplicate is created.
    pub fn push_mru(&mut self, page: P) {
        if self.touch(&page) {
            return;
        }
        let node = Node {
            page: page.clone(),
            prev: None,
            next: None,
        };
        let idx = if let Some(idx) = self.free.pop() {
            self.slots[idx] = Some(node);
            idx
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        };
        let _ = self.index.insert(page, idx);
        self.attach_mru(idx);
    }

    /// Removes and returns the least recently used page.
    pub fn pop_lru(&mut self) -> Option<P> {
        let idx = self.head?;
        self.detach(idx);
        let node = self.slots[idx].take()?;
        let _ = self.index.remove(&node.page);
        self.free.push(idx);
        Some(node.page)
    }

    /// The least recently used page, if any.
    pub fn lru(&self) -> Option<&P> {
        self.head.and_then(|idx| self.page_at(idx))
    }

    /// The most recently used page, if any.
    pub fn mru(&self) -> Option<&P> {
        self.tail.and_then(|idx| self.page_at(idx))
    }

    /// Iterates resident pages from least to most recently used.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Copies the resident pages out, least recently used first.
    pub fn snapshot(&self) -> Vec<P> {
        self.iter().cloned().collect()
    }

    fn page_at(&self, idx: usize) -> Option<&P> {
        self.slots[idx].as_ref().map(|n| &n.page)
    }

    fn set_prev(&mut self, idx: usize, prev: Option<usize>) {
        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, idx: usize, next: Option<usize>) {
        if let Some(node) = self.slots[idx].as_mut() {
            node.next = next;
        }
    }

    fn detach(&mut self, idx: usize) {
        let Some((prev, next)) = self.slots[idx].as_ref().map(|n| (n.prev, n.next)) else {
            return;
        };
        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }
        self.set_prev(idx, None);
        self.set_next(idx, None);
    }

    fn attach_mru(&mut self, idx: usize) {
        let old_tail = self.tail;
        self.set_prev(idx, old_tail);
        self.set_next(idx, None);
        match old_tail {
            Some(t) => self.set_next(t, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }
}

impl<P: Eq + Hash + Clone> Default for LruList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug> fmt::Debug for LruList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pages = Vec::with_capacity(self.index.len());
        let mut cursor = self.head;
        while let Some(node) = cursor.and_then(|idx| self.slots[idx].as_ref()) {
            pages.push(&node.page);
            cursor = node.next;
        }
        f.debug_struct("LruList").field("lru_to_mru", &pages).finish()
    }
}

/// Iterator over an [`LruList`], least recently used first.
#[derive(Debug)]
pub struct Iter<'a, P> {
    list: &'a LruList<P>,
    cursor: Option<usize>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.slots[self.cursor?].as_ref()?;
        self.cursor = node.next;
        Some(&node.page)
    }
}

impl<'a, P: Eq + Hash + Clone> IntoIterator for &'a LruList<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

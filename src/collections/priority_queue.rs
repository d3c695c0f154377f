use crate::errors::QueueError;

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering};
use rustc_hash::FxHashMap;



/// Min priority queue with decrease-key
///
/// `BinaryHeap` cannot change the priority of an entry already in the heap.
/// Updating a value instead turns its old entry into a tombstone and pushes a
/// fresh one; `pop` discards tombstones as it meets them.
///
/// Values with equal priority pop in the order they were pushed (or last
/// updated), every push takes a sequence number used as secondary key.
#[derive(Debug)]
pub struct PriorityQueue<V, P> {
    heap: BinaryHeap<Entry<P>>,
    // Slot per sequence number, None once the entry is stale or popped
    entries: Vec<Option<V>>,
    // Live value -> sequence number of its current entry
    live: FxHashMap<V, usize>,
}

impl<V, P> PriorityQueue<V, P>
where
    V: Eq + Hash + Clone,
    P: PartialOrd + Copy,
{

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            entries: Vec::new(),
            live: FxHashMap::default(),
        }
    }

    /// Insert `value`, or update its priority if it is already queued
    pub fn push(&mut self, value: V, priority: P) {
        let sequence = self.entries.len();

        // Tombstone the previous entry for this value
        if let Some(stale) = self.live.insert(value.clone(), sequence) {
            self.entries[stale] = None;
        }

        self.entries.push(Some(value));
        self.heap.push(Entry { priority, sequence });
    }

    /// Remove and return the value with the least priority
    pub fn pop(&mut self) -> Result<(V, P), QueueError> {
        while let Some(Entry { priority, sequence }) = self.heap.pop() {
            // skip tombstones
            if let Some(value) = self.entries[sequence].take() {
                self.live.remove(&value);
                return Ok((value, priority));
            }
        }
        Err(QueueError::Empty)
    }

    pub fn contains(&self, value: &V) -> bool {
        self.live.contains_key(value)
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl<V, P> Default for PriorityQueue<V, P>
where
    V: Eq + Hash + Clone,
    P: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}


/// Heap entry
/// - ordered by priority then sequence, reversed so BinaryHeap pops the smallest
/// - incomparable priorities (NaN) are treated as equal
#[derive(Debug)]
struct Entry<P> {
    priority: P,
    sequence: usize,
}

impl<P: PartialOrd> Ord for Entry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl<P: PartialOrd> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<P: PartialOrd> PartialEq for Entry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<P: PartialOrd> Eq for Entry<P> {}

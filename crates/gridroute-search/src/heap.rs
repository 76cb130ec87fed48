//! Binary min-heap used as the frontier of the weighted searches.
//!
//! Entries are keyed by `(priority, insertion order)`. Lower priorities pop
//! first; among equal priorities the entry pushed earlier pops first, so
//! the pop order is fully determined by the push sequence.
//!
//! There is no decrease-key. A cheaper route to a queued value is pushed as a
//! new entry and the searches discard the stale one when it surfaces (lazy
//! deletion). Their termination relies on that finalized-set check.

/// An entry in the queue.
#[derive(Debug, Clone)]
struct Entry<T> {
    priority: i32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
    value: T,
}

impl<T> Entry<T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (self.priority, self.seq) < (other.priority, other.seq)
    }
}

/// A binary min-heap of values keyed by an integer priority.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<Entry<T>>,
    seq: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            seq: 0,
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Insert `value` with the given priority.
    pub fn push(&mut self, priority: i32, value: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            value,
        });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<(i32, T)> {
        let last = self.heap.pop()?;
        let top = if self.heap.is_empty() {
            last
        } else {
            let top = std::mem::replace(&mut self.heap[0], last);
            self.sift_down(0);
            top
        };
        Some((top.priority, top.value))
    }

    /// Priority of the entry [`pop`](Self::pop) would return next.
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.first().map(|e| e.priority)
    }

    /// Number of queued entries, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every entry and restart the tie-break sequence.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < n && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::foundation::core::Millis;

/// Cancellable handle to a pending timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Single-threaded registry of pending timers on a virtual clock.
///
/// Determinism rule: timers fire in `due` order, and timers sharing a `due` fire in the order
/// they were scheduled. Cancellation removes the entry from the live set; stale heap entries
/// are skipped lazily when popped.
#[derive(Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<(Millis, u64)>>,
    live: BTreeMap<u64, (Millis, T)>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Register `payload` to fire at `due`.
    pub fn schedule(&mut self, due: Millis, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse((due, seq)));
        self.live.insert(seq, (due, payload));
        TimerId(seq)
    }

    /// Returns the payload if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.live.remove(&id.0).map(|(_, payload)| payload)
    }

    /// Earliest pending due time.
    pub fn next_due(&mut self) -> Option<Millis> {
        self.drop_stale();
        self.heap.peek().map(|Reverse((due, _))| *due)
    }

    /// Remove and return the earliest timer whose due time is `<= now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, T)> {
        self.drop_stale();
        let Reverse((due, seq)) = *self.heap.peek()?;
        if due > now {
            return None;
        }
        self.heap.pop();
        self.live.remove(&seq)
    }

    /// Pending timers.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Dispose every pending handle at once. Returns how many were cancelled.
    pub fn clear(&mut self) -> usize {
        let n = self.live.len();
        self.live.clear();
        self.heap.clear();
        n
    }

    /// Pending timers whose payload matches `pred`.
    pub fn count_where(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.live.values().filter(|(_, p)| pred(p)).count()
    }

    fn drop_stale(&mut self) {
        while let Some(Reverse((_, seq))) = self.heap.peek() {
            if self.live.contains_key(seq) {
                break;
            }
            self.heap.pop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/timers.rs"]
mod tests;

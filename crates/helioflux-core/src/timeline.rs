//! Virtual-clock task queue.
//!
//! Every timed behaviour on the page is a task scheduled on one `Timeline`.
//! The host (a browser timeout in the web crate, a test loop on native) moves
//! the clock forward with [`Timeline::pop_due`]; nothing here reads wall time,
//! so tests can replay an entire animation without waiting.

use fnv::FnvHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap yields the earliest (due, seq) first.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Timeline<T> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Entry<T>>,
    cancelled: FnvHashSet<u64>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
            cancelled: FnvHashSet::default(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to run `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due: self.now + delay,
            seq,
            task,
        });
        TimerId(seq)
    }

    /// Returns false when the timer already ran or was cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let pending = self.queue.iter().any(|e| e.seq == id.0);
        pending && self.cancelled.insert(id.0)
    }

    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.drop_cancelled_head();
        self.queue.peek().map(|e| e.due)
    }

    pub fn pending(&self) -> usize {
        self.queue.len() - self.cancelled.len()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to its
    /// deadline. Returns `None` (and parks the clock at `until`) when nothing
    /// else is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        self.drop_cancelled_head();
        match self.queue.peek() {
            Some(head) if head.due <= until => {
                let entry = self.queue.pop()?;
                self.now = self.now.max(entry.due);
                Some(entry.task)
            }
            _ => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    fn drop_cancelled_head(&mut self) {
        while let Some(head) = self.queue.peek() {
            if !self.cancelled.remove(&head.seq) {
                break;
            }
            self.queue.pop();
        }
    }
}

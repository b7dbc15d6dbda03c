// SPDX-License-Identifier: MPL-2.0
//! One-shot expiry timers for toasts.
//!
//! Timers are plain records ordered by deadline. The host loop drives them by
//! calling `pop_due` from its periodic tick, so no timer ever runs on its own
//! thread or outlives the queue that owns it.

use super::notification::ToastId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

/// A scheduled removal of one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryTimer {
    deadline: Instant,
    /// Tie-breaker keeping equal deadlines in scheduling order.
    seq: u64,
    id: ToastId,
}

impl ExpiryTimer {
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }
}

impl Ord for ExpiryTimer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ExpiryTimer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deadline-ordered queue of pending expiry timers.
#[derive(Debug, Default)]
pub struct ExpiryTimers {
    queue: BinaryHeap<Reverse<ExpiryTimer>>,
    next_seq: u64,
}

impl ExpiryTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a timer that fires at `deadline`.
    pub fn schedule(&mut self, id: ToastId, deadline: Instant) {
        let timer = ExpiryTimer {
            deadline,
            seq: self.next_seq,
            id,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(timer));
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut due = Vec::new();
        while let Some(Reverse(next)) = self.queue.peek() {
            if next.deadline > now {
                break;
            }
            if let Some(Reverse(timer)) = self.queue.pop() {
                due.push(timer.id);
            }
        }
        due
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.peek().map(|Reverse(timer)| timer.deadline)
    }

    /// Cancels every pending timer and returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.queue.len();
        self.queue.clear();
        cancelled
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::time::Duration;

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// One-shot timers ordered by deadline.
///
/// Timers with equal deadlines expire in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    next_id: u64,
    timers: BTreeMap<(Duration, TimerId), T>,
    deadlines: BTreeMap<TimerId, Duration>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            timers: BTreeMap::new(),
            deadlines: BTreeMap::new(),
        }
    }

    /// Schedules `payload` to expire at `deadline`.
    pub fn schedule(&mut self, deadline: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert((deadline, id), payload);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already expired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let deadline = self.deadlines.remove(&id)?;
        self.timers.remove(&(deadline, id))
    }

    /// Deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.deadlines.get(&id).copied()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first.
    pub fn poll_expired(&mut self, now: Duration) -> Vec<(TimerId, T)> {
        let mut expired = Vec::new();
        while let Some(entry) = self.timers.first_entry() {
            let (deadline, id) = *entry.key();
            if deadline > now {
                break;
            }
            let payload = entry.remove();
            self.deadlines.remove(&id);
            expired.push((id, payload));
        }
        expired
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
        self.deadlines.clear();
    }
}

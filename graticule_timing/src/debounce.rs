// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::queue::{TimerId, TimerQueue};

/// Delay used by [`Debounce::default`].
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Trailing debounce: fires once, `delay` after the last trigger.
///
/// Each trigger cancels the pending timer and schedules a new one.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    timers: TimerQueue<()>,
    pending: Option<TimerId>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debounce {
    /// Creates an idle debounce with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timers: TimerQueue::new(),
            pending: None,
        }
    }

    /// Delay between the last trigger and firing.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay. A pending deadline is not moved.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Arms or re-arms the debounce at `now`.
    pub fn trigger(&mut self, now: Duration) {
        self.cancel();
        let deadline = now.saturating_add(self.delay);
        self.pending = Some(self.timers.schedule(deadline, ()));
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.pending.is_none() {
            return false;
        }
        if self.timers.poll_expired(now).is_empty() {
            return false;
        }
        self.pending = None;
        true
    }

    /// Disarms the debounce. Returns `true` if it was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(id) => self.timers.cancel(id).is_some(),
            None => false,
        }
    }

    /// Returns `true` while armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the debounce will fire, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.and_then(|id| self.timers.deadline(id))
    }
}

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graticule_timing --heading-base-level=0

//! Graticule Timing: timers driven by host-supplied time.
//!
//! Nothing in this crate reads a clock. Times are [`Duration`]s since an
//! arbitrary epoch chosen by the host (for example the first frame), and
//! expiry is observed by polling. That keeps timers usable from any event
//! loop and makes them deterministic in tests.
//!
//! - [`TimerQueue`]: cancellable one-shot timers carrying a payload.
//! - [`Debounce`]: a trailing debounce that re-arms on every trigger and
//!   fires once after triggers stop.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use graticule_timing::Debounce;
//!
//! let ms = Duration::from_millis;
//! let mut settle = Debounce::new(ms(200));
//! settle.trigger(ms(0));
//! settle.trigger(ms(150));
//! assert!(!settle.poll(ms(300)));
//! assert!(settle.poll(ms(350)));
//! assert!(!settle.poll(ms(400)));
//! ```
//!
//! [`Duration`]: core::time::Duration
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod debounce;
mod queue;

pub use debounce::{DEFAULT_DEBOUNCE, Debounce};
pub use queue::{TimerId, TimerQueue};

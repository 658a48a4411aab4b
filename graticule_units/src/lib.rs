// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graticule_units --heading-base-level=0

//! Graticule Units: numeric helpers and measurement systems for grid overlays.
//!
//! This crate answers two questions for a grid engine:
//! - How far apart should gridlines be, given how many pixels one unit covers?
//! - How should a gridline's value be written on screen?
//!
//! It provides:
//! - [`num`]: epsilon-aware comparisons, clamping, and arithmetic sequences.
//! - [`UnitSystem`]: points, imperial (inches and feet) and metric (millimeters),
//!   each with natural step increments, conversions through a common base unit,
//!   and label formatting.
//! - [`css`]: conversion of CSS length strings such as `"11pt"` to pixels.
//!
//! ## Example
//!
//! ```rust
//! use graticule_units::{UnitSystem, convert};
//!
//! // At zoom 1 an inch covers 72 pixels; aim for gridlines ~50px apart.
//! let step = UnitSystem::Imperial.grid_spacing(1.0, 1.0, None);
//! assert_eq!(step, 1.0);
//! assert_eq!(UnitSystem::Imperial.format(step * 14.5), "1'2 1/2\"");
//!
//! // Switching systems converts stored distances through base units.
//! let mm = convert(step, UnitSystem::Imperial, UnitSystem::Metric);
//! assert!((mm - 25.4).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod css;
pub mod num;
mod units;

pub use units::{
    IDEAL_GRID_LINE_SPACING, MIN_VISIBLE_PIXELS, MM_PER_INCH, MaxZoom, POINTS_PER_INCH,
    POINTS_PER_MM, ParseUnitSystemError, UnitSystem, convert,
};

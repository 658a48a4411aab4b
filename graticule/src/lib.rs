// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graticule --heading-base-level=0

//! Graticule: an interactive 2D grid overlay for pannable, zoomable canvases.
//!
//! A [`Grid`] draws adaptive gridlines, axis lines, ticks and unit-aware
//! labels onto a [`GridSurface`](render::GridSurface), following a host
//! canvas transform. Spacing adapts to the zoom so lines stay a readable
//! distance apart, and labels are formatted in the selected
//! [`UnitSystem`](units::UnitSystem).
//!
//! The crate ties together:
//! - [`units`]: unit systems, conversion, spacing and label formatting.
//! - [`axis`]: axis models and per-frame render state calculation.
//! - [`render`]: drawing a computed state onto a surface.
//! - [`view`]: the host canvas view and transform to grid synchronization.
//! - [`timing`]: debouncing for the settling redraw after wheel zoom.
//!
//! On top of those, [`ViewController`] turns pointer and wheel input into
//! view changes, keeps the grid in sync and reports [`ViewEvent`]s.
//! [`GridControl`] is a style preset that can be applied at any time.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use graticule::render::RecordingSurface;
//! use graticule::{GridOptions, ViewController, ViewEvent};
//! use kurbo::{Point, Size};
//!
//! let mut controller = ViewController::new(
//!     RecordingSurface::new(),
//!     Size::new(800.0, 600.0),
//!     GridOptions::default(),
//! );
//!
//! // Drag the content 40px to the right.
//! controller.pan_start(Point::new(100.0, 100.0));
//! controller.pan_move(Point::new(140.0, 100.0));
//! controller.pan_end();
//! assert_eq!(controller.grid().center().x, -40.0);
//!
//! // Wheel zooming settles after the debounce delay.
//! controller.wheel(Point::new(400.0, 300.0), -1.0, Duration::ZERO);
//! let settled = controller.poll(Duration::from_millis(200));
//! assert!(matches!(settled, Some(ViewEvent::ZoomCompleted { .. })));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to the sub-crates and to `kurbo`/`peniko`.
//! - `libm`: float math for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod control;
mod controller;
mod grid;
mod options;

pub use graticule_axis as axis;
pub use graticule_render as render;
pub use graticule_timing as timing;
pub use graticule_units as units;
pub use graticule_view as view;

pub use control::GridControl;
pub use controller::{DEFAULT_FIT_PADDING, ViewController, ViewEvent, WHEEL_ZOOM_FACTOR};
pub use grid::Grid;
pub use options::{GridFlags, GridOptions};

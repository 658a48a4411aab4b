// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graticule_render --heading-base-level=0

//! Graticule Render: draws computed grid state onto a 2D surface.
//!
//! The renderer is a stateless pass over a [`GridState`]: for each axis it
//! strokes the colored gridlines, the ticks and the axis line, then places
//! labels next to the axis, clamped inside the canvas.
//!
//! Drawing goes through the small [`GridSurface`] trait so hosts can back it
//! with whatever 2D API they have. [`RecordingSurface`] records calls for
//! tests. The geometry used by the pass is exposed in [`geometry`] for hosts
//! that want to hit-test or draw the grid themselves.
//!
//! ## Example
//!
//! ```rust
//! use graticule_axis::{AxisModel, Orientation, compute_grid};
//! use graticule_render::{RecordingSurface, SurfaceOp, draw_grid};
//! use kurbo::Size;
//!
//! let x = AxisModel::new(Orientation::Horizontal);
//! let y = AxisModel::new(Orientation::Vertical);
//! let grid = compute_grid(&x, &y, Size::new(400.0, 300.0));
//!
//! let mut surface = RecordingSurface::new();
//! draw_grid(&grid, &mut surface);
//! assert!(matches!(surface.ops()[0], SurfaceOp::Clear(_)));
//! assert!(surface.texts().any(|(text, _)| text == "100"));
//! ```
//!
//! [`GridState`]: graticule_axis::GridState
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod draw;
pub mod geometry;
mod recording;
mod surface;

pub use draw::{draw_axis, draw_grid};
pub use recording::{RecordingSurface, SurfaceOp};
pub use surface::{FontSpec, GridSurface};

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graticule_axis --heading-base-level=0

//! Graticule Axis: per-axis view state and gridline calculation.
//!
//! An [`AxisModel`] describes one dimension of a grid: where the view is
//! centered along it, how many world units one pixel covers, optional value
//! bounds, and an [`AxisStyle`]. Every frame, [`compute_grid`] turns a pair
//! of axis models and the canvas size into a [`GridState`]: for each axis,
//! the gridline world values and, in parallel vectors, their colors, tick
//! lengths and label strings.
//!
//! Which lines, colors, ticks and labels are produced is decided by tagged
//! rules ([`Lines`], [`LineColors`], [`Ticks`], [`Labels`]): off, the
//! built-in generator, static lists, closures over the in-progress state, or
//! sparse extra entries.
//!
//! ## Example
//!
//! ```rust
//! use graticule_axis::{AxisModel, Orientation, compute_grid};
//! use kurbo::Size;
//!
//! let mut x = AxisModel::new(Orientation::Horizontal);
//! let y = AxisModel::new(Orientation::Vertical);
//! // Center the view on x = 250 at one world unit per pixel.
//! x.set_view(250.0, 1.0);
//!
//! let grid = compute_grid(&x, &y, Size::new(800.0, 600.0));
//! assert!(grid.x.is_consistent());
//! assert_eq!(grid.x.step, 20.0);
//! // Labels land on every 100 units.
//! let labeled: Vec<f64> = grid
//!     .x
//!     .lines
//!     .iter()
//!     .zip(&grid.x.labels)
//!     .filter_map(|(v, l)| l.as_ref().map(|_| *v))
//!     .collect();
//! assert!(labeled.iter().all(|v| v % 100.0 == 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod axis;
mod calc;
mod state;
pub mod style;

pub use axis::{AxisModel, Orientation};
pub use calc::{VALUE_LIMIT, compute_grid, compute_state};
pub use state::{CrossAxis, GridState, RenderState};
pub use style::{AxisStyle, FontSize, Generator, Labels, LineColors, Lines, Padding, Paint, Ticks};

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graticule_view --heading-base-level=0

//! Graticule View: the host canvas view and viewport synchronization.
//!
//! This crate provides a small, headless model of the pan/zoom transform a
//! host canvas applies to its content, and the glue that turns that transform
//! into the center and zoom a grid is drawn for. It focuses on:
//! - Canvas view state ([`CanvasView`]): pan, zoom with limits, fitting and
//!   pinning the world origin to a screen position.
//! - Viewport synchronization ([`grid_center`]): deriving `{x, y, zoom}` from
//!   a world to view transform.
//! - Pan gesture tracking ([`PanState`]).
//! - Object bounds helpers for fitting the view to content.
//!
//! It does **not** own any scene or event loop. Callers feed it input and
//! push the derived [`GridCenter`] into a grid.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use graticule_view::{CanvasView, GridCenter};
//!
//! let mut view = CanvasView::new(Size::new(800.0, 600.0));
//! assert_eq!(view.grid_center(), GridCenter::default());
//!
//! // Drag the content 100px to the right: the grid now looks 100 units left.
//! view.pan_by_view(Vec2::new(100.0, 0.0));
//! assert_eq!(view.grid_center().x, -100.0);
//!
//! // Zoom in about the view center.
//! view.zoom_about_view_point(Point::new(400.0, 300.0), 2.0);
//! assert_eq!(view.grid_center().zoom, 2.0);
//! ```
//!
//! ## Design notes
//!
//! - Host world coordinates have Y pointing down; grid coordinates have Y
//!   pointing up. [`grid_center`] and [`sync::to_grid_point`] do the flip.
//! - Zoom is uniform and there is no rotation.
//!
//! This crate is `no_std`.

#![no_std]

pub mod bounds;
mod modes;
mod pan;
pub mod sync;
mod view;

pub use modes::OriginPin;
pub use pan::PanState;
pub use sync::{GridCenter, grid_center, grid_center_or_identity};
pub use view::{CanvasView, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};

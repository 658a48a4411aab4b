// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction glue between a host canvas view and a grid.

use core::time::Duration;

use graticule_render::GridSurface;
use graticule_timing::Debounce;
use graticule_view::{CanvasView, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, OriginPin, PanState};
use kurbo::{Point, Rect, Size, Vec2};

use crate::grid::Grid;
use crate::options::GridOptions;

/// Zoom multiplier for one wheel notch.
pub const WHEEL_ZOOM_FACTOR: f64 = 1.05;

/// Padding added around content by [`ViewController::fit_rect`] callers
/// that have no preference, in world units.
pub const DEFAULT_FIT_PADDING: f64 = 100.0;

/// What changed in response to an input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    /// A wheel step changed the zoom.
    Zoom {
        /// New zoom.
        zoom: f64,
    },
    /// Wheel zooming settled.
    ZoomCompleted {
        /// Final zoom.
        zoom: f64,
    },
    /// The zoom was set directly.
    ZoomChanged {
        /// New zoom.
        zoom: f64,
    },
    /// The view was panned.
    PanMove {
        /// Movement in view pixels.
        delta: Vec2,
    },
    /// A pan gesture ended.
    PanCompleted,
    /// The view returned to its home position.
    ViewReset,
    /// The origin pin changed.
    OriginChanged {
        /// New pin.
        pin: OriginPin,
    },
    /// The canvas was resized.
    Resized {
        /// New size in pixels.
        size: Size,
    },
}

/// Drives a [`CanvasView`] from input and keeps a [`Grid`] attached to it.
///
/// Every input updates the view, pushes its transform into the grid and
/// redraws. Wheel zooming additionally arms a debounce; once
/// [`ViewController::poll`] sees it expire the grid is settled with one more
/// full update.
///
/// The view's zoom limits are kept inside the grid's
/// [`zoom_limits`](Grid::zoom_limits), so the grid always draws at the zoom
/// the host shows.
#[derive(Debug)]
pub struct ViewController<S> {
    view: CanvasView,
    grid: Grid<S>,
    pan: PanState,
    settle: Debounce,
    /// View limits as last requested, before narrowing to the grid's.
    limits: (f64, f64),
}

impl<S: GridSurface> ViewController<S> {
    /// Creates a grid on `surface` and a view of `size` that starts at
    /// `options.center`.
    pub fn new(surface: S, size: Size, options: GridOptions) -> Self {
        let delay = options.zoom_debounce;
        let mut grid = Grid::new(surface, options);
        grid.set_size(size);
        Self::from_grid(grid, delay)
    }

    /// Wraps an existing grid. The view adopts the grid's size and center.
    pub fn from_grid(grid: Grid<S>, zoom_debounce: Duration) -> Self {
        let center = grid.center();
        let mut controller = Self {
            view: CanvasView::new(grid.size()),
            grid,
            pan: PanState::default(),
            settle: Debounce::new(zoom_debounce),
            limits: (DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM),
        };
        controller.constrain_zoom();
        let view = &mut controller.view;
        view.set_home_zoom(center.zoom);
        view.set_zoom(center.zoom);
        view.center_on(Point::new(center.x, -center.y));
        controller.refresh();
        controller
    }

    /// The host view.
    pub fn view(&self) -> &CanvasView {
        &self.view
    }

    /// The grid.
    pub fn grid(&self) -> &Grid<S> {
        &self.grid
    }

    /// The grid for modification. Call [`ViewController::refresh`] afterwards.
    pub fn grid_mut(&mut self) -> &mut Grid<S> {
        &mut self.grid
    }

    /// Consumes the controller, returning the grid.
    pub fn into_grid(self) -> Grid<S> {
        self.grid
    }

    /// Narrows the view's zoom limits to the grid's, pushes the view
    /// transform into the grid and redraws.
    pub fn refresh(&mut self) {
        self.constrain_zoom();
        self.grid.sync_transform(self.view.transform());
        self.grid.redraw();
    }

    /// Handles a wheel event at `anchor` (view pixels) at time `now`.
    ///
    /// Negative `delta_y` zooms in by [`WHEEL_ZOOM_FACTOR`], positive zooms
    /// out.
    pub fn wheel(&mut self, anchor: Point, delta_y: f64, now: Duration) -> Option<ViewEvent> {
        if delta_y.is_nan() || delta_y == 0.0 {
            return None;
        }
        let factor = if delta_y < 0.0 {
            WHEEL_ZOOM_FACTOR
        } else {
            1.0 / WHEEL_ZOOM_FACTOR
        };
        self.view.zoom_about_view_point(anchor, factor);
        self.refresh();
        self.settle.trigger(now);
        Some(ViewEvent::Zoom {
            zoom: self.view.zoom(),
        })
    }

    /// Settles wheel zooming once the debounce has expired.
    pub fn poll(&mut self, now: Duration) -> Option<ViewEvent> {
        if !self.settle.poll(now) {
            return None;
        }
        self.refresh();
        let zoom = self.view.zoom();
        log::debug!("zoom settled at {zoom}");
        Some(ViewEvent::ZoomCompleted { zoom })
    }

    /// When the pending zoom settle is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.settle.deadline()
    }

    /// Starts a pan gesture at `pos` (view pixels).
    pub fn pan_start(&mut self, pos: Point) {
        self.pan.start(pos);
    }

    /// Continues a pan gesture.
    ///
    /// Returns `None` when no gesture is active or the view did not move.
    pub fn pan_move(&mut self, pos: Point) -> Option<ViewEvent> {
        let delta = self.pan.update(pos)?;
        if !self.view.pan_by_view(delta) {
            return None;
        }
        self.refresh();
        Some(ViewEvent::PanMove { delta })
    }

    /// Ends a pan gesture, for pointer release or the pointer leaving the canvas.
    pub fn pan_end(&mut self) -> Option<ViewEvent> {
        self.pan.end()?;
        self.refresh();
        Some(ViewEvent::PanCompleted)
    }

    /// Returns `true` while a pan gesture is active.
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Resizes the canvas, keeping the world point at its center in place.
    pub fn resize(&mut self, size: Size) -> ViewEvent {
        self.view.set_size(size);
        self.grid.set_size(size);
        self.refresh();
        ViewEvent::Resized { size }
    }

    /// Sets the zoom about the view center.
    pub fn set_zoom(&mut self, zoom: f64) -> ViewEvent {
        self.view.set_zoom(zoom);
        self.refresh();
        ViewEvent::ZoomChanged {
            zoom: self.view.zoom(),
        }
    }

    /// Sets the view zoom limits.
    ///
    /// A missing or non-positive `min` becomes `0.01` and `min` is never
    /// below that; a missing `max` becomes `20`. `max` is kept at least
    /// `0.01` above `min`. The result is further narrowed to the grid's
    /// limits. Returns an event if the current zoom had to change.
    pub fn set_zoom_limits(&mut self, min: f64, max: f64) -> Option<ViewEvent> {
        let min = if min.is_finite() && min > 0.0 {
            min.max(0.01)
        } else {
            0.01
        };
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            20.0
        };
        let max = max.max(min + 0.01);
        let before = self.view.zoom();
        self.limits = (min, max);
        self.refresh();
        let zoom = self.view.zoom();
        (zoom != before).then_some(ViewEvent::ZoomChanged { zoom })
    }

    /// Returns to the home zoom with the origin at the center (or pinned).
    pub fn reset_view(&mut self) -> ViewEvent {
        self.settle.cancel();
        self.view.reset();
        self.refresh();
        ViewEvent::ViewReset
    }

    /// Fits a world rectangle (host coordinates, Y down), grown by
    /// `padding`, into the view. Returns `None` for empty input.
    pub fn fit_rect(&mut self, rect: Rect, padding: f64) -> Option<ViewEvent> {
        if !self.view.fit_rect(rect, padding) {
            return None;
        }
        self.refresh();
        Some(ViewEvent::ZoomChanged {
            zoom: self.view.zoom(),
        })
    }

    /// Pins the world origin to a screen position.
    pub fn set_origin_pin(&mut self, pin: OriginPin) -> ViewEvent {
        self.view.set_origin_pin(pin);
        self.refresh();
        ViewEvent::OriginChanged { pin }
    }

    /// Shows or hides the grid and redraws.
    pub fn show_grid(&mut self, visible: bool) {
        self.grid.set_visible(visible);
        self.grid.redraw();
    }

    fn constrain_zoom(&mut self) {
        let (grid_min, grid_max) = self.grid.zoom_limits();
        let min = self.limits.0.max(grid_min);
        let max = self.limits.1.min(grid_max).max(min);
        self.view.set_zoom_limits(min, max);
    }
}

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use graticule_axis::{AxisModel, GridState, Labels, Orientation, compute_grid};
use graticule_render::geometry::center_point;
use graticule_render::{GridSurface, draw_grid};
use graticule_units::num::clamp;
use graticule_units::{MaxZoom, UnitSystem, convert};
use graticule_view::{GridCenter, grid_center};
use kurbo::{Affine, Point, Rect, Size};

use crate::control::GridControl;
use crate::options::{GridFlags, GridOptions};

/// A grid overlay bound to a drawing surface.
///
/// The grid owns the two axis models and the last computed [`GridState`].
/// Every mutating call recomputes the state; [`Grid::redraw`] paints it.
/// A grid without a surface (see [`Grid::detached`]) still computes state,
/// which is what hit testing and tests need.
#[derive(Debug)]
pub struct Grid<S> {
    surface: Option<S>,
    size: Size,
    pixel_ratio: f64,
    center: GridCenter,
    min_zoom: f64,
    max_zoom: MaxZoom,
    flags: GridFlags,
    labels: Labels,
    pixels_per_unit: Option<f64>,
    x: AxisModel,
    y: AxisModel,
    state: GridState,
}

impl<S: GridSurface> Grid<S> {
    /// Creates a grid drawing onto `surface`.
    ///
    /// The size starts empty; call [`Grid::set_size`] before drawing.
    pub fn new(surface: S, options: GridOptions) -> Self {
        let mut grid = Self::detached(options);
        grid.surface = Some(surface);
        grid
    }

    /// Creates a grid with no surface.
    pub fn detached(options: GridOptions) -> Self {
        let style = options.axis_style();
        let mut x = AxisModel::new(Orientation::Horizontal).with_style(style.clone());
        let mut y = AxisModel::new(Orientation::Vertical).with_style(style);
        x.set_bounds(options.min, options.max);
        y.set_bounds(options.min, options.max);
        let pixel_ratio = if options.pixel_ratio.is_finite() && options.pixel_ratio > 0.0 {
            options.pixel_ratio
        } else {
            log::warn!("invalid pixel ratio {}; using 1", options.pixel_ratio);
            1.0
        };
        let min_zoom = if options.min_zoom.is_finite() && options.min_zoom >= 0.0 {
            options.min_zoom
        } else {
            log::warn!("invalid minimum zoom {}; using 0", options.min_zoom);
            0.0
        };
        let mut grid = Self {
            surface: None,
            size: Size::ZERO,
            pixel_ratio,
            center: GridCenter::default(),
            min_zoom,
            max_zoom: options.max_zoom,
            flags: options.flags,
            labels: options.labels,
            pixels_per_unit: None,
            x,
            y,
            state: GridState::default(),
        };
        grid.sync_flags();
        grid.update_viewport(options.center);
        grid
    }

    /// The surface, if attached.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The surface for modification, if attached.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Attaches a surface, returning the previous one.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    /// Detaches and returns the surface.
    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Canvas size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the canvas size and recomputes.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.update();
    }

    /// Device pixel ratio.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Current center and zoom.
    pub fn center(&self) -> GridCenter {
        self.center
    }

    /// Resolved `(min, max)` view zoom for the current unit system.
    ///
    /// The maximum is never below the minimum.
    pub fn zoom_limits(&self) -> (f64, f64) {
        let max = self.units().max_zoom(self.pixel_ratio, self.max_zoom);
        (self.min_zoom, max.max(self.min_zoom))
    }

    /// Moves the grid to a new center and zoom and recomputes.
    ///
    /// The zoom is clamped to [`Grid::zoom_limits`]; a zoom that is not a
    /// positive number keeps the previous zoom.
    pub fn update_viewport(&mut self, center: GridCenter) {
        let zoom = if center.zoom.is_finite() && center.zoom > 0.0 {
            let (lo, hi) = self.zoom_limits();
            clamp(center.zoom, lo, hi)
        } else {
            log::warn!("ignoring zoom {}", center.zoom);
            self.center.zoom
        };
        self.center = GridCenter { zoom, ..center };
        self.x.set_view(center.x, 1.0 / zoom);
        self.y.set_view(center.y, 1.0 / zoom);
        self.update();
    }

    /// Follows a host canvas transform: derives the center from it and
    /// records the measured pixels per display unit at the accepted zoom.
    pub fn sync_transform(&mut self, transform: Affine) {
        self.update_viewport(grid_center(transform, self.size));
        self.pixels_per_unit = Some(self.center.zoom * self.units().base_per_unit());
    }

    /// Pixels per display unit measured by the last [`Grid::sync_transform`].
    ///
    /// Rescaled by [`Grid::set_units`] so it always refers to the current
    /// unit system.
    pub fn pixels_per_unit(&self) -> Option<f64> {
        self.pixels_per_unit
    }

    /// Current unit system.
    pub fn units(&self) -> UnitSystem {
        self.x.style().units
    }

    /// Switches both axes to another unit system and recomputes.
    pub fn set_units(&mut self, units: UnitSystem) {
        let old = self.units();
        if old == units {
            return;
        }
        // Pixels per unit scale inversely to distances.
        self.pixels_per_unit = self
            .pixels_per_unit
            .map(|ppu| ppu * convert(1.0, units, old));
        log::debug!("switching grid units from {old} to {units}");
        self.x.style_mut().units = units;
        self.y.style_mut().units = units;
        self.update();
    }

    /// Natural gridline spacing at the current zoom, in display units.
    ///
    /// This is a query for hosts that snap or size content to the grid; the
    /// drawn lines follow each axis' own [`Lines`](graticule_axis::Lines)
    /// rule. Uses the pixels per unit measured by [`Grid::sync_transform`]
    /// when available.
    pub fn ideal_spacing(&self) -> f64 {
        self.units()
            .grid_spacing(self.center.zoom, self.pixel_ratio, self.pixels_per_unit)
    }

    /// Visibility flags.
    pub fn flags(&self) -> GridFlags {
        self.flags
    }

    /// Replaces the visibility flags and recomputes.
    pub fn set_flags(&mut self, flags: GridFlags) {
        self.flags = flags;
        self.sync_flags();
        self.update();
    }

    /// Returns `true` if the grid is drawn.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(GridFlags::VISIBLE)
    }

    /// Shows or hides the grid.
    pub fn set_visible(&mut self, visible: bool) {
        let mut flags = self.flags;
        flags.set(GridFlags::VISIBLE, visible);
        self.set_flags(flags);
    }

    /// Applies a style preset and recomputes.
    pub fn apply_control(&mut self, control: &GridControl) {
        control.apply_to(&mut self.x, &mut self.y);
        if control.show_labels {
            self.labels = Labels::Auto;
        }
        if let Some(center) = control.center {
            self.center.x = center.x;
            self.center.y = center.y;
        }
        self.flags = control.flags() | (self.flags & GridFlags::THIN_LABELS);
        self.sync_flags();
        self.update();
    }

    /// An axis model.
    pub fn axis(&self, orientation: Orientation) -> &AxisModel {
        match orientation {
            Orientation::Horizontal => &self.x,
            Orientation::Vertical => &self.y,
        }
    }

    /// An axis model for modification. Call [`Grid::update`] afterwards.
    pub fn axis_mut(&mut self, orientation: Orientation) -> &mut AxisModel {
        match orientation {
            Orientation::Horizontal => &mut self.x,
            Orientation::Vertical => &mut self.y,
        }
    }

    /// Recomputes the grid state from the axis models.
    pub fn update(&mut self) {
        self.state = compute_grid(&self.x, &self.y, self.size);
        log::trace!(
            "grid state: {} x lines, {} y lines",
            self.state.x.len(),
            self.state.y.len()
        );
    }

    /// Last computed state.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Pixel position where the axes cross. May lie off-canvas.
    pub fn center_coords(&self) -> Point {
        center_point(&self.state)
    }

    /// Paints the current state onto the surface.
    ///
    /// A hidden grid only clears the canvas. Does nothing without a surface.
    pub fn redraw(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            log::trace!("no surface attached; skipping redraw");
            return;
        };
        if self.flags.contains(GridFlags::VISIBLE) {
            draw_grid(&self.state, surface);
        } else {
            surface.clear(Rect::from_origin_size(Point::ORIGIN, self.size));
        }
    }

    fn sync_flags(&mut self) {
        let flags = self.flags;
        self.x.set_axis_visible(flags.contains(GridFlags::AXIS_X));
        self.y.set_axis_visible(flags.contains(GridFlags::AXIS_Y));
        for axis in [&mut self.x, &mut self.y] {
            let style = axis.style_mut();
            style.thin_labels = flags.contains(GridFlags::THIN_LABELS);
            style.labels = if flags.contains(GridFlags::LABELS) {
                self.labels.clone()
            } else {
                Labels::Off
            };
        }
    }
}

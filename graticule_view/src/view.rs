// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::OriginPin;
use crate::sync::{GridCenter, grid_center};

/// Default lower zoom limit.
pub const DEFAULT_MIN_ZOOM: f64 = 0.01;
/// Default upper zoom limit.
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Pan and zoom state of the host canvas.
///
/// `CanvasView` models the transform a host canvas applies to its content:
/// world points (Y down, as the host sees them) are scaled by a uniform zoom
/// and translated by a pan offset in view pixels. It can be used to:
/// - Pan by a view-space delta and zoom about a view point.
/// - Fit a world rectangle into the view.
/// - Hold the world origin at a fixed screen position with [`OriginPin`].
///
/// A new view has zoom `1.0` and the world origin at the center of the view.
#[derive(Clone, Debug)]
pub struct CanvasView {
    size: Size,
    zoom: f64,
    home_zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    origin_pin: OriginPin,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl CanvasView {
    /// Creates a view of `size` pixels with the world origin at its center.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let mut view = Self {
            size,
            zoom: 1.0,
            home_zoom: 1.0,
            pan: middle(size),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            origin_pin: OriginPin::None,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        view.rebuild_transforms();
        view
    }

    /// View size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resizes the view, keeping the world point at its center in place.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.pan += middle(size) - middle(self.size);
        self.size = size;
        self.rebuild_transforms();
        self.apply_pin();
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset: where the world origin sits in view pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// `(min, max)` zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the zoom limits, swapping them if given out of order, and clamps
    /// the current zoom into the new range.
    ///
    /// A limit that is not a positive finite number keeps its current value.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let valid = |z: f64| z.is_finite() && z > 0.0;
        if !valid(min_zoom) || !valid(max_zoom) {
            log::warn!("invalid zoom limits ({min_zoom}, {max_zoom}); keeping current values");
        }
        let min_zoom = if valid(min_zoom) { min_zoom } else { self.min_zoom };
        let max_zoom = if valid(max_zoom) { max_zoom } else { self.max_zoom };
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Zoom restored by [`CanvasView::reset`].
    #[must_use]
    pub fn home_zoom(&self) -> f64 {
        self.home_zoom
    }

    /// Sets the zoom restored by [`CanvasView::reset`].
    pub fn set_home_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.home_zoom = zoom;
        }
    }

    /// Sets the zoom about the center of the view, clamped to the limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom_to(middle(self.size).to_point(), zoom);
    }

    /// Multiplies the zoom by `factor`, keeping `anchor` (view pixels) fixed.
    ///
    /// While the origin is pinned the pinned point is the anchor.
    pub fn zoom_about_view_point(&mut self, anchor: Point, factor: f64) {
        if factor.is_nan() || factor <= 0.0 {
            return;
        }
        self.zoom_to(anchor, self.zoom * factor);
    }

    /// Pans by a view-space delta. Returns `false` if nothing moved.
    ///
    /// A pinned origin cannot be panned away.
    pub fn pan_by_view(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !delta.is_finite() || self.origin_pin.is_pinned() {
            return false;
        }
        self.pan += delta;
        self.rebuild_transforms();
        true
    }

    /// Moves the view so `world_pt` is at its center.
    pub fn center_on(&mut self, world_pt: Point) {
        let delta = middle(self.size).to_point() - self.world_to_view * world_pt;
        self.pan_by_view(delta);
    }

    /// Restores the home zoom with the world origin at the view center, then
    /// re-applies the origin pin.
    pub fn reset(&mut self) {
        self.zoom = self.home_zoom.clamp(self.min_zoom, self.max_zoom);
        self.pan = middle(self.size);
        self.rebuild_transforms();
        self.apply_pin();
    }

    /// Zooms and pans so `rect` (world units), grown by `padding` in each
    /// dimension, fills the view and is centered in it.
    ///
    /// Returns `false` and leaves the view untouched for empty or
    /// non-finite input.
    pub fn fit_rect(&mut self, rect: Rect, padding: f64) -> bool {
        let rect = rect.abs();
        let width = rect.width() + padding;
        let height = rect.height() + padding;
        if !rect.is_finite()
            || !padding.is_finite()
            || width <= 0.0
            || height <= 0.0
            || self.size.is_zero_area()
        {
            log::debug!("not fitting {rect:?} with padding {padding}");
            return false;
        }
        let zoom = (self.size.width / width).min(self.size.height / height);
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.pan = middle(self.size) - rect.center().to_vec2() * self.zoom;
        self.rebuild_transforms();
        self.apply_pin();
        true
    }

    /// Current origin pin.
    #[must_use]
    pub fn origin_pin(&self) -> OriginPin {
        self.origin_pin
    }

    /// Sets the origin pin and moves the origin to the pinned position.
    pub fn set_origin_pin(&mut self, pin: OriginPin) {
        self.origin_pin = pin;
        self.apply_pin();
    }

    /// World to view transform, as the host canvas applies it.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_view
    }

    /// View to world transform.
    #[must_use]
    pub fn inverse_transform(&self) -> Affine {
        self.view_to_world
    }

    /// Converts a world point into view pixels.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a point in view pixels into world units.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// World rectangle currently visible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world
            .transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, self.size))
    }

    /// Grid center and zoom for the current transform.
    #[must_use]
    pub fn grid_center(&self) -> GridCenter {
        grid_center(self.world_to_view, self.size)
    }

    fn zoom_to(&mut self, anchor: Point, zoom: f64) {
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        let zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        if (zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let anchor = self.origin_pin.position(self.size).unwrap_or(anchor);
        let world = self.view_to_world * anchor;
        self.zoom = zoom;
        self.rebuild_transforms();
        self.pan += anchor - self.world_to_view * world;
        self.rebuild_transforms();
    }

    fn apply_pin(&mut self) {
        if let Some(origin) = self.origin_pin.position(self.size) {
            self.pan = origin.to_vec2();
            self.rebuild_transforms();
        }
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_view = Affine::translate(self.pan) * Affine::scale(self.zoom);
        self.view_to_world = self.world_to_view.inverse();
    }
}

fn middle(size: Size) -> Vec2 {
    Vec2::new(size.width / 2.0, size.height / 2.0)
}

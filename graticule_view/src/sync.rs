// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derives grid parameters from the host canvas transform.
//!
//! The host applies a world to view [`Affine`] whose coefficients are
//! `[a, b, c, d, e, f]`. Only scale (`a`, `d`) and translation (`e`, `f`) are
//! read; the grid has no notion of rotation or skew. The grid's Y axis points
//! up, so the derived center has its Y flipped.

use kurbo::{Affine, Point, Size};

/// World position at the center of the canvas and the current zoom, in grid
/// coordinates (Y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCenter {
    /// World X at the canvas center.
    pub x: f64,
    /// World Y at the canvas center, positive upwards.
    pub y: f64,
    /// World to screen magnification.
    pub zoom: f64,
}

impl Default for GridCenter {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

impl GridCenter {
    /// Center point in grid coordinates.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Derives the grid center from a host transform and canvas size.
///
/// `x = (w/2 - e) / a`, `y = -((h/2 - f) / d)`, `zoom = a`. A transform with
/// zero or non-finite scale yields the center for the identity transform.
#[must_use]
pub fn grid_center(transform: Affine, size: Size) -> GridCenter {
    let [a, _, _, d, e, f] = transform.as_coeffs();
    let valid = [a, d, e, f].iter().all(|v| v.is_finite()) && a != 0.0 && d != 0.0;
    let (a, d, e, f) = if valid {
        (a, d, e, f)
    } else {
        log::warn!("degenerate canvas transform {transform:?}; using identity");
        (1.0, 1.0, 0.0, 0.0)
    };
    let y = -((size.height / 2.0 - f) / d);
    GridCenter {
        x: (size.width / 2.0 - e) / a,
        // Avoid reporting -0.0 for a centered origin.
        y: if y == 0.0 { 0.0 } else { y },
        zoom: a,
    }
}

/// [`grid_center`] for hosts that may not have a transform yet.
#[must_use]
pub fn grid_center_or_identity(transform: Option<Affine>, size: Size) -> GridCenter {
    grid_center(transform.unwrap_or(Affine::IDENTITY), size)
}

/// Flips a host world point (Y down) into grid coordinates (Y up).
#[must_use]
pub fn to_grid_point(world: Point) -> Point {
    Point::new(world.x, -world.y)
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;
    use crate::CanvasView;

    const SIZE: Size = Size::new(800.0, 600.0);

    #[test]
    fn identity_looks_at_half_size() {
        let c = grid_center(Affine::IDENTITY, SIZE);
        assert_eq!(c, GridCenter { x: 400.0, y: -300.0, zoom: 1.0 });
        assert_eq!(grid_center_or_identity(None, SIZE), c);
    }

    #[test]
    fn centered_origin_is_zero() {
        let c = grid_center(Affine::translate((400.0, 300.0)), SIZE);
        assert_eq!(c, GridCenter::default());
    }

    #[test]
    fn scale_and_translation() {
        let t = Affine::new([2.0, 0.0, 0.0, 2.0, 300.0, 400.0]);
        let c = grid_center(t, SIZE);
        assert_eq!(c.x, 50.0);
        assert_eq!(c.y, 50.0);
        assert_eq!(c.zoom, 2.0);
    }

    #[test]
    fn degenerate_transform_falls_back() {
        let c = grid_center(Affine::scale(0.0), SIZE);
        assert_eq!(c, grid_center(Affine::IDENTITY, SIZE));
    }

    #[test]
    fn center_on_round_trips_through_the_view() {
        let mut view = CanvasView::new(SIZE);
        view.set_zoom(3.0);
        let p = Point::new(125.0, -40.0);
        view.center_on(p);
        let c = view.grid_center();
        let expected = to_grid_point(p);
        assert!((c.x - expected.x).abs() < 1e-9);
        assert!((c.y - expected.y).abs() < 1e-9);
        assert_eq!(c.zoom, 3.0);
    }

    #[test]
    fn same_transform_same_center() {
        let mut view = CanvasView::new(SIZE);
        view.pan_by_view(Vec2::new(13.0, 7.0));
        assert_eq!(view.grid_center(), view.grid_center());
        assert_eq!(
            grid_center(view.transform(), SIZE),
            grid_center(view.transform(), SIZE)
        );
    }
}

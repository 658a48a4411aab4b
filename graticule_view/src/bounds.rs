// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding boxes of canvas objects, for fitting the view to content.

use kurbo::{Point, Rect, Size};

/// Bounds of an object positioned by its center.
#[must_use]
pub fn object_bounds(center: Point, size: Size) -> Rect {
    Rect::from_center_size(center, size)
}

/// Smallest rectangle containing every finite rectangle in `rects`.
///
/// Returns `None` when there is none.
pub fn union_bounds<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    rects
        .into_iter()
        .filter(Rect::is_finite)
        .map(|r| r.abs())
        .reduce(|acc, r| acc.union(r))
}

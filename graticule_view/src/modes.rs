// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Where the world origin is held on screen.
///
/// Consulted by [`crate::CanvasView`] after resizes, zooms and resets. Corner
/// variants carry a margin in view pixels measured inward from both edges.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum OriginPin {
    /// The origin moves freely with pan and zoom.
    #[default]
    None,
    /// The origin stays at the center of the view.
    Center,
    /// The origin stays near the top-left corner.
    TopLeft(f64),
    /// The origin stays near the top-right corner.
    TopRight(f64),
    /// The origin stays near the bottom-left corner.
    BottomLeft(f64),
    /// The origin stays near the bottom-right corner.
    BottomRight(f64),
}

impl OriginPin {
    /// View-space position of the origin for a view of `size`, if pinned.
    #[must_use]
    pub fn position(self, size: Size) -> Option<Point> {
        let (w, h) = (size.width, size.height);
        match self {
            Self::None => None,
            Self::Center => Some(Point::new(w / 2.0, h / 2.0)),
            Self::TopLeft(m) => Some(Point::new(m, m)),
            Self::TopRight(m) => Some(Point::new(w - m, m)),
            Self::BottomLeft(m) => Some(Point::new(m, h - m)),
            Self::BottomRight(m) => Some(Point::new(w - m, h - m)),
        }
    }

    /// Returns `true` unless this is [`OriginPin::None`].
    #[must_use]
    pub fn is_pinned(self) -> bool {
        self != Self::None
    }
}

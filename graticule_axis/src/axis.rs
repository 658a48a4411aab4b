// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Size};

use crate::style::AxisStyle;

/// Which screen dimension an axis measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The X axis. Its gridlines are vertical.
    Horizontal,
    /// The Y axis. Its gridlines are horizontal and world values grow upward.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Screen extent along this axis, in pixels.
    #[must_use]
    pub fn extent(self, shape: Size) -> f64 {
        match self {
            Self::Horizontal => shape.width,
            Self::Vertical => shape.height,
        }
    }

    /// Maps a world value to a `0..1` ratio along the axis.
    ///
    /// The vertical mapping is inverted so that larger values sit higher on
    /// screen.
    #[must_use]
    pub fn ratio(self, value: f64, offset: f64, range: f64) -> f64 {
        let t = (value - offset) / range;
        match self {
            Self::Horizontal => t,
            Self::Vertical => 1.0 - t,
        }
    }

    /// Full-length ratio-space segment perpendicular to this axis at ratio `t`.
    #[must_use]
    pub fn segment(self, t: f64) -> Line {
        match self {
            Self::Horizontal => Line::new(Point::new(t, 0.0), Point::new(t, 1.0)),
            Self::Vertical => Line::new(Point::new(0.0, t), Point::new(1.0, t)),
        }
    }
}

/// Per-dimension axis state: where the view sits along the axis and how it is styled.
///
/// The offset and zoom are updated on every viewport change; everything else
/// is configuration.
#[derive(Clone, Debug)]
pub struct AxisModel {
    orientation: Orientation,
    offset: f64,
    zoom: f64,
    min: f64,
    max: f64,
    axis_origin: f64,
    axis_visible: bool,
    style: AxisStyle,
}

impl AxisModel {
    /// Creates an unbounded axis centered on `0` at zoom `1` with the default style.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            offset: 0.0,
            zoom: 1.0,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            axis_origin: 0.0,
            axis_visible: true,
            style: AxisStyle::default(),
        }
    }

    /// Replaces the style.
    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// World value at the center of the view along this axis.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// World units per screen pixel (the inverse of the view zoom).
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the center value and world-units-per-pixel.
    pub fn set_view(&mut self, offset: f64, zoom: f64) {
        self.offset = offset;
        self.zoom = zoom;
    }

    /// Value bounds as `(min, max)`; either end may be infinite.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Sets the value bounds. The visible range is kept inside them.
    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// World value at which this axis' line crosses the other axis.
    #[must_use]
    pub fn axis_origin(&self) -> f64 {
        self.axis_origin
    }

    /// Sets the world value at which this axis' line is drawn.
    pub fn set_axis_origin(&mut self, origin: f64) {
        self.axis_origin = origin;
    }

    /// Whether the axis line is drawn.
    #[must_use]
    pub fn axis_visible(&self) -> bool {
        self.axis_visible
    }

    /// Shows or hides the axis line.
    pub fn set_axis_visible(&mut self, visible: bool) {
        self.axis_visible = visible;
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &AxisStyle {
        &self.style
    }

    /// Returns the style for modification.
    pub fn style_mut(&mut self) -> &mut AxisStyle {
        &mut self.style
    }

    /// Visible world range for a viewport shape: extent along the axis times zoom.
    #[must_use]
    pub fn range(&self, shape: Size) -> f64 {
        self.orientation.extent(shape) * self.zoom
    }
}

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Line, Point, Rect, Stroke};
use peniko::Color;

/// Font used for grid labels.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Size in pixels.
    pub size: f64,
    /// Family name or generic family.
    pub family: String,
    /// CSS weight.
    pub weight: u16,
}

impl FontSpec {
    /// Weight used for grid labels.
    pub const LABEL_WEIGHT: u16 = 300;

    /// Label font of the given size and family.
    #[must_use]
    pub fn label(size: f64, family: &str) -> Self {
        Self {
            size,
            family: String::from(family),
            weight: Self::LABEL_WEIGHT,
        }
    }

    /// CSS `font` shorthand, e.g. `"300 14px sans-serif"`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("{} {}px {}", self.weight, self.size, self.family)
    }
}

/// Minimal 2D drawing surface the grid renders onto.
///
/// Coordinates are canvas pixels with the origin at the top-left corner.
/// Text is positioned by its top-left corner.
pub trait GridSurface {
    /// Clears a rectangle to transparent.
    fn clear(&mut self, rect: Rect);

    /// Strokes a straight line.
    fn stroke_line(&mut self, line: Line, stroke: &Stroke, color: Color);

    /// Measures the advance width of `text`.
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f64;

    /// Draws `text` with its top-left corner at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color);
}

impl<S: GridSurface + ?Sized> GridSurface for &mut S {
    fn clear(&mut self, rect: Rect) {
        (**self).clear(rect);
    }

    fn stroke_line(&mut self, line: Line, stroke: &Stroke, color: Color) {
        (**self).stroke_line(line, stroke, color);
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f64 {
        (**self).measure_text(text, font)
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color) {
        (**self).fill_text(text, origin, font, color);
    }
}

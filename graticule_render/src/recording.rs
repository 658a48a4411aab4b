// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`GridSurface`] that records calls instead of drawing.
//!
//! It does **not** rasterize. It is meant for tests and debugging that want
//! to assert on what the renderer asked for and in which order.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, Stroke};
use peniko::Color;

use crate::surface::{FontSpec, GridSurface};

/// Surface call recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// A rectangle was cleared.
    Clear(Rect),
    /// A line was stroked.
    Stroke {
        /// The line, in canvas pixels.
        line: Line,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Text was drawn.
    Text {
        /// The text.
        text: String,
        /// Top-left corner.
        origin: Point,
        /// Font used.
        font: FontSpec,
        /// Fill color.
        color: Color,
    },
}

/// Recording surface with a fixed-advance text measure.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    advance: f64,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Creates an empty recorder measuring each character as `0.6 × font size`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_advance(0.6)
    }

    /// Creates an empty recorder measuring each character as `advance × font size`.
    #[must_use]
    pub fn with_advance(advance: f64) -> Self {
        Self {
            ops: Vec::new(),
            advance,
        }
    }

    /// Recorded operations in call order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drops all recorded operations.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Stroked lines in call order.
    pub fn strokes(&self) -> impl Iterator<Item = (&Line, f64, &Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Stroke { line, width, color } => Some((line, *width, color)),
            _ => None,
        })
    }

    /// Drawn text in call order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }
}

impl GridSurface for RecordingSurface {
    fn clear(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::Clear(rect));
    }

    fn stroke_line(&mut self, line: Line, stroke: &Stroke, color: Color) {
        self.ops.push(SurfaceOp::Stroke {
            line,
            width: stroke.width,
            color,
        });
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f64 {
        #[allow(clippy::cast_precision_loss, reason = "label lengths are small")]
        let chars = text.chars().count() as f64;
        chars * font.size * self.advance
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color) {
        self.ops.push(SurfaceOp::Text {
            text: String::from(text),
            origin,
            font: font.clone(),
            color,
        });
    }
}

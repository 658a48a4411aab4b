// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use graticule_units::UnitSystem;
use kurbo::{Insets, Line, Rect, Size};
use peniko::Color;

use crate::axis::Orientation;

/// What one axis needs to know about the other when drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CrossAxis {
    /// World value, along this axis, where the other axis' line is drawn.
    pub origin: f64,
    /// Ratio, along the other axis, where this axis' line is drawn. Not clamped.
    pub axis_ratio: f64,
    /// Whether the other axis' line is drawn. The vertical origin label is
    /// only dropped when it is.
    pub visible: bool,
}

/// Fully resolved per-frame state of one axis.
///
/// `lines`, `line_colors`, `ticks` and `labels` always have the same length
/// and are indexed together.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    /// Axis orientation.
    pub orientation: Orientation,
    /// Canvas size in pixels.
    pub shape: Size,
    /// Unit system for steps and labels.
    pub units: UnitSystem,
    /// Visible world range along the axis.
    pub range: f64,
    /// World value at the start of the visible range.
    pub offset: f64,
    /// World units per pixel.
    pub zoom: f64,
    /// Automatic gridline step in world units.
    pub step: f64,
    /// Plot area padding.
    pub padding: Insets,
    /// Label font size in pixels.
    pub font_size: f64,
    /// Label font family.
    pub font_family: String,
    /// Label color.
    pub color: Color,
    /// Gridline stroke width.
    pub line_width: f64,
    /// Axis line and tick stroke width.
    pub axis_width: f64,
    /// Axis line color, if drawn.
    pub axis_color: Option<Color>,
    /// Whether the axis line is drawn.
    pub axis_visible: bool,
    /// World value where this axis' line crosses the other axis.
    pub axis_origin: f64,
    /// Tick placement across the axis line, `0..=1`.
    pub tick_align: f64,
    /// Gridline world values.
    pub lines: Vec<f64>,
    /// Gridline colors; `None` lines are skipped.
    pub line_colors: Vec<Option<Color>>,
    /// Tick lengths in pixels.
    pub ticks: Vec<Option<f64>>,
    /// Label text.
    pub labels: Vec<Option<String>>,
    /// Cross-axis lookups, filled by [`compute_grid`](crate::compute_grid).
    pub cross: CrossAxis,
}

impl RenderState {
    /// A state with no lines and unit range, used as the starting point of calculation.
    #[must_use]
    pub fn empty(orientation: Orientation) -> Self {
        Self {
            orientation,
            shape: Size::ZERO,
            units: UnitSystem::Point,
            range: 1.0,
            offset: 0.0,
            zoom: 1.0,
            step: 0.0,
            padding: Insets::ZERO,
            font_size: graticule_units::css::DEFAULT_FONT_SIZE_PX,
            font_family: String::new(),
            color: Color::BLACK,
            line_width: 1.0,
            axis_width: 1.0,
            axis_color: None,
            axis_visible: false,
            axis_origin: 0.0,
            tick_align: 0.5,
            lines: Vec::new(),
            line_colors: Vec::new(),
            ticks: Vec::new(),
            labels: Vec::new(),
            cross: CrossAxis::default(),
        }
    }

    /// Maps a world value to a `0..1` ratio along this axis.
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        self.orientation.ratio(value, self.offset, self.range)
    }

    /// Ratio-space gridline segments for `values`.
    #[must_use]
    pub fn coords(&self, values: &[f64]) -> Vec<Line> {
        values
            .iter()
            .map(|v| self.orientation.segment(self.ratio(*v)))
            .collect()
    }

    /// The padded plotting rectangle in pixels.
    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.padding.x0,
            self.padding.y0,
            self.shape.width - self.padding.x1,
            self.shape.height - self.padding.y1,
        )
    }

    /// Number of gridlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no gridlines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `true` if all per-line vectors have the same length.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.lines.len();
        self.line_colors.len() == n && self.ticks.len() == n && self.labels.len() == n
    }
}

/// States for both axes of a frame, cross-linked.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    /// The horizontal axis (vertical gridlines).
    pub x: RenderState,
    /// The vertical axis (horizontal gridlines).
    pub y: RenderState,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            x: RenderState::empty(Orientation::Horizontal),
            y: RenderState::empty(Orientation::Vertical),
        }
    }
}

impl GridState {
    /// Returns the state for an orientation.
    #[must_use]
    pub fn axis(&self, orientation: Orientation) -> &RenderState {
        match orientation {
            Orientation::Horizontal => &self.x,
            Orientation::Vertical => &self.y,
        }
    }
}

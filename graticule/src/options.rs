// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::time::Duration;

use graticule_axis::{
    AxisStyle, FontSize, Labels, LineColors, Lines, Padding, Paint, Ticks, style::DEFAULT_DISTANCE,
};
use graticule_timing::DEFAULT_DEBOUNCE;
use graticule_units::{MaxZoom, UnitSystem};
use graticule_view::GridCenter;
use peniko::Color;

bitflags::bitflags! {
    /// Grid visibility toggles.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GridFlags: u8 {
        /// The grid is drawn at all.
        const VISIBLE     = 0b0000_0001;
        /// The X axis line is drawn.
        const AXIS_X      = 0b0000_0010;
        /// The Y axis line is drawn.
        const AXIS_Y      = 0b0000_0100;
        /// Labels are drawn.
        const LABELS      = 0b0000_1000;
        /// Automatic labels thin out further as the view zooms out.
        const THIN_LABELS = 0b0001_0000;
    }
}

impl Default for GridFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::AXIS_X | Self::AXIS_Y | Self::LABELS
    }
}

/// Construction options for a [`Grid`](crate::Grid).
///
/// Per-line rules (`lines`, `ticks`, `labels`) are shared by both axes;
/// computed rules can branch on [`RenderState::orientation`].
///
/// [`RenderState::orientation`]: graticule_axis::RenderState::orientation
#[derive(Clone, Debug)]
pub struct GridOptions {
    /// Initial center and zoom.
    pub center: GridCenter,
    /// Smallest accepted view zoom.
    pub min_zoom: f64,
    /// Largest accepted view zoom.
    pub max_zoom: MaxZoom,
    /// Lowest world value either axis may show.
    pub min: f64,
    /// Highest world value either axis may show.
    pub max: f64,
    /// Minimum on-screen distance between automatic gridlines, in pixels.
    pub distance: f64,
    /// Base color for labels and alpha paints.
    pub color: Color,
    /// Gridline colors.
    pub line_colors: LineColors,
    /// Axis line paint.
    pub axis_color: Paint,
    /// Gridline width.
    pub line_width: f64,
    /// Axis line width.
    pub axis_width: f64,
    /// Label font size.
    pub font_size: FontSize,
    /// Label font family.
    pub font_family: String,
    /// Plot area padding.
    pub padding: Padding,
    /// Tick placement across the axis line, `0..=1`.
    pub tick_align: f64,
    /// Unit system for spacing and labels.
    pub units: UnitSystem,
    /// Gridline values.
    pub lines: Lines,
    /// Tick lengths.
    pub ticks: Ticks,
    /// Label text.
    pub labels: Labels,
    /// Visibility toggles.
    pub flags: GridFlags,
    /// Device pixel ratio of the surface.
    pub pixel_ratio: f64,
    /// Quiet time after the last wheel event before the settling redraw.
    pub zoom_debounce: Duration,
}

impl Default for GridOptions {
    fn default() -> Self {
        let style = AxisStyle::default();
        Self {
            center: GridCenter::default(),
            min_zoom: 0.0,
            max_zoom: MaxZoom::Unbounded,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            distance: DEFAULT_DISTANCE,
            color: style.color,
            line_colors: style.line_colors,
            axis_color: style.axis_color,
            line_width: style.line_width,
            axis_width: style.axis_width,
            font_size: style.font_size,
            font_family: style.font_family,
            padding: style.padding,
            tick_align: style.tick_align,
            units: style.units,
            lines: style.lines,
            ticks: style.ticks,
            labels: style.labels,
            flags: GridFlags::default(),
            pixel_ratio: 1.0,
            zoom_debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl GridOptions {
    /// Axis style described by these options.
    ///
    /// Flags are applied separately by the grid.
    #[must_use]
    pub fn axis_style(&self) -> AxisStyle {
        AxisStyle {
            color: self.color,
            line_colors: self.line_colors.clone(),
            axis_color: self.axis_color,
            line_width: self.line_width,
            axis_width: self.axis_width,
            font_size: self.font_size.clone(),
            font_family: self.font_family.clone(),
            padding: self.padding.clone(),
            tick_align: self.tick_align,
            distance: self.distance,
            units: self.units,
            thin_labels: self.flags.contains(GridFlags::THIN_LABELS),
            lines: self.lines.clone(),
            ticks: self.ticks.clone(),
            labels: self.labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_show_everything_but_thinning() {
        let flags = GridFlags::default();
        assert!(flags.contains(GridFlags::VISIBLE | GridFlags::AXIS_X | GridFlags::AXIS_Y));
        assert!(flags.contains(GridFlags::LABELS));
        assert!(!flags.contains(GridFlags::THIN_LABELS));
    }

    #[test]
    fn style_follows_options() {
        let options = GridOptions {
            units: UnitSystem::Metric,
            distance: 35.0,
            flags: GridFlags::default() | GridFlags::THIN_LABELS,
            ..GridOptions::default()
        };
        let style = options.axis_style();
        assert_eq!(style.units, UnitSystem::Metric);
        assert_eq!(style.distance, 35.0);
        assert!(style.thin_labels);
        assert!(matches!(style.lines, Lines::Auto));
    }
}

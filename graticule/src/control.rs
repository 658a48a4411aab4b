// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use graticule_axis::{AxisModel, FontSize, Labels, LineColors, Orientation, Paint};
use kurbo::Point;
use peniko::Color;

use crate::options::GridFlags;

/// A style preset that can be applied to a grid's axis pair at any time.
///
/// Applying a control overwrites the fields it names and leaves the rest of
/// each axis' style alone.
#[derive(Clone, Debug, PartialEq)]
pub struct GridControl {
    /// Whether the grid is drawn at all.
    pub enabled: bool,
    /// Whether the X axis line is drawn.
    pub show_axis_x: bool,
    /// Whether the Y axis line is drawn.
    pub show_axis_y: bool,
    /// Whether automatic labels are drawn.
    pub show_labels: bool,
    /// Paint for every gridline.
    pub line_color: Paint,
    /// Gridline width.
    pub line_width: f64,
    /// Axis line paint.
    pub axis_color: Paint,
    /// Axis line width.
    pub axis_width: f64,
    /// Label font size.
    pub font_size: FontSize,
    /// Label font family.
    pub font_family: String,
    /// When set, recenters both axes on this grid point.
    pub center: Option<Point>,
}

impl Default for GridControl {
    fn default() -> Self {
        Self {
            enabled: true,
            show_axis_x: true,
            show_axis_y: true,
            show_labels: true,
            line_color: Paint::Solid(Color::BLACK.with_alpha(0.4)),
            line_width: 1.0,
            axis_color: Paint::Solid(Color::BLACK.with_alpha(0.8)),
            axis_width: 2.0,
            font_size: FontSize::default(),
            font_family: String::from("sans-serif"),
            center: None,
        }
    }
}

impl GridControl {
    /// Shows or hides the whole grid.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.enabled = visible;
        self
    }

    /// Visibility flags described by this control.
    #[must_use]
    pub fn flags(&self) -> GridFlags {
        let mut flags = GridFlags::empty();
        flags.set(GridFlags::VISIBLE, self.enabled);
        flags.set(GridFlags::AXIS_X, self.show_axis_x);
        flags.set(GridFlags::AXIS_Y, self.show_axis_y);
        flags.set(GridFlags::LABELS, self.show_labels);
        flags
    }

    /// Writes this preset into an axis pair.
    ///
    /// `x` and `y` are the horizontal and vertical axes. The caller
    /// recomputes the grid state afterwards.
    pub fn apply_to(&self, x: &mut AxisModel, y: &mut AxisModel) {
        x.set_axis_visible(self.show_axis_x);
        y.set_axis_visible(self.show_axis_y);
        for axis in [x, y] {
            if let Some(center) = self.center {
                let offset = match axis.orientation() {
                    Orientation::Horizontal => center.x,
                    Orientation::Vertical => center.y,
                };
                let zoom = axis.zoom();
                axis.set_view(offset, zoom);
            }
            let style = axis.style_mut();
            style.line_colors = LineColors::Uniform(self.line_color);
            style.line_width = self.line_width;
            style.axis_color = self.axis_color;
            style.axis_width = self.axis_width;
            style.font_size.clone_from(&self.font_size);
            style.font_family.clone_from(&self.font_family);
            style.labels = if self.show_labels {
                Labels::Auto
            } else {
                Labels::Off
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (AxisModel, AxisModel) {
        (
            AxisModel::new(Orientation::Horizontal),
            AxisModel::new(Orientation::Vertical),
        )
    }

    #[test]
    fn apply_toggles_axis_visibility() {
        let (mut x, mut y) = pair();
        let control = GridControl {
            show_axis_y: false,
            ..GridControl::default()
        };
        control.apply_to(&mut x, &mut y);
        assert!(x.axis_visible());
        assert!(!y.axis_visible());

        let control = GridControl {
            show_axis_x: false,
            show_axis_y: true,
            ..GridControl::default()
        };
        control.apply_to(&mut x, &mut y);
        assert!(!x.axis_visible());
        assert!(y.axis_visible());
    }

    #[test]
    fn apply_writes_style_and_center() {
        let (mut x, mut y) = pair();
        x.set_view(0.0, 0.5);
        let control = GridControl {
            show_labels: false,
            line_width: 3.0,
            font_family: String::from("monospace"),
            center: Some(Point::new(12.0, -7.0)),
            ..GridControl::default()
        };
        control.apply_to(&mut x, &mut y);
        assert_eq!(x.offset(), 12.0);
        assert_eq!(x.zoom(), 0.5);
        assert_eq!(y.offset(), -7.0);
        for axis in [&x, &y] {
            assert_eq!(axis.style().line_width, 3.0);
            assert_eq!(axis.style().font_family, "monospace");
            assert!(matches!(axis.style().labels, Labels::Off));
            assert!(matches!(axis.style().line_colors, LineColors::Uniform(_)));
        }
    }

    #[test]
    fn flags_mirror_fields() {
        let control = GridControl::default().visible(false);
        let flags = control.flags();
        assert!(!flags.contains(GridFlags::VISIBLE));
        assert!(flags.contains(GridFlags::AXIS_X | GridFlags::AXIS_Y | GridFlags::LABELS));
    }
}

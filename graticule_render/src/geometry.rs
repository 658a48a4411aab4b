// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space geometry for one axis' gridlines, ticks, axis line and labels.
//!
//! Inputs are ratio-space segments from [`RenderState::coords`]; outputs are
//! canvas pixels unless noted.

use alloc::vec::Vec;

use graticule_axis::{GridState, Orientation, RenderState};
use graticule_units::num::clamp;
use kurbo::{Line, Point, Rect, Vec2};

/// Gap between the axis line and label text, in pixels, on top of the axis width.
pub const LABEL_INDENT: f64 = 1.5;

/// Maps a ratio-space point into the padded plot rectangle.
#[must_use]
pub fn to_screen(plot: Rect, p: Point) -> Point {
    Point::new(plot.x0 + p.x * plot.width(), plot.y0 + p.y * plot.height())
}

/// Screen-space endpoints for ratio-space segments.
#[must_use]
pub fn line_segments(state: &RenderState, coords: &[Line]) -> Vec<Line> {
    let plot = state.plot_rect();
    coords
        .iter()
        .map(|l| Line::new(to_screen(plot, l.p0), to_screen(plot, l.p1)))
        .collect()
}

/// Unit direction of each segment; zero for degenerate segments.
#[must_use]
pub fn directions(coords: &[Line]) -> Vec<Vec2> {
    coords
        .iter()
        .map(|l| {
            let d = l.p1 - l.p0;
            let len = d.hypot();
            if len > 0.0 { d / len } else { Vec2::ZERO }
        })
        .collect()
}

/// Where this axis' line sits along its gridlines, clamped into the plot.
#[must_use]
pub fn axis_ratio(state: &RenderState) -> f64 {
    clamp(state.cross.axis_ratio, 0.0, 1.0)
}

/// Ratio-space segment of this axis' own line.
#[must_use]
pub fn axis_segment(state: &RenderState) -> Line {
    state.orientation.opposite().segment(axis_ratio(state))
}

/// Ratio-space tick segments and label anchors for each gridline.
///
/// Anchors sit where a gridline crosses the axis line. A tick straddles its
/// anchor along the gridline: `tick_align` of its length on one side, the
/// rest on the other. Gridlines without a tick get `None`.
#[must_use]
pub fn ticks_and_labels(
    state: &RenderState,
    coords: &[Line],
    directions: &[Vec2],
    axis_ratio: f64,
) -> (Vec<Option<Line>>, Vec<Point>) {
    let plot = state.plot_rect();
    let align = state.tick_align;
    let mut ticks = Vec::with_capacity(coords.len());
    let mut anchors = Vec::with_capacity(coords.len());
    for (i, line) in coords.iter().enumerate() {
        let anchor = line.p0 + (line.p1 - line.p0) * axis_ratio;
        anchors.push(anchor);
        let n = directions.get(i).copied().unwrap_or(Vec2::ZERO);
        let tick = match state.ticks.get(i).copied().flatten() {
            Some(length) if n != Vec2::ZERO && plot.width() > 0.0 && plot.height() > 0.0 => {
                let offset = Vec2::new(n.x * length / plot.width(), n.y * length / plot.height());
                Some(Line::new(
                    anchor + offset * align,
                    anchor - offset * (1.0 - align),
                ))
            }
            _ => None,
        };
        ticks.push(tick);
    }
    (ticks, anchors)
}

/// Top-left corner for a label whose anchor is at `anchor` (pixels).
///
/// The text sits beside the axis line on the side ticks lean towards and is
/// clamped so it stays on the canvas.
#[must_use]
pub fn label_position(state: &RenderState, anchor: Point, text_width: f64) -> Point {
    let text_height = state.font_size;
    let indent = state.axis_width + LABEL_INDENT;
    let text_offset = if state.tick_align < 0.5 {
        -text_height - state.axis_width * 2.0
    } else {
        state.axis_width * 2.0
    };
    let mut left = anchor.x + indent;
    let mut top = anchor.y + text_offset;
    match state.orientation {
        Orientation::Vertical => {
            left = clamp(
                left,
                indent,
                state.shape.width - text_width - 1.0 - state.axis_width,
            );
        }
        Orientation::Horizontal => {
            top = clamp(top, 0.0, state.shape.height - text_height - text_offset);
        }
    }
    Point::new(left, top)
}

/// Pixel position where the two axis lines cross. May lie off-canvas.
#[must_use]
pub fn center_point(grid: &GridState) -> Point {
    let x = to_screen(
        grid.x.plot_rect(),
        Point::new(grid.x.ratio(grid.x.cross.origin), 0.0),
    );
    let y = to_screen(
        grid.y.plot_rect(),
        Point::new(0.0, grid.y.ratio(grid.y.cross.origin)),
    );
    Point::new(x.x, y.y)
}

#[cfg(test)]
mod tests {
    use graticule_axis::{AxisModel, Padding, compute_grid};
    use kurbo::Size;

    use super::*;

    fn grid(padding: f64) -> GridState {
        let mut x = AxisModel::new(Orientation::Horizontal);
        let mut y = AxisModel::new(Orientation::Vertical);
        x.style_mut().padding = Padding::Uniform(padding);
        y.style_mut().padding = Padding::Uniform(padding);
        compute_grid(&x, &y, Size::new(800.0, 600.0))
    }

    #[test]
    fn segments_map_into_padded_rect() {
        let g = grid(10.0);
        let lines = line_segments(&g.x, &g.x.coords(&[0.0]));
        assert_eq!(lines[0].p0, Point::new(400.0, 10.0));
        assert_eq!(lines[0].p1, Point::new(400.0, 590.0));
        let lines = line_segments(&g.y, &g.y.coords(&[0.0]));
        assert_eq!(lines[0].p0, Point::new(10.0, 300.0));
        assert_eq!(lines[0].p1, Point::new(790.0, 300.0));
    }

    #[test]
    fn directions_are_unit_or_zero() {
        let coords = [
            Line::new((0.5, 0.0), (0.5, 1.0)),
            Line::new((0.0, 0.2), (1.0, 0.2)),
            Line::new((0.3, 0.3), (0.3, 0.3)),
        ];
        let d = directions(&coords);
        assert_eq!(d, [Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0), Vec2::ZERO]);
    }

    #[test]
    fn axis_line_is_clamped() {
        let mut g = grid(0.0);
        assert_eq!(axis_segment(&g.x), Line::new((0.0, 0.5), (1.0, 0.5)));
        g.x.cross.axis_ratio = 3.0;
        assert_eq!(axis_segment(&g.x), Line::new((0.0, 1.0), (1.0, 1.0)));
        g.y.cross.axis_ratio = -0.2;
        assert_eq!(axis_segment(&g.y), Line::new((0.0, 0.0), (0.0, 1.0)));
    }

    #[test]
    fn ticks_straddle_the_axis() {
        let g = grid(0.0);
        let coords = g.x.coords(&g.x.lines);
        let dirs = directions(&coords);
        let (ticks, anchors) = ticks_and_labels(&g.x, &coords, &dirs, axis_ratio(&g.x));
        assert_eq!(ticks.len(), g.x.len());
        let i = g.x.lines.iter().position(|v| *v == 100.0).unwrap();
        let tick = ticks[i].unwrap();
        // 8px tick on a 600px tall plot, centered on the axis at y = 0.5.
        let half = 4.0 / 600.0;
        assert!((tick.p0.y - (0.5 + half)).abs() < 1e-12);
        assert!((tick.p1.y - (0.5 - half)).abs() < 1e-12);
        assert!((anchors[i].y - 0.5).abs() < 1e-12);
        let zero = g.x.lines.iter().position(|v| *v == 0.0).unwrap();
        assert_eq!(ticks[zero], None);
    }

    #[test]
    fn labels_are_clamped_to_canvas() {
        let g = grid(0.0);
        // Vertical axis labels never start left of the indent.
        let p = label_position(&g.y, Point::new(-50.0, 100.0), 30.0);
        assert_eq!(p.x, g.y.axis_width + LABEL_INDENT);
        // Nor run past the right edge.
        let p = label_position(&g.y, Point::new(900.0, 100.0), 30.0);
        assert_eq!(p.x, 800.0 - 30.0 - 1.0 - g.y.axis_width);
        // Horizontal axis labels stay above the bottom edge.
        let p = label_position(&g.x, Point::new(100.0, 600.0), 30.0);
        assert_eq!(p.y, 600.0 - g.x.font_size - g.x.axis_width * 2.0);
        let p = label_position(&g.x, Point::new(100.0, 300.0), 30.0);
        assert_eq!(p, Point::new(100.0 + g.x.axis_width + LABEL_INDENT, 304.0));
    }

    #[test]
    fn center_is_the_origin_crossing() {
        assert_eq!(center_point(&grid(0.0)), Point::new(400.0, 300.0));
    }
}

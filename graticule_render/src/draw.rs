// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use graticule_axis::{GridState, Orientation, RenderState};
use kurbo::{Line, Point, Rect, Stroke};

use crate::geometry::{
    axis_ratio, axis_segment, directions, label_position, line_segments, ticks_and_labels,
    to_screen,
};
use crate::surface::{FontSpec, GridSurface};

/// Clears the canvas and draws both axes.
pub fn draw_grid<S: GridSurface + ?Sized>(grid: &GridState, surface: &mut S) {
    surface.clear(Rect::from_origin_size(Point::ORIGIN, grid.x.shape));
    draw_axis(&grid.x, surface);
    draw_axis(&grid.y, surface);
}

/// Draws one axis: gridlines, ticks, the axis line, then labels.
///
/// Does not clear the surface. Nothing is drawn when the padded plot area
/// is empty.
pub fn draw_axis<S: GridSurface + ?Sized>(state: &RenderState, surface: &mut S) {
    let plot = state.plot_rect();
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }
    let coords = state.coords(&state.lines);
    let segments = line_segments(state, &coords);

    let line_stroke = Stroke::new(state.line_width);
    for (segment, color) in segments.iter().zip(&state.line_colors) {
        if let Some(color) = color {
            surface.stroke_line(*segment, &line_stroke, *color);
        }
    }

    let ratio = axis_ratio(state);
    let dirs = directions(&coords);
    let (ticks, anchors) = ticks_and_labels(state, &coords, &dirs, ratio);
    let origin_tolerance = if state.step > 0.0 {
        state.step * 1e-9
    } else {
        f64::EPSILON
    };
    let at_origin = |value: f64| (value - state.cross.origin).abs() <= origin_tolerance;

    if let Some(axis_color) = state.axis_color {
        let axis_stroke = Stroke::new(state.axis_width / 2.0);
        for (tick, value) in ticks.iter().zip(&state.lines) {
            if let Some(tick) = tick
                && !at_origin(*value)
            {
                let tick = Line::new(to_screen(plot, tick.p0), to_screen(plot, tick.p1));
                surface.stroke_line(tick, &axis_stroke, axis_color);
            }
        }
        if state.axis_visible {
            let axis = axis_segment(state);
            let axis = Line::new(to_screen(plot, axis.p0), to_screen(plot, axis.p1));
            surface.stroke_line(axis, &axis_stroke, axis_color);
        }
    }

    let font = FontSpec::label(state.font_size, &state.font_family);
    let skip_origin = state.orientation == Orientation::Vertical && state.cross.visible;
    for ((label, anchor), value) in state.labels.iter().zip(&anchors).zip(&state.lines) {
        let Some(text) = label else {
            continue;
        };
        if skip_origin && at_origin(*value) {
            continue;
        }
        let width = surface.measure_text(text, &font);
        let origin = label_position(state, to_screen(plot, *anchor), width);
        surface.fill_text(text, origin, &font, state.color);
    }
}

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame state calculation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use graticule_units::num::{almost_equal, clamp, is_multiple_of_eps, range_seq};
use graticule_units::{UnitSystem, css};
use kurbo::{Insets, Size};
use peniko::Color;

use crate::axis::{AxisModel, Orientation};
use crate::state::{CrossAxis, GridState, RenderState};
use crate::style::{
    AxisStyle, DEFAULT_DISTANCE, FontSize, LineColors, Labels, Lines, MAJOR_ALPHA, MINOR_ALPHA,
    Padding, Ticks,
};

/// Finite stand-in for unbounded axis limits.
pub const VALUE_LIMIT: f64 = f64::MAX / 4.0;

/// Smallest range used when the viewport or zoom is degenerate.
const MIN_RANGE: f64 = f64::EPSILON;

/// Computes the render state of one axis for a viewport shape.
///
/// The returned state has no cross-axis information; use [`compute_grid`]
/// for a drawable pair.
#[must_use]
pub fn compute_state(axis: &AxisModel, shape: Size) -> RenderState {
    let style = axis.style();
    let orientation = axis.orientation();
    let mut state = RenderState::empty(orientation);

    let zoom = if axis.zoom().is_finite() && axis.zoom() > 0.0 {
        axis.zoom()
    } else {
        log::warn!("axis zoom {} is not a positive number; using 1", axis.zoom());
        1.0
    };
    let mut range = orientation.extent(shape) * zoom;
    if !range.is_finite() || range <= 0.0 {
        range = MIN_RANGE;
    }
    let (min, max) = axis.bounds();
    let lo = if min.is_nan() { -VALUE_LIMIT } else { min.max(-VALUE_LIMIT) };
    let hi = if max.is_nan() { VALUE_LIMIT } else { max.min(VALUE_LIMIT) };
    let offset = clamp(axis.offset() - range * 0.5, lo, hi - range);

    state.shape = shape;
    state.units = style.units;
    state.range = range;
    state.offset = offset;
    state.zoom = zoom;
    state.step = auto_step(style, zoom);
    state.font_family.clone_from(&style.font_family);
    state.color = style.color;
    state.line_width = style.line_width;
    state.axis_width = if style.axis_width > 0.0 {
        style.axis_width
    } else {
        style.line_width
    };
    state.axis_color = style.axis_color.resolve(style.color);
    state.axis_visible = axis.axis_visible();
    state.axis_origin = axis.axis_origin();
    state.tick_align = clamp(style.tick_align, 0.0, 1.0);
    state.padding = resolve_padding(&style.padding, &state);
    state.font_size = resolve_font_size(&style.font_size);

    state.lines = resolve_lines(style, &state);
    let n = state.lines.len();
    let mut line_colors = resolve_line_colors(style, &state);
    let mut ticks = resolve_ticks(style, &state);
    let mut labels = resolve_labels(style, &state);
    fit_len(&mut line_colors, n, "line color");
    fit_len(&mut ticks, n, "tick");
    fit_len(&mut labels, n, "label");
    state.line_colors = line_colors;
    state.ticks = ticks;
    state.labels = labels;

    if let Ticks::Sparse(extra) = &style.ticks {
        for (value, length) in extra {
            state.lines.push(*value);
            state.line_colors.push(None);
            state.ticks.push(Some(*length));
            state.labels.push(None);
        }
    }
    if let Labels::Sparse(extra) = &style.labels {
        for (value, text) in extra {
            state.lines.push(*value);
            state.line_colors.push(None);
            state.ticks.push(None);
            state.labels.push(Some(text.clone()));
        }
    }

    log::trace!(
        "{orientation:?} axis: {} lines, step {}, offset {}",
        state.lines.len(),
        state.step,
        state.offset
    );
    state
}

/// Computes both axes and links them.
///
/// Each state learns where the other axis crosses it. The tick at that
/// crossing is dropped on both axes. While the horizontal axis line is drawn,
/// the vertical axis also drops its origin label, so the origin is marked once.
#[must_use]
pub fn compute_grid(x_axis: &AxisModel, y_axis: &AxisModel, shape: Size) -> GridState {
    let mut x = compute_state(x_axis, shape);
    let mut y = compute_state(y_axis, shape);

    x.cross = CrossAxis {
        origin: y.axis_origin,
        axis_ratio: y.ratio(x.axis_origin),
        visible: y.axis_visible,
    };
    y.cross = CrossAxis {
        origin: x.axis_origin,
        axis_ratio: x.ratio(y.axis_origin),
        visible: x.axis_visible,
    };
    suppress_origin(&mut x);
    suppress_origin(&mut y);

    GridState { x, y }
}

fn suppress_origin(state: &mut RenderState) {
    let origin = state.cross.origin;
    let tolerance = if state.step > 0.0 {
        state.step * 1e-9
    } else {
        f64::EPSILON
    };
    let drop_label = state.orientation == Orientation::Vertical && state.cross.visible;
    for (i, value) in state.lines.iter().enumerate() {
        if (value - origin).abs() <= tolerance {
            state.ticks[i] = None;
            if drop_label {
                state.labels[i] = None;
            }
        }
    }
}

fn fit_len<T: Clone>(values: &mut Vec<Option<T>>, len: usize, what: &str) {
    if values.len() != len {
        log::warn!(
            "{} {what} entries for {len} gridlines; padding or truncating",
            values.len()
        );
        values.resize(len, None);
    }
}

/// World-space step of the automatic line generator.
fn auto_step(style: &AxisStyle, zoom: f64) -> f64 {
    let distance = if style.distance.is_finite() && style.distance > 0.0 {
        style.distance
    } else {
        DEFAULT_DISTANCE
    };
    let units = style.units;
    units.to_base(units.natural_step(units.from_base(distance * zoom)))
}

fn resolve_padding(padding: &Padding, state: &RenderState) -> Insets {
    let insets = match padding {
        Padding::None => Insets::ZERO,
        Padding::Uniform(v) => Insets::uniform(*v),
        Padding::Sides(insets) => *insets,
        Padding::Computed(f) => f(state),
    };
    let valid = [insets.x0, insets.y0, insets.x1, insets.y1]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0);
    if valid {
        insets
    } else {
        log::warn!("invalid padding {insets:?}; using zero padding");
        Insets::ZERO
    }
}

fn resolve_font_size(size: &FontSize) -> f64 {
    let px = match size {
        FontSize::Px(px) => Some(*px),
        FontSize::Css(text) => css::to_px(text),
    };
    match px {
        Some(px) if px.is_finite() && px > 0.0 => px,
        _ => {
            log::warn!("invalid font size {size:?}; using 11pt");
            css::DEFAULT_FONT_SIZE_PX
        }
    }
}

fn resolve_lines(style: &AxisStyle, state: &RenderState) -> Vec<f64> {
    match &style.lines {
        Lines::Off => Vec::new(),
        Lines::Auto => auto_lines(state),
        Lines::Values(values) => values.clone(),
        Lines::Computed(generator) => generator.generate(state),
    }
}

fn auto_lines(state: &RenderState) -> Vec<f64> {
    let step = state.step;
    if state.orientation.extent(state.shape) <= 0.0 || step.is_nan() || step <= 0.0 {
        return Vec::new();
    }
    let start = libm::floor(state.offset / step) * step;
    let stop = libm::ceil((state.offset + state.range) / step + 1.0) * step;
    match range_seq(start, stop, Some(step)) {
        Ok(values) => values,
        Err(err) => {
            log::warn!("cannot generate gridlines: {err}");
            Vec::new()
        }
    }
}

fn resolve_line_colors(style: &AxisStyle, state: &RenderState) -> Vec<Option<Color>> {
    let n = state.lines.len();
    match &style.line_colors {
        LineColors::Off => alloc::vec![None; n],
        LineColors::Tiered => tiered_colors(style.color, state),
        LineColors::Uniform(paint) => alloc::vec![paint.resolve(style.color); n],
        LineColors::PerLine(colors) => colors.clone(),
        LineColors::Computed(generator) => generator.generate(state),
    }
}

/// Minor and major tier sizes, in display units, for a display-unit step.
fn tiers(units: UnitSystem, step: f64) -> (f64, f64) {
    match units {
        UnitSystem::Imperial => {
            let major = if step < 1.0 {
                1.0
            } else if step < 12.0 {
                12.0
            } else {
                step * 10.0
            };
            (step, major)
        }
        UnitSystem::Point | UnitSystem::Metric => {
            let power = libm::ceil(libm::log10(step));
            (libm::pow(10.0, power), libm::pow(10.0, power + 1.0))
        }
    }
}

fn tiered_colors(base: Color, state: &RenderState) -> Vec<Option<Color>> {
    let units = state.units;
    let step = units.from_base(state.step);
    if step.is_nan() || step <= 0.0 {
        return alloc::vec![None; state.lines.len()];
    }
    let (minor, major) = tiers(units, step);
    let eps = step / 10.0;
    let major_color = base.with_alpha(MAJOR_ALPHA);
    let minor_color = base.with_alpha(MINOR_ALPHA);
    state
        .lines
        .iter()
        .map(|v| {
            let v = units.from_base(*v);
            if is_multiple_of_eps(v, major, eps) {
                Some(major_color)
            } else if is_multiple_of_eps(v, minor, eps) {
                Some(minor_color)
            } else {
                None
            }
        })
        .collect()
}

/// Display-unit step between automatic ticks and labels.
fn tick_step(state: &RenderState) -> f64 {
    let units = state.units;
    let step = units.from_base(state.step);
    units.natural_step(units.natural_step(step * 1.1) * 1.1)
}

fn resolve_ticks(style: &AxisStyle, state: &RenderState) -> Vec<Option<f64>> {
    let n = state.lines.len();
    match &style.ticks {
        Ticks::Off | Ticks::Sparse(_) => alloc::vec![None; n],
        Ticks::Auto => {
            let units = state.units;
            let step = tick_step(state);
            let eps = step / 10.0;
            let length = state.axis_width * 4.0;
            state
                .lines
                .iter()
                .map(|v| {
                    let v = units.from_base(*v);
                    if !is_multiple_of_eps(v, step, eps) || almost_equal(v, 0.0) {
                        None
                    } else {
                        Some(length)
                    }
                })
                .collect()
        }
        Ticks::Uniform(length) => alloc::vec![Some(*length); n],
        Ticks::PerLine(ticks) => ticks.clone(),
        Ticks::Computed(generator) => generator.generate(state),
    }
}

fn resolve_labels(style: &AxisStyle, state: &RenderState) -> Vec<Option<String>> {
    let n = state.lines.len();
    match &style.labels {
        Labels::Off | Labels::Sparse(_) => alloc::vec![None; n],
        Labels::Auto => auto_labels(state, style.thin_labels),
        Labels::PerLine(labels) => labels.clone(),
        Labels::Computed(generator) => generator.generate(state),
    }
}

fn auto_labels(state: &RenderState, thin: bool) -> Vec<Option<String>> {
    let units = state.units;
    let density = if thin {
        units.label_density(1.0 / state.zoom)
    } else {
        1
    };
    let step = tick_step(state) * f64::from(density);
    let eps = step / 100.0;
    let vertical = state.orientation == Orientation::Vertical;
    state
        .lines
        .iter()
        .map(|v| {
            let v = units.from_base(*v);
            if !is_multiple_of_eps(v, step, eps) {
                return None;
            }
            if almost_equal(v, 0.0) {
                return (!vertical).then(|| "0".to_string());
            }
            // Vertical labels show host coordinates, where Y grows downward.
            let shown = if vertical { -v } else { v };
            Some(units.format(shown))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use graticule_units::num::is_multiple_of;

    use super::*;
    use crate::style::{Generator, Paint};

    const SHAPE: Size = Size::new(800.0, 600.0);

    fn x_axis() -> AxisModel {
        AxisModel::new(Orientation::Horizontal)
    }

    fn y_axis() -> AxisModel {
        AxisModel::new(Orientation::Vertical)
    }

    #[test]
    fn range_and_offset_center_the_axis() {
        let mut axis = x_axis();
        axis.set_view(100.0, 0.5);
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.range, 400.0);
        assert_eq!(state.offset, -100.0);
        assert!((state.ratio(100.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn offset_is_clamped_to_bounds() {
        let mut axis = x_axis();
        axis.set_bounds(0.0, 1000.0);
        axis.set_view(0.0, 1.0);
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.offset, 0.0);
        axis.set_view(5000.0, 1.0);
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.offset, 200.0);
    }

    #[test]
    fn unbounded_axis_stays_finite() {
        let mut axis = x_axis();
        axis.set_view(1e300, 1.0);
        let state = compute_state(&axis, SHAPE);
        assert!(state.offset.is_finite());
        assert!(state.lines.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn degenerate_zoom_and_shape() {
        let mut axis = x_axis();
        axis.set_view(0.0, 0.0);
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.zoom, 1.0);
        assert!(state.is_consistent());

        let state = compute_state(&x_axis(), Size::new(0.0, 0.0));
        assert!(state.range > 0.0);
        assert!(state.is_empty());
        assert!(state.is_consistent());
    }

    #[test]
    fn auto_lines_cover_the_visible_range() {
        let state = compute_state(&x_axis(), SHAPE);
        assert_eq!(state.step, 20.0);
        let first = state.lines[0];
        let last = *state.lines.last().unwrap();
        assert!(first <= state.offset);
        assert!(last >= state.offset + state.range);
        assert!(state.lines.iter().all(|v| is_multiple_of(*v, 20.0)));
        assert!(state.is_consistent());
    }

    #[test]
    fn tiered_colors_follow_decades() {
        let state = compute_state(&x_axis(), SHAPE);
        for (v, color) in state.lines.iter().zip(&state.line_colors) {
            let alpha = color.map(|c| c.components[3]);
            if is_multiple_of(*v, 1000.0) {
                assert_eq!(alpha, Some(MAJOR_ALPHA), "{v}");
            } else if is_multiple_of(*v, 100.0) {
                assert_eq!(alpha, Some(MINOR_ALPHA), "{v}");
            } else {
                assert_eq!(alpha, None, "{v}");
            }
        }
    }

    #[test]
    fn imperial_tiers_mark_feet() {
        let mut axis = x_axis();
        axis.style_mut().units = UnitSystem::Imperial;
        // 20px at 1/4 world unit per pixel is 5 points, the nearest step is 1/8".
        axis.set_view(0.0, 0.25);
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.step, 9.0);
        for (v, color) in state.lines.iter().zip(&state.line_colors) {
            let alpha = color.map(|c| c.components[3]);
            if is_multiple_of(*v, 72.0) {
                assert_eq!(alpha, Some(MAJOR_ALPHA));
            } else {
                assert_eq!(alpha, Some(MINOR_ALPHA));
            }
        }
    }

    #[test]
    fn auto_labels_and_ticks() {
        let state = compute_state(&x_axis(), SHAPE);
        // Step 20 gives labels every 100.
        for (i, v) in state.lines.iter().enumerate() {
            let on_label = is_multiple_of(*v, 100.0);
            if *v == 0.0 {
                assert_eq!(state.labels[i].as_deref(), Some("0"));
                assert_eq!(state.ticks[i], None);
            } else if on_label {
                assert_eq!(state.labels[i], Some(v.to_string()));
                assert_eq!(state.ticks[i], Some(8.0));
            } else {
                assert_eq!(state.labels[i], None);
                assert_eq!(state.ticks[i], None);
            }
        }
    }

    #[test]
    fn vertical_labels_are_negated_and_skip_zero() {
        let state = compute_state(&y_axis(), SHAPE);
        let zero = state.lines.iter().position(|v| *v == 0.0).unwrap();
        assert_eq!(state.labels[zero], None);
        let hundred = state.lines.iter().position(|v| *v == 100.0).unwrap();
        assert_eq!(state.labels[hundred].as_deref(), Some("-100"));
    }

    #[test]
    fn metric_labels_are_formatted() {
        let mut axis = x_axis();
        axis.style_mut().units = UnitSystem::Metric;
        let state = compute_state(&axis, SHAPE);
        let labels: Vec<&str> = state.labels.iter().flatten().map(String::as_str).collect();
        assert!(labels.contains(&"0"));
        assert!(labels.iter().any(|l| l.ends_with("mm") || l.ends_with("cm")));
    }

    #[test]
    fn thin_labels_skip_more_when_zoomed_out() {
        let mut axis = x_axis();
        axis.set_view(0.0, 5.0);
        let dense = compute_state(&axis, SHAPE);
        axis.style_mut().thin_labels = true;
        let thin = compute_state(&axis, SHAPE);
        let count = |s: &RenderState| s.labels.iter().flatten().count();
        assert!(count(&thin) < count(&dense));
    }

    #[test]
    fn static_and_computed_rules_keep_lengths_aligned() {
        let mut axis = x_axis();
        let style = axis.style_mut();
        style.lines = Lines::Values(vec![-50.0, 0.0, 50.0, 75.0]);
        style.line_colors = LineColors::PerLine(vec![Some(Color::WHITE)]);
        style.ticks = Ticks::Computed(Generator::new(|s: &RenderState| {
            s.lines.iter().map(|v| Some(*v / 10.0)).collect()
        }));
        style.labels = Labels::PerLine(vec![None; 9]);
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.len(), 4);
        assert!(state.is_consistent());
        assert_eq!(state.line_colors[0], Some(Color::WHITE));
        assert_eq!(state.line_colors[1], None);
        assert_eq!(state.ticks[2], Some(5.0));
    }

    #[test]
    fn sparse_entries_are_appended() {
        let mut axis = x_axis();
        let style = axis.style_mut();
        style.lines = Lines::Values(vec![0.0, 100.0]);
        style.ticks = Ticks::Sparse(vec![(33.0, 6.0)]);
        style.labels = Labels::Sparse(vec![(42.0, String::from("here")), (7.0, String::from("x"))]);
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.lines, [0.0, 100.0, 33.0, 42.0, 7.0]);
        assert!(state.is_consistent());
        assert_eq!(state.ticks, [None, None, Some(6.0), None, None]);
        assert_eq!(state.labels[3].as_deref(), Some("here"));
        assert_eq!(state.line_colors[2..], [None, None, None]);
    }

    #[test]
    fn off_rules_produce_nothing_drawable() {
        let mut axis = x_axis();
        let style = axis.style_mut();
        style.line_colors = LineColors::Off;
        style.ticks = Ticks::Off;
        style.labels = Labels::Off;
        style.axis_color = Paint::None;
        let state = compute_state(&axis, SHAPE);
        assert!(!state.is_empty());
        assert!(state.line_colors.iter().all(Option::is_none));
        assert!(state.ticks.iter().all(Option::is_none));
        assert!(state.labels.iter().all(Option::is_none));
        assert_eq!(state.axis_color, None);

        axis.style_mut().lines = Lines::Off;
        assert!(compute_state(&axis, SHAPE).is_empty());
    }

    #[test]
    fn invalid_padding_and_font_fall_back() {
        let mut axis = x_axis();
        axis.style_mut().padding = Padding::Uniform(f64::NAN);
        axis.style_mut().font_size = FontSize::Css(String::from("huge"));
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.padding, Insets::ZERO);
        assert_eq!(state.font_size, css::DEFAULT_FONT_SIZE_PX);

        axis.style_mut().padding = Padding::Uniform(10.0);
        axis.style_mut().font_size = FontSize::Px(12.0);
        let state = compute_state(&axis, SHAPE);
        assert_eq!(state.padding, Insets::uniform(10.0));
        assert_eq!(state.font_size, 12.0);
        assert_eq!(state.plot_rect(), kurbo::Rect::new(10.0, 10.0, 790.0, 590.0));
    }

    #[test]
    fn axis_width_falls_back_to_line_width() {
        let mut axis = x_axis();
        axis.style_mut().axis_width = 0.0;
        axis.style_mut().line_width = 3.0;
        assert_eq!(compute_state(&axis, SHAPE).axis_width, 3.0);
    }

    #[test]
    fn grid_links_and_suppresses_origin() {
        let grid = compute_grid(&x_axis(), &y_axis(), SHAPE);
        assert!((grid.x.cross.axis_ratio - 0.5).abs() < 1e-12);
        assert!((grid.y.cross.axis_ratio - 0.5).abs() < 1e-12);
        for state in [&grid.x, &grid.y] {
            assert!(state.is_consistent());
            let i = state.lines.iter().position(|v| *v == 0.0).unwrap();
            assert_eq!(state.ticks[i], None);
        }
        let i = grid.x.lines.iter().position(|v| *v == 0.0).unwrap();
        assert_eq!(grid.x.labels[i].as_deref(), Some("0"));
    }

    #[test]
    fn moved_origin_suppresses_explicit_labels() {
        let mut x = x_axis();
        let mut y = y_axis();
        x.set_axis_origin(100.0);
        y.set_axis_origin(200.0);
        y.style_mut().labels = Labels::Computed(Generator::new(|s: &RenderState| {
            s.lines.iter().map(|v| Some(v.to_string())).collect()
        }));
        x.style_mut().ticks = Ticks::Uniform(4.0);
        let grid = compute_grid(&x, &y, SHAPE);
        assert_eq!(grid.y.cross.origin, 200.0);
        assert_eq!(grid.x.cross.origin, 100.0);
        let yi = grid.y.lines.iter().position(|v| *v == 100.0).unwrap();
        assert_eq!(grid.y.labels[yi], None);
        let xi = grid.x.lines.iter().position(|v| *v == 200.0).unwrap();
        assert_eq!(grid.x.ticks[xi], None);
        assert_eq!(grid.axis(Orientation::Vertical), &grid.y);
    }

    #[test]
    fn hidden_horizontal_axis_keeps_vertical_origin_label() {
        let mut x = x_axis();
        let mut y = y_axis();
        y.style_mut().labels = Labels::Computed(Generator::new(|s: &RenderState| {
            s.lines.iter().map(|v| Some(v.to_string())).collect()
        }));
        let grid = compute_grid(&x, &y, SHAPE);
        assert!(grid.y.cross.visible);
        let i = grid.y.lines.iter().position(|v| *v == 0.0).unwrap();
        assert_eq!(grid.y.labels[i], None);

        x.set_axis_visible(false);
        let grid = compute_grid(&x, &y, SHAPE);
        assert!(!grid.y.cross.visible);
        assert!(grid.x.cross.visible);
        assert_eq!(grid.y.labels[i].as_deref(), Some("0"));
        // The tick at the crossing is still dropped.
        assert_eq!(grid.y.ticks[i], None);
    }

    #[test]
    fn recompute_is_deterministic() {
        let mut x = x_axis();
        x.set_view(123.4, 0.37);
        let a = compute_grid(&x, &y_axis(), SHAPE);
        let b = compute_grid(&x, &y_axis(), SHAPE);
        assert_eq!(a, b);
    }
}

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis styling and the rules that decide which lines, ticks and labels are drawn.
//!
//! Each per-line property is a tagged rule: off, the built-in generator, a
//! static list, a closure over the in-progress [`RenderState`], or (for
//! ticks and labels) a sparse set of extra entries. The state calculator
//! resolves every rule with a single `match`.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use graticule_units::UnitSystem;
use kurbo::Insets;
use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::state::RenderState;

/// Default minimum on-screen distance between gridlines, in pixels.
pub const DEFAULT_DISTANCE: f64 = 20.0;
/// Alpha applied to the base color for major gridlines.
pub const MAJOR_ALPHA: f32 = 0.3;
/// Alpha applied to the base color for minor gridlines.
pub const MINOR_ALPHA: f32 = 0.1;

/// A per-line value computed from the in-progress render state.
///
/// The state passed in has its range, offset, padding and font resolved, and
/// `lines` filled in for every rule except [`Lines`] itself.
pub struct Generator<T>(Arc<dyn Fn(&RenderState) -> Vec<T> + Send + Sync>);

impl<T> Generator<T> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&RenderState) -> Vec<T> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Runs the closure.
    #[must_use]
    pub fn generate(&self, state: &RenderState) -> Vec<T> {
        (self.0)(state)
    }
}

impl<T> Clone for Generator<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Generator(..)")
    }
}

/// Which world values get a gridline.
#[derive(Clone, Debug, Default)]
pub enum Lines {
    /// No gridlines.
    Off,
    /// Natural steps of the axis' unit system, about `distance` pixels apart.
    #[default]
    Auto,
    /// Exactly these world values.
    Values(Vec<f64>),
    /// Computed from the state.
    Computed(Generator<f64>),
}

/// A single color, possibly derived from the axis' base color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Not drawn.
    None,
    /// The base color with this alpha.
    Alpha(f32),
    /// An explicit color.
    Solid(Color),
}

impl Paint {
    /// Parses a CSS color string.
    ///
    /// An unparseable string falls back to the opaque base color with a warning.
    #[must_use]
    pub fn css(value: &str) -> Self {
        match parse_color(value) {
            Ok(color) => Self::Solid(color.to_alpha_color::<Srgb>()),
            Err(err) => {
                log::warn!("invalid color {value:?} ({err}); using the base color");
                Self::Alpha(1.0)
            }
        }
    }

    /// Resolves against a base color.
    #[must_use]
    pub fn resolve(self, base: Color) -> Option<Color> {
        match self {
            Self::None => None,
            Self::Alpha(alpha) => Some(base.with_alpha(alpha.clamp(0.0, 1.0))),
            Self::Solid(color) => Some(color),
        }
    }
}

/// Per-line colors. `None` entries are not drawn.
#[derive(Clone, Debug, Default)]
pub enum LineColors {
    /// No line is drawn.
    Off,
    /// Major and minor tiers of the base color, other lines hidden.
    #[default]
    Tiered,
    /// The same paint for every line.
    Uniform(Paint),
    /// One entry per line.
    PerLine(Vec<Option<Color>>),
    /// Computed from the state.
    Computed(Generator<Option<Color>>),
}

/// Tick lengths in pixels. `None` entries get no tick.
#[derive(Clone, Debug, Default)]
pub enum Ticks {
    /// No ticks.
    Off,
    /// Ticks on label-step multiples, four axis widths long, none at zero.
    #[default]
    Auto,
    /// The same length for every line.
    Uniform(f64),
    /// One entry per line.
    PerLine(Vec<Option<f64>>),
    /// Computed from the state.
    Computed(Generator<Option<f64>>),
    /// No ticks on regular lines; extra `(value, length)` entries appended.
    Sparse(Vec<(f64, f64)>),
}

/// Label strings. `None` entries are not labeled.
#[derive(Clone, Debug, Default)]
pub enum Labels {
    /// No labels.
    Off,
    /// Formatted values on label-step multiples.
    #[default]
    Auto,
    /// One entry per line.
    PerLine(Vec<Option<String>>),
    /// Computed from the state.
    Computed(Generator<Option<String>>),
    /// No labels on regular lines; extra `(value, text)` entries appended.
    Sparse(Vec<(f64, String)>),
}

/// Space between the canvas edge and the plotted area.
#[derive(Clone, Default)]
pub enum Padding {
    /// No padding.
    #[default]
    None,
    /// The same padding on all four sides.
    Uniform(f64),
    /// Per-side padding (`x0` left, `y0` top, `x1` right, `y1` bottom).
    Sides(Insets),
    /// Computed from the state.
    Computed(Arc<dyn Fn(&RenderState) -> Insets + Send + Sync>),
}

impl fmt::Debug for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Uniform(v) => f.debug_tuple("Uniform").field(v).finish(),
            Self::Sides(insets) => f.debug_tuple("Sides").field(insets).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Label font size.
#[derive(Clone, Debug, PartialEq)]
pub enum FontSize {
    /// Pixels.
    Px(f64),
    /// A CSS length such as `"11pt"`.
    Css(String),
}

impl Default for FontSize {
    fn default() -> Self {
        Self::Css(String::from("11pt"))
    }
}

/// Visual configuration of one axis.
#[derive(Clone, Debug)]
pub struct AxisStyle {
    /// Base color: labels use it directly, alpha paints derive from it.
    pub color: Color,
    /// Gridline colors.
    pub line_colors: LineColors,
    /// Axis line paint.
    pub axis_color: Paint,
    /// Gridline stroke width.
    pub line_width: f64,
    /// Axis line width; zero or less falls back to `line_width`.
    pub axis_width: f64,
    /// Label font size.
    pub font_size: FontSize,
    /// Label font family.
    pub font_family: String,
    /// Plot area padding.
    pub padding: Padding,
    /// Where ticks sit across the axis line: `0` entirely on one side, `1` on the other.
    pub tick_align: f64,
    /// Minimum on-screen distance between automatic gridlines, in pixels.
    pub distance: f64,
    /// Unit system for automatic steps and labels.
    pub units: UnitSystem,
    /// Thin automatic labels further as the view zooms out.
    pub thin_labels: bool,
    /// Gridline values.
    pub lines: Lines,
    /// Tick lengths.
    pub ticks: Ticks,
    /// Label text.
    pub labels: Labels,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_colors: LineColors::Tiered,
            axis_color: Paint::Alpha(0.8),
            line_width: 1.0,
            axis_width: 2.0,
            font_size: FontSize::default(),
            font_family: String::from("sans-serif"),
            padding: Padding::None,
            tick_align: 0.5,
            distance: DEFAULT_DISTANCE,
            units: UnitSystem::Point,
            thin_labels: false,
            lines: Lines::Auto,
            ticks: Ticks::Auto,
            labels: Labels::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_resolution() {
        let base = Color::from_rgba8(10, 20, 30, 255);
        assert_eq!(Paint::None.resolve(base), None);
        assert_eq!(Paint::Solid(Color::WHITE).resolve(base), Some(Color::WHITE));
        let faded = Paint::Alpha(0.5).resolve(base).unwrap();
        assert_eq!(faded.components[3], 0.5);
        let clamped = Paint::Alpha(4.0).resolve(base).unwrap();
        assert_eq!(clamped.components[3], 1.0);
    }

    #[test]
    fn css_paint_falls_back_to_base() {
        let red = Paint::css("#ff0000");
        assert_eq!(red, Paint::Solid(Color::from_rgba8(255, 0, 0, 255)));
        assert_eq!(Paint::css("not a color"), Paint::Alpha(1.0));
    }

    #[test]
    fn generator_is_shared_on_clone() {
        let g = Generator::new(|state: &RenderState| alloc::vec![state.range; 2]);
        let g2 = g.clone();
        let state = RenderState::empty(crate::Orientation::Horizontal);
        assert_eq!(g2.generate(&state), g.generate(&state));
        assert_eq!(alloc::format!("{g:?}"), "Generator(..)");
    }
}

// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement unit systems: natural grid steps, conversions, and label formatting.
//!
//! World space is measured in *base units* (typographic points, 1/72 inch).
//! Each [`UnitSystem`] has its own *display unit* (points, inches or
//! millimeters); step selection and formatting work in display units, and
//! [`UnitSystem::to_base`] / [`UnitSystem::from_base`] move between the two.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;
/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;
/// Points per millimeter.
pub const POINTS_PER_MM: f64 = POINTS_PER_INCH / MM_PER_INCH;

/// Target on-screen distance between gridlines, in pixels.
pub const IDEAL_GRID_LINE_SPACING: f64 = 50.0;
/// Smallest on-screen size, in pixels, at which an increment is considered visible.
pub const MIN_VISIBLE_PIXELS: f64 = 5.0;

const DECIMAL_MULTIPLIERS: [f64; 3] = [1.0, 2.0, 5.0];

const DECIMAL_INCREMENTS: [f64; 10] = [
    1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0,
];

// Inches. 12 is a foot, 36 a yard.
const IMPERIAL_INCREMENTS: [f64; 17] = [
    1.0 / 16.0,
    1.0 / 8.0,
    1.0 / 4.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    6.0,
    12.0,
    24.0,
    36.0,
    48.0,
    72.0,
    120.0,
    240.0,
    360.0,
];

const SIXTEENTHS: [&str; 15] = [
    "1/16", "1/8", "3/16", "1/4", "5/16", "3/8", "7/16", "1/2", "9/16", "5/8", "11/16", "3/4",
    "13/16", "7/8", "15/16",
];

/// A measurement system used for grid spacing and labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Plain base units (typographic points), labeled as integers.
    #[default]
    Point,
    /// Inches and feet, labeled with sixteenth-inch fractions.
    Imperial,
    /// Millimeters, labeled as mm, cm or m depending on magnitude.
    Metric,
}

impl UnitSystem {
    /// All unit systems, in declaration order.
    pub const ALL: [Self; 3] = [Self::Point, Self::Imperial, Self::Metric];

    /// Short lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "points",
            Self::Imperial => "imperial",
            Self::Metric => "metric",
        }
    }

    /// Base units (points) per display unit.
    #[must_use]
    pub fn base_per_unit(self) -> f64 {
        match self {
            Self::Point => 1.0,
            Self::Imperial => POINTS_PER_INCH,
            Self::Metric => POINTS_PER_MM,
        }
    }

    /// Converts a value in this system's display unit into base units.
    #[must_use]
    pub fn to_base(self, value: f64) -> f64 {
        value * self.base_per_unit()
    }

    /// Converts a value in base units into this system's display unit.
    #[must_use]
    pub fn from_base(self, value: f64) -> f64 {
        value / self.base_per_unit()
    }

    /// The smallest increment worth drawing, in display units.
    #[must_use]
    pub fn min_increment(self) -> f64 {
        match self {
            Self::Point | Self::Metric => 1.0,
            Self::Imperial => 1.0 / 16.0,
        }
    }

    /// The ordered table of "round" steps for this system, in display units.
    ///
    /// Decimal systems continue the `1-2-5` progression beyond the table.
    #[must_use]
    pub fn natural_increments(self) -> &'static [f64] {
        match self {
            Self::Point | Self::Metric => &DECIMAL_INCREMENTS,
            Self::Imperial => &IMPERIAL_INCREMENTS,
        }
    }

    /// Smallest natural increment that is at least `min_step` display units.
    ///
    /// Degenerate input (zero, negative, or non-finite) yields
    /// [`UnitSystem::min_increment`].
    ///
    /// ```
    /// use graticule_units::UnitSystem;
    ///
    /// assert_eq!(UnitSystem::Point.natural_step(20.0), 20.0);
    /// assert_eq!(UnitSystem::Point.natural_step(21.0), 50.0);
    /// assert_eq!(UnitSystem::Imperial.natural_step(0.1), 0.125);
    /// assert_eq!(UnitSystem::Imperial.natural_step(500.0), 720.0);
    /// ```
    #[must_use]
    pub fn natural_step(self, min_step: f64) -> f64 {
        if !min_step.is_finite() || min_step <= 0.0 {
            return self.min_increment();
        }
        match self {
            Self::Point | Self::Metric => decimal_step(min_step),
            Self::Imperial => table_step(&IMPERIAL_INCREMENTS, min_step),
        }
    }

    /// Screen pixels per display unit at zoom `1`.
    ///
    /// A non-positive `pixel_ratio` is treated as `1`.
    #[must_use]
    pub fn unit_to_pixel_ratio(self, pixel_ratio: f64) -> f64 {
        let pixel_ratio = if pixel_ratio > 0.0 && pixel_ratio.is_finite() {
            pixel_ratio
        } else {
            1.0
        };
        self.base_per_unit() / pixel_ratio
    }

    /// Natural gridline spacing, in display units, for a view zoom.
    ///
    /// `measured_pixels_per_unit` is preferred when it is a positive finite
    /// number (for example, read back from the host's view transform);
    /// otherwise the analytic [`UnitSystem::unit_to_pixel_ratio`] is used.
    #[must_use]
    pub fn grid_spacing(
        self,
        zoom: f64,
        pixel_ratio: f64,
        measured_pixels_per_unit: Option<f64>,
    ) -> f64 {
        let pixels_per_unit = match measured_pixels_per_unit {
            Some(m) if m > 0.0 && m.is_finite() => m,
            _ => zoom * self.unit_to_pixel_ratio(pixel_ratio),
        };
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return self.min_increment();
        }
        self.natural_step(IDEAL_GRID_LINE_SPACING / pixels_per_unit)
    }

    /// Zoom at which the smallest increment spans `desired_px` pixels.
    #[must_use]
    pub fn min_zoom_for_display(self, pixel_ratio: f64, desired_px: f64) -> f64 {
        desired_px / (self.min_increment() * self.unit_to_pixel_ratio(pixel_ratio))
    }

    /// Resolves a [`MaxZoom`] policy for this system.
    ///
    /// A limit never prevents zooming in far enough for the smallest
    /// increment to reach [`MIN_VISIBLE_PIXELS`].
    #[must_use]
    pub fn max_zoom(self, pixel_ratio: f64, bound: MaxZoom) -> f64 {
        match bound {
            MaxZoom::Unbounded => f64::INFINITY,
            MaxZoom::Limit(limit) => {
                let floor = self.min_zoom_for_display(pixel_ratio, MIN_VISIBLE_PIXELS);
                if limit.is_nan() { floor } else { limit.max(floor) }
            }
        }
    }

    /// Label skip factor: only every Nth gridline is labeled at this zoom.
    #[must_use]
    pub fn label_density(self, zoom: f64) -> u32 {
        if zoom.is_nan() || zoom <= 0.0 {
            return 1;
        }
        if zoom < 0.3 {
            10
        } else if zoom < 0.6 {
            5
        } else if zoom < 0.9 {
            2
        } else {
            1
        }
    }

    /// Formats a value given in this system's display unit.
    ///
    /// Non-finite input is returned as its `Display` string.
    ///
    /// ```
    /// use graticule_units::UnitSystem;
    ///
    /// assert_eq!(UnitSystem::Point.format(12.4), "12");
    /// assert_eq!(UnitSystem::Imperial.format(14.5), "1'2 1/2\"");
    /// assert_eq!(UnitSystem::Imperial.format(-0.375), "-3/8\"");
    /// assert_eq!(UnitSystem::Metric.format(1500.0), "1.5m");
    /// assert_eq!(UnitSystem::Metric.format(45.0), "45mm");
    /// ```
    #[must_use]
    pub fn format(self, value: f64) -> String {
        if !value.is_finite() {
            log::warn!("cannot format non-finite grid value {value}");
            return value.to_string();
        }
        let magnitude = value.abs();
        let body = match self {
            Self::Point => format!("{:.0}", libm::round(magnitude)),
            Self::Imperial => format_imperial(magnitude),
            Self::Metric => format_metric(magnitude),
        };
        if value < 0.0 && body.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            format!("-{body}")
        } else {
            body
        }
    }

    /// Falls back to [`UnitSystem::Point`] with a warning when `name` is not recognized.
    #[must_use]
    pub fn parse_lossy(name: &str) -> Self {
        match name.parse() {
            Ok(system) => system,
            Err(err) => {
                log::warn!("{err}; falling back to points");
                Self::Point
            }
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown unit system name.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseUnitSystemError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Debug for ParseUnitSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseUnitSystemError {{ input: {:?} }}", self.input)
    }
}

impl fmt::Display for ParseUnitSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit system {:?}", self.input)
    }
}

impl core::error::Error for ParseUnitSystemError {}

impl FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "point" | "points" | "pt" | "base" => Ok(Self::Point),
            "imperial" | "inch" | "inches" | "in" => Ok(Self::Imperial),
            "metric" | "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(Self::Metric)
            }
            _ => Err(ParseUnitSystemError {
                input: s.to_string(),
            }),
        }
    }
}

/// How far a view may zoom in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MaxZoom {
    /// No upper bound.
    #[default]
    Unbounded,
    /// An explicit upper bound, raised if needed so the smallest increment stays reachable.
    Limit(f64),
}

/// Converts a distance between unit systems through base units.
///
/// ```
/// use graticule_units::{UnitSystem, convert};
///
/// assert_eq!(convert(1.0, UnitSystem::Imperial, UnitSystem::Point), 72.0);
/// assert!((convert(1.0, UnitSystem::Imperial, UnitSystem::Metric) - 25.4).abs() < 1e-9);
/// ```
#[must_use]
pub fn convert(distance: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return distance;
    }
    to.from_base(from.to_base(distance))
}

fn decimal_step(min_step: f64) -> f64 {
    let order = libm::pow(10.0, libm::floor(libm::log10(min_step)));
    let mut last = order;
    for decade in [order, order * 10.0] {
        for m in DECIMAL_MULTIPLIERS {
            let candidate = m * decade;
            if candidate >= min_step {
                return candidate;
            }
            last = candidate;
        }
    }
    last * libm::ceil(min_step / last)
}

fn table_step(table: &[f64], min_step: f64) -> f64 {
    if let Some(step) = table.iter().copied().find(|s| *s >= min_step) {
        return step;
    }
    match table.last() {
        Some(&largest) => largest * libm::ceil(min_step / largest),
        None => min_step,
    }
}

fn format_imperial(inches: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "label values are far below u64::MAX sixteenths; larger ones saturate"
    )]
    #[allow(clippy::cast_sign_loss, reason = "inches is non-negative")]
    let sixteenths = libm::round(inches * 16.0) as u64;
    let feet = sixteenths / 192;
    let rest = sixteenths % 192;
    let whole = rest / 16;
    let frac = match rest % 16 {
        0 => None,
        n => SIXTEENTHS.get(usize::try_from(n - 1).unwrap_or(0)).copied(),
    };

    match (feet, whole, frac) {
        (0, whole, None) => format!("{whole}\""),
        (0, 0, Some(frac)) => format!("{frac}\""),
        (0, whole, Some(frac)) => format!("{whole} {frac}\""),
        (feet, 0, None) => format!("{feet}'"),
        (feet, whole, None) => format!("{feet}'{whole}\""),
        (feet, 0, Some(frac)) => format!("{feet}'{frac}\""),
        (feet, whole, Some(frac)) => format!("{feet}'{whole} {frac}\""),
    }
}

fn format_metric(mm: f64) -> String {
    if mm >= 1000.0 {
        format!("{}m", trim_decimal(format!("{:.2}", mm / 1000.0)))
    } else if mm >= 100.0 {
        format!("{}cm", trim_decimal(format!("{:.1}", mm / 10.0)))
    } else if mm >= 10.0 {
        format!("{:.0}mm", libm::round(mm))
    } else {
        format!("{}mm", trim_decimal(format!("{mm:.1}")))
    }
}

fn trim_decimal(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn natural_step_matches_boundary() {
        assert_eq!(UnitSystem::Point.natural_step(20.0), 20.0);
        assert_eq!(UnitSystem::Point.natural_step(1.0), 1.0);
        assert_eq!(UnitSystem::Point.natural_step(0.3), 0.5);
        assert_eq!(UnitSystem::Metric.natural_step(6.0), 10.0);
        assert_eq!(UnitSystem::Metric.natural_step(101.0), 200.0);
        assert_eq!(UnitSystem::Imperial.natural_step(12.0), 12.0);
        assert_eq!(UnitSystem::Imperial.natural_step(13.0), 24.0);
    }

    fn candidates(system: UnitSystem) -> Vec<f64> {
        match system {
            UnitSystem::Point | UnitSystem::Metric => (-3..=6)
                .flat_map(|k| DECIMAL_MULTIPLIERS.map(|m| m * libm::pow(10.0, f64::from(k))))
                .collect(),
            UnitSystem::Imperial => IMPERIAL_INCREMENTS
                .iter()
                .copied()
                .chain((2..40).map(|k| 360.0 * f64::from(k)))
                .collect(),
        }
    }

    #[test]
    fn natural_step_is_smallest_qualifying() {
        for system in UnitSystem::ALL {
            let table = candidates(system);
            let mut min_step = 0.01;
            while min_step < 5000.0 {
                let step = system.natural_step(min_step);
                assert!(step >= min_step, "{system}: {step} < {min_step}");
                let smaller = table
                    .iter()
                    .any(|c| *c >= min_step * (1.0 + 1e-12) && *c < step * (1.0 - 1e-12));
                assert!(!smaller, "{system}: a smaller increment than {step} fits {min_step}");
                min_step *= 1.37;
            }
        }
    }

    #[test]
    fn degenerate_step_input_uses_min_increment() {
        for system in UnitSystem::ALL {
            assert_eq!(system.natural_step(0.0), system.min_increment());
            assert_eq!(system.natural_step(-3.0), system.min_increment());
            assert_eq!(system.natural_step(f64::NAN), system.min_increment());
            assert_eq!(system.grid_spacing(0.0, 1.0, None), system.min_increment());
            assert_eq!(system.grid_spacing(-2.0, 1.0, None), system.min_increment());
        }
    }

    #[test]
    fn grid_spacing_prefers_measured_ratio() {
        // 50px at 1px per point is 50 points.
        assert_eq!(UnitSystem::Point.grid_spacing(1.0, 1.0, None), 50.0);
        // Zooming in halves the ideal step.
        assert_eq!(UnitSystem::Point.grid_spacing(2.0, 1.0, None), 50.0 / 2.0);
        // A measured ratio of 10px per point gives 5 points.
        assert_eq!(UnitSystem::Point.grid_spacing(1.0, 1.0, Some(10.0)), 5.0);
        assert_eq!(UnitSystem::Point.grid_spacing(1.0, 1.0, Some(0.0)), 50.0);
        // One inch is 72px at zoom 1, so the smallest step of at least 50/72 inch.
        assert_eq!(UnitSystem::Imperial.grid_spacing(1.0, 1.0, None), 1.0);
    }

    #[test]
    fn max_zoom_policies() {
        assert_eq!(
            UnitSystem::Point.max_zoom(1.0, MaxZoom::Unbounded),
            f64::INFINITY
        );
        assert_eq!(UnitSystem::Point.max_zoom(1.0, MaxZoom::Limit(20.0)), 20.0);
        // The smallest point increment needs zoom 5 to span 5px.
        assert_eq!(UnitSystem::Point.max_zoom(1.0, MaxZoom::Limit(2.0)), 5.0);
        let imperial = UnitSystem::Imperial.min_zoom_for_display(1.0, 10.0);
        assert!((imperial - 10.0 / 4.5).abs() < 1e-12);
    }

    #[test]
    fn label_density_thresholds() {
        let s = UnitSystem::Point;
        assert_eq!(s.label_density(0.1), 10);
        assert_eq!(s.label_density(0.5), 5);
        assert_eq!(s.label_density(0.7), 2);
        assert_eq!(s.label_density(1.0), 1);
        assert_eq!(s.label_density(30.0), 1);
        assert_eq!(s.label_density(0.0), 1);
        assert_eq!(s.label_density(f64::NAN), 1);
    }

    #[test]
    fn format_points() {
        assert_eq!(UnitSystem::Point.format(0.0), "0");
        assert_eq!(UnitSystem::Point.format(-0.4), "0");
        assert_eq!(UnitSystem::Point.format(99.5), "100");
        assert_eq!(UnitSystem::Point.format(-250.0), "-250");
    }

    #[test]
    fn format_imperial() {
        let s = UnitSystem::Imperial;
        assert_eq!(s.format(14.5), "1'2 1/2\"");
        assert_eq!(s.format(12.0), "1'");
        assert_eq!(s.format(13.0), "1'1\"");
        assert_eq!(s.format(12.25), "1'1/4\"");
        assert_eq!(s.format(0.5), "1/2\"");
        assert_eq!(s.format(0.0625), "1/16\"");
        assert_eq!(s.format(3.0), "3\"");
        assert_eq!(s.format(3.75), "3 3/4\"");
        assert_eq!(s.format(11.99), "1'");
        assert_eq!(s.format(0.0), "0\"");
        assert_eq!(s.format(-14.5), "-1'2 1/2\"");
        assert_eq!(s.format(-0.01), "0\"");
    }

    #[test]
    fn format_metric() {
        let s = UnitSystem::Metric;
        assert_eq!(s.format(1500.0), "1.5m");
        assert_eq!(s.format(1000.0), "1m");
        assert_eq!(s.format(1234.0), "1.23m");
        assert_eq!(s.format(150.0), "15cm");
        assert_eq!(s.format(155.0), "15.5cm");
        assert_eq!(s.format(45.0), "45mm");
        assert_eq!(s.format(4.5), "4.5mm");
        assert_eq!(s.format(5.0), "5mm");
        assert_eq!(s.format(-45.0), "-45mm");
        assert_eq!(s.format(0.0), "0mm");
    }

    #[test]
    fn format_non_finite_is_soft() {
        assert_eq!(UnitSystem::Metric.format(f64::NAN), "NaN");
        assert_eq!(UnitSystem::Point.format(f64::INFINITY), "inf");
    }

    #[test]
    fn convert_round_trips() {
        let values = [0.0, 1.0, -3.25, 14.5, 1500.0, 1e-3, 123_456.789];
        for from in UnitSystem::ALL {
            for to in UnitSystem::ALL {
                for v in values {
                    let back = convert(convert(v, from, to), to, from);
                    assert!((back - v).abs() < 1e-6, "{v} {from}->{to}->{from} gave {back}");
                }
            }
        }
        assert_eq!(convert(7.0, UnitSystem::Metric, UnitSystem::Metric), 7.0);
        assert!((convert(72.0, UnitSystem::Point, UnitSystem::Metric) - 25.4).abs() < 1e-9);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!(" mm ".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!("points".parse::<UnitSystem>(), Ok(UnitSystem::Point));
        assert!("furlongs".parse::<UnitSystem>().is_err());
        assert_eq!(UnitSystem::parse_lossy("furlongs"), UnitSystem::Point);
        for system in UnitSystem::ALL {
            assert_eq!(system.name().parse::<UnitSystem>(), Ok(system));
        }
    }
}

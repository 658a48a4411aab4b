// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS length strings such as `"11pt"` or `"1.5em"`, converted to pixels.

/// Default label font size: `11pt` at 96 px per inch.
pub const DEFAULT_FONT_SIZE_PX: f64 = 11.0 * 96.0 / 72.0;

// Pixels per unit, at 96 px per inch and a 16px root font.
const UNIT_PX: [(&str, f64); 10] = [
    ("ch", 8.0),
    ("ex", 7.156_25),
    ("em", 16.0),
    ("rem", 16.0),
    ("in", 96.0),
    ("cm", 96.0 / 2.54),
    ("mm", 96.0 / 25.4),
    ("pt", 96.0 / 72.0),
    ("pc", 96.0 / 6.0),
    ("px", 1.0),
];

/// Converts a CSS length to pixels.
///
/// A bare unit counts as one of that unit, a bare number as pixels, and a
/// number followed by another length multiplies it (`"2 3pt"` is six points).
/// Returns `None` for anything else.
///
/// ```
/// use graticule_units::css::to_px;
///
/// assert_eq!(to_px("12px"), Some(12.0));
/// assert_eq!(to_px("2em"), Some(32.0));
/// assert_eq!(to_px("in"), Some(96.0));
/// assert_eq!(to_px("bogus"), None);
/// ```
#[must_use]
pub fn to_px(input: &str) -> Option<f64> {
    let mut s = input.trim();
    if s.is_empty() {
        return None;
    }
    // Each leading number scales whatever length follows it.
    let mut factor = 1.0;
    let px = loop {
        if let Some(px) = unit_px(s) {
            break factor * px;
        }
        let (number, rest) = split_number(s)?;
        factor *= number;
        s = rest.trim();
        if s.is_empty() {
            break factor;
        }
    };
    px.is_finite().then_some(px)
}

fn unit_px(unit: &str) -> Option<f64> {
    UNIT_PX
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(unit))
        .map(|(_, px)| *px)
}

// Splits a leading decimal number (optional sign, fraction and exponent) from the rest.
fn split_number(s: &str) -> Option<(f64, &str)> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    if end == digits_start || (end == digits_start + 1 && bytes[digits_start] == b'.') {
        return None;
    }
    // Only treat `e` as an exponent when digits follow, so `2em` stays a unit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
                exp += 1;
            }
            end = exp;
        }
    }
    let number = s[..end].parse::<f64>().ok()?;
    Some((number, &s[end..]))
}

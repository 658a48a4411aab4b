// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small floating point helpers shared by the grid engine.
//!
//! Gridline positions are produced by repeated floating point arithmetic, so
//! most comparisons in the engine go through [`almost_equal`] and
//! [`is_multiple_of_eps`] instead of `==` and `%`.

use alloc::vec::Vec;
use core::fmt;

/// Default tolerance used by [`is_multiple_of`].
pub const MULTIPLE_EPSILON: f64 = f32::EPSILON as f64;

/// Upper bound on the number of values [`range_seq`] will produce.
pub const MAX_RANGE_LEN: usize = 1 << 20;

/// Restrict `value` to the interval spanned by `a` and `b`.
///
/// The bounds may be given in either order.
///
/// ```
/// use graticule_units::num::clamp;
///
/// assert_eq!(clamp(5.0, 10.0, 0.0), 5.0);
/// assert_eq!(clamp(-1.0, 10.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn clamp(value: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Epsilon equality with machine-epsilon tolerances.
#[must_use]
pub fn almost_equal(a: f64, b: f64) -> bool {
    almost_equal_with(a, b, f64::EPSILON, f64::EPSILON)
}

/// Epsilon equality with explicit absolute and relative tolerances.
///
/// Returns `true` when `|a - b| <= abs_tol`, when
/// `|a - b| <= rel_tol * min(|a|, |b|)`, or when `a == b` (which also covers
/// equal infinities).
#[must_use]
pub fn almost_equal_with(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    let d = (a - b).abs();
    if d <= abs_tol {
        return true;
    }
    if d <= rel_tol * a.abs().min(b.abs()) {
        return true;
    }
    a == b
}

/// Returns `true` if `a` is an integer multiple of `b`, within [`MULTIPLE_EPSILON`].
#[must_use]
pub fn is_multiple_of(a: f64, b: f64) -> bool {
    is_multiple_of_eps(a, b, MULTIPLE_EPSILON)
}

/// Returns `true` if `a` is an integer multiple of `b`, within `eps`.
///
/// The remainder is compared against both `0` and `|b|` so that values that
/// land just below a multiple (remainder close to the modulus) still count.
/// A zero `b` only has `0` as a multiple.
#[must_use]
pub fn is_multiple_of_eps(a: f64, b: f64, eps: f64) -> bool {
    if b == 0.0 {
        return almost_equal_with(a, 0.0, eps, 0.0);
    }
    let rem = a % b;
    if rem == 0.0 {
        return true;
    }
    almost_equal_with(0.0, rem, eps, 0.0) || almost_equal_with(b.abs(), rem.abs(), eps, 0.0)
}

/// Base-10 logarithm.
#[must_use]
pub fn log10(x: f64) -> f64 {
    libm::log10(x)
}

/// Error returned by [`range_seq`] for arguments that cannot describe a sequence.
#[derive(Clone, Copy, PartialEq)]
pub enum RangeError {
    /// One of the arguments was NaN or infinite.
    NonFinite {
        /// Name of the offending argument.
        arg: &'static str,
        /// The value that was passed.
        value: f64,
    },
    /// The step was zero.
    ZeroStep,
    /// The step points away from `stop`, so the sequence would never end.
    WrongDirection {
        /// The step that was passed.
        step: f64,
    },
    /// The sequence would exceed [`MAX_RANGE_LEN`] values.
    TooLong {
        /// The number of values that would have been produced.
        len: f64,
    },
}

impl fmt::Debug for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { arg, value } => {
                write!(f, "RangeError::NonFinite {{ arg: {arg}, value: {value} }}")
            }
            Self::ZeroStep => f.write_str("RangeError::ZeroStep"),
            Self::WrongDirection { step } => {
                write!(f, "RangeError::WrongDirection {{ step: {step} }}")
            }
            Self::TooLong { len } => write!(f, "RangeError::TooLong {{ len: {len} }}"),
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { arg, value } => {
                write!(f, "range argument `{arg}` must be finite, got {value}")
            }
            Self::ZeroStep => f.write_str("range step must not be zero"),
            Self::WrongDirection { step } => {
                write!(f, "range step {step} moves away from the stop value")
            }
            Self::TooLong { len } => write!(
                f,
                "range would produce {len} values, more than the limit of {MAX_RANGE_LEN}"
            ),
        }
    }
}

impl core::error::Error for RangeError {}

/// Arithmetic sequence from `start` towards `stop` (exclusive).
///
/// When `step` is `None` it defaults to `1` for ascending and `-1` for
/// descending sequences. Values are computed as `start + i * step` so that
/// long sequences do not accumulate rounding error.
///
/// ```
/// use graticule_units::num::range_seq;
///
/// assert_eq!(range_seq(0.0, 3.0, None).unwrap(), [0.0, 1.0, 2.0]);
/// assert_eq!(range_seq(1.0, -1.0, None).unwrap(), [1.0, 0.0]);
/// assert_eq!(range_seq(0.0, 1.0, Some(0.25)).unwrap().len(), 4);
/// assert!(range_seq(0.0, f64::NAN, None).is_err());
/// ```
pub fn range_seq(start: f64, stop: f64, step: Option<f64>) -> Result<Vec<f64>, RangeError> {
    check_finite("start", start)?;
    check_finite("stop", stop)?;
    let increasing = start < stop;
    let step = match step {
        Some(step) => {
            check_finite("step", step)?;
            step
        }
        None if increasing => 1.0,
        None => -1.0,
    };
    if step == 0.0 {
        return Err(RangeError::ZeroStep);
    }
    if start == stop {
        return Ok(Vec::new());
    }
    if increasing != (step > 0.0) {
        return Err(RangeError::WrongDirection { step });
    }

    let len = libm::ceil((stop - start) / step);
    #[allow(clippy::cast_precision_loss, reason = "the limit is far below 2^52")]
    let limit = MAX_RANGE_LEN as f64;
    if len.is_nan() || len > limit {
        return Err(RangeError::TooLong { len });
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "len is a non-negative integer bounded by MAX_RANGE_LEN"
    )]
    #[allow(clippy::cast_sign_loss, reason = "len is non-negative")]
    let len = len as usize;

    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        #[allow(clippy::cast_precision_loss, reason = "i is bounded by MAX_RANGE_LEN")]
        let v = start + i as f64 * step;
        // Guard against the last value landing on `stop` through rounding.
        if (increasing && v >= stop) || (!increasing && v <= stop) {
            break;
        }
        out.push(v);
    }
    Ok(out)
}

fn check_finite(arg: &'static str, value: f64) -> Result<(), RangeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RangeError::NonFinite { arg, value })
    }
}

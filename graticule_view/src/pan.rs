// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture tracking.
//!
//! ## Usage
//!
//! 1) Call [`PanState::start`] when the pan button goes down.
//! 2) Feed each pointer move to [`PanState::update`] and pan the view by the
//!    returned delta.
//! 3) Call [`PanState::end`] on release, or when the pointer leaves the
//!    canvas mid-gesture.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use graticule_view::PanState;
//!
//! let mut pan = PanState::default();
//! pan.start(Point::new(10.0, 20.0));
//! assert_eq!(pan.update(Point::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
//! assert_eq!(pan.end(), Some(Vec2::new(5.0, -2.0)));
//! assert!(!pan.is_panning());
//! ```

use kurbo::{Point, Vec2};

/// Pointer positions of an active pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanState {
    start: Option<Point>,
    last: Option<Point>,
}

impl PanState {
    /// Begins a gesture at `pos`, replacing any gesture in progress.
    pub fn start(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
    }

    /// Movement since the previous position, or `None` when not panning.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Offset of the latest position from the start of the gesture.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.last? - self.start?)
    }

    /// Ends the gesture, returning its total offset if one was active.
    pub fn end(&mut self) -> Option<Vec2> {
        let total = self.total_offset();
        self.start = None;
        self.last = None;
        total
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_ignores_moves() {
        let mut pan = PanState::default();
        assert_eq!(pan.update(Point::new(15.0, 25.0)), None);
        assert_eq!(pan.total_offset(), None);
        assert_eq!(pan.end(), None);
        assert!(!pan.is_panning());
    }

    #[test]
    fn deltas_are_incremental() {
        let mut pan = PanState::default();
        pan.start(Point::ORIGIN);
        assert_eq!(pan.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(pan.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(pan.update(Point::new(-2.0, 7.0)), Some(Vec2::new(-10.0, 0.0)));
        assert_eq!(pan.total_offset(), Some(Vec2::new(-2.0, 7.0)));
    }

    #[test]
    fn restart_discards_previous_gesture() {
        let mut pan = PanState::default();
        pan.start(Point::ORIGIN);
        pan.update(Point::new(10.0, 10.0));
        pan.start(Point::new(50.0, 60.0));
        assert_eq!(pan.total_offset(), Some(Vec2::ZERO));
        assert_eq!(pan.update(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }
}

// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-finger drag recognizer: translation of one touch from where it began.
//!
//! ## Usage
//!
//! 1) Start tracking a finger with [`DragGesture::begin`].
//! 2) On each touch event, call [`Gesture::update`] with the live touches.
//!    Nothing is reported until the finger has travelled
//!    [`DragGesture::min_distance`], which keeps taps from registering as drags.
//! 3) When the finger lifts, [`Gesture::end`] returns the final translation
//!    (if the drag was recognized) and resets state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use pinwheel_gesture::{DragGesture, Gesture};
//! use pinwheel_gesture::touch::{TouchEvent, TouchId, Touches};
//!
//! let mut drag = DragGesture::default();
//! let mut touches = Touches::new();
//!
//! touches.apply(&TouchEvent::began(1, (10.0, 20.0)));
//! drag.begin(TouchId(1), (10.0, 20.0).into());
//! assert!(drag.is_tracking());
//!
//! // A 4 unit wobble is still a tap.
//! touches.apply(&TouchEvent::moved(1, (14.0, 20.0)));
//! assert_eq!(drag.update(&touches), None);
//!
//! touches.apply(&TouchEvent::moved(1, (40.0, 60.0)));
//! assert_eq!(drag.update(&touches), Some(Vec2::new(30.0, 40.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::Gesture;
use crate::touch::{TouchId, Touches};

/// Tracks one finger and reports its translation once it moves far enough.
#[derive(Clone, Debug)]
pub struct DragGesture {
    min_distance: f64,
    /// Finger being followed.
    touch: Option<TouchId>,
    /// Position where the drag began.
    start_pos: Option<Point>,
    /// Last recorded position of the followed finger.
    last_pos: Option<Point>,
    recognized: bool,
}

impl DragGesture {
    /// Default recognition distance, in view units.
    pub const DEFAULT_MIN_DISTANCE: f64 = 10.0;

    /// Creates a recognizer that stays silent until the finger travels `min_distance`.
    #[must_use]
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance: min_distance.abs(),
            touch: None,
            start_pos: None,
            last_pos: None,
            recognized: false,
        }
    }

    /// Recognition distance.
    #[must_use]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Start following `touch` from `pos`, discarding any previous drag.
    pub fn begin(&mut self, touch: TouchId, pos: Point) {
        self.touch = Some(touch);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.recognized = false;
    }

    /// Finger being followed, if any.
    #[must_use]
    pub fn touch(&self) -> Option<TouchId> {
        self.touch
    }

    /// Offset from the start position, including movement below the threshold.
    #[must_use]
    pub fn raw_translation(&self) -> Option<Vec2> {
        match (self.start_pos, self.last_pos) {
            (Some(start), Some(last)) => Some(last - start),
            _ => None,
        }
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_DISTANCE)
    }
}

impl Gesture for DragGesture {
    type Value = Vec2;

    fn update(&mut self, touches: &Touches) -> Option<Vec2> {
        let Some(pos) = self.touch.and_then(|id| touches.get(id)) else {
            return self.value();
        };
        self.last_pos = Some(pos);

        if !self.recognized
            && self
                .raw_translation()
                .is_some_and(|t| t.length() >= self.min_distance)
        {
            self.recognized = true;
            log::trace!("drag recognized for {:?}", self.touch);
        }
        self.value()
    }

    fn value(&self) -> Option<Vec2> {
        if self.recognized {
            self.raw_translation()
        } else {
            None
        }
    }

    fn is_tracking(&self) -> bool {
        self.touch.is_some()
    }

    fn end(&mut self) -> Option<Vec2> {
        let value = self.value();
        self.cancel();
        value
    }

    fn cancel(&mut self) {
        self.touch = None;
        self.start_pos = None;
        self.last_pos = None;
        self.recognized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::touch::TouchEvent;

    fn tracking(start: (f64, f64)) -> (DragGesture, Touches) {
        let mut drag = DragGesture::default();
        let mut touches = Touches::new();
        touches.apply(&TouchEvent::began(1, start));
        drag.begin(TouchId(1), start.into());
        (drag, touches)
    }

    #[test]
    fn new_drag_is_not_tracking() {
        let drag = DragGesture::default();
        assert!(!drag.is_tracking());
        assert_eq!(drag.raw_translation(), None);
        assert_eq!(drag.value(), None);
    }

    #[test]
    fn begin_sets_tracking_state() {
        let (drag, _) = tracking((10.0, 20.0));

        assert_eq!(drag.touch(), Some(TouchId(1)));
        assert_eq!(drag.raw_translation(), Some(Vec2::ZERO));
        assert_eq!(drag.value(), None);
    }

    #[test]
    fn update_without_begin_reports_nothing() {
        let mut drag = DragGesture::default();
        let mut touches = Touches::new();
        touches.apply(&TouchEvent::began(1, (0.0, 0.0)));

        assert_eq!(drag.update(&touches), None);
        assert!(!drag.is_tracking());
    }

    #[test]
    fn movement_below_threshold_is_silent() {
        let (mut drag, mut touches) = tracking((0.0, 0.0));

        touches.apply(&TouchEvent::moved(1, (6.0, 8.0)));
        // Exactly at the threshold counts.
        assert_eq!(drag.update(&touches), Some(Vec2::new(6.0, 8.0)));

        let (mut drag, mut touches) = tracking((0.0, 0.0));
        touches.apply(&TouchEvent::moved(1, (6.0, 7.9)));
        assert_eq!(drag.update(&touches), None);
        assert_eq!(drag.raw_translation(), Some(Vec2::new(6.0, 7.9)));
    }

    #[test]
    fn translation_is_measured_from_start_after_recognition() {
        let (mut drag, mut touches) = tracking((100.0, 100.0));

        touches.apply(&TouchEvent::moved(1, (80.0, 70.0)));
        assert_eq!(drag.update(&touches), Some(Vec2::new(-20.0, -30.0)));

        // Returning close to the start keeps reporting.
        touches.apply(&TouchEvent::moved(1, (101.0, 100.0)));
        assert_eq!(drag.update(&touches), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn other_fingers_do_not_move_the_drag() {
        let (mut drag, mut touches) = tracking((0.0, 0.0));
        touches.apply(&TouchEvent::began(2, (50.0, 50.0)));
        touches.apply(&TouchEvent::moved(2, (500.0, 500.0)));

        assert_eq!(drag.update(&touches), None);
        assert_eq!(drag.raw_translation(), Some(Vec2::ZERO));
    }

    #[test]
    fn lifted_finger_keeps_last_value() {
        let (mut drag, mut touches) = tracking((0.0, 0.0));
        touches.apply(&TouchEvent::moved(1, (30.0, 0.0)));
        drag.update(&touches);

        touches.apply(&TouchEvent::ended(1, (30.0, 0.0)));
        assert_eq!(drag.update(&touches), Some(Vec2::new(30.0, 0.0)));
    }

    #[test]
    fn end_resets_drag_state() {
        let (mut drag, mut touches) = tracking((10.0, 20.0));
        touches.apply(&TouchEvent::moved(1, (40.0, 20.0)));
        drag.update(&touches);

        assert_eq!(drag.end(), Some(Vec2::new(30.0, 0.0)));
        assert!(!drag.is_tracking());
        assert_eq!(drag.raw_translation(), None);
    }

    #[test]
    fn end_of_unrecognized_drag_reports_nothing() {
        let (mut drag, mut touches) = tracking((10.0, 20.0));
        touches.apply(&TouchEvent::moved(1, (12.0, 20.0)));
        drag.update(&touches);

        assert_eq!(drag.end(), None);
        assert!(!drag.is_tracking());
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut drag = DragGesture::default();
        assert_eq!(drag.end(), None);
        assert!(!drag.is_tracking());
    }

    #[test]
    fn begin_overwrites_previous_drag() {
        let (mut drag, mut touches) = tracking((0.0, 0.0));
        touches.apply(&TouchEvent::moved(1, (30.0, 30.0)));
        drag.update(&touches);

        touches.apply(&TouchEvent::began(2, (50.0, 60.0)));
        drag.begin(TouchId(2), Point::new(50.0, 60.0));
        assert_eq!(drag.value(), None);

        touches.apply(&TouchEvent::moved(2, (65.0, 60.0)));
        assert_eq!(drag.update(&touches), Some(Vec2::new(15.0, 0.0)));
    }

    #[test]
    fn zero_threshold_recognizes_immediately() {
        let mut drag = DragGesture::new(0.0);
        let mut touches = Touches::new();
        touches.apply(&TouchEvent::began(1, (5.0, 5.0)));
        drag.begin(TouchId(1), Point::new(5.0, 5.0));

        assert_eq!(drag.update(&touches), Some(Vec2::ZERO));
    }
}

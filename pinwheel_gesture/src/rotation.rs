// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger rotation recognizer.
//!
//! The recognizer follows the vector between the two oldest touches and
//! accumulates the change in its direction. Per-sample changes are wrapped
//! into a half turn, so twisting through the ±180° seam does not jump.
//!
//! Small twists are noise: nothing is reported until the accumulated angle
//! reaches [`RotationGesture::min_angle_delta`]. Once reported, the gesture
//! keeps reporting until it ends.
//!
//! ```
//! use pinwheel_gesture::{Gesture, RotationGesture};
//! use pinwheel_gesture::touch::{TouchEvent, Touches};
//!
//! let mut rotation = RotationGesture::default();
//! let mut touches = Touches::new();
//! touches.apply(&TouchEvent::began(1, (0.0, 0.0)));
//! touches.apply(&TouchEvent::began(2, (100.0, 0.0)));
//! assert_eq!(rotation.update(&touches), None);
//!
//! // Swing the second finger a quarter turn around the first.
//! touches.apply(&TouchEvent::moved(2, (0.0, 100.0)));
//! let angle = rotation.update(&touches).unwrap();
//! assert!((angle.degrees() - 90.0).abs() < 1e-9);
//! ```

use core::f64::consts::PI;

use kurbo::Vec2;

use crate::touch::{TouchId, Touches};
use crate::{Angle, Gesture};

/// Recognizes a two-finger twist and reports the angle turned since it began.
#[derive(Clone, Debug)]
pub struct RotationGesture {
    min_angle_delta: Angle,
    pair: Option<(TouchId, TouchId)>,
    last: Vec2,
    angle: Angle,
    recognized: bool,
}

impl RotationGesture {
    /// Default recognition threshold: 5°.
    pub const DEFAULT_MIN_ANGLE_DELTA: Angle = Angle::from_radians(PI / 36.0);

    /// Creates a recognizer that stays silent until the twist reaches `min_angle_delta`.
    ///
    /// The sign of `min_angle_delta` is ignored.
    #[must_use]
    pub fn new(min_angle_delta: Angle) -> Self {
        Self {
            min_angle_delta: min_angle_delta.abs(),
            pair: None,
            last: Vec2::ZERO,
            angle: Angle::ZERO,
            recognized: false,
        }
    }

    /// Recognition threshold.
    #[must_use]
    pub fn min_angle_delta(&self) -> Angle {
        self.min_angle_delta
    }

    /// Angle turned so far, including twists below the threshold.
    #[must_use]
    pub fn raw_angle(&self) -> Angle {
        self.angle
    }
}

impl Default for RotationGesture {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_ANGLE_DELTA)
    }
}

impl Gesture for RotationGesture {
    type Value = Angle;

    fn update(&mut self, touches: &Touches) -> Option<Angle> {
        let Some((a, b)) = touches.pair() else {
            return self.value();
        };
        let span = b.position - a.position;
        if span == Vec2::ZERO {
            // Direction is undefined while the fingers coincide.
            return self.value();
        }

        let ids = (a.id, b.id);
        if self.pair != Some(ids) {
            // New pair: keep what was turned so far and measure from here.
            self.pair = Some(ids);
            self.last = span;
            return self.value();
        }

        self.angle += Angle::wrapped_delta(span.atan2() - self.last.atan2());
        self.last = span;

        if !self.recognized && self.angle.abs() >= self.min_angle_delta {
            self.recognized = true;
            log::trace!("rotation recognized at {:.2}°", self.angle.degrees());
        }
        self.value()
    }

    fn value(&self) -> Option<Angle> {
        self.recognized.then_some(self.angle)
    }

    fn is_tracking(&self) -> bool {
        self.pair.is_some()
    }

    fn end(&mut self) -> Option<Angle> {
        let value = self.value();
        self.cancel();
        value
    }

    fn cancel(&mut self) {
        self.pair = None;
        self.last = Vec2::ZERO;
        self.angle = Angle::ZERO;
        self.recognized = false;
    }
}

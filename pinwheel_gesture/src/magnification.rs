// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch recognizer.
//!
//! The reported scale is the current distance between the two oldest touches
//! divided by their distance when the pinch began. When a finger in the pair
//! is replaced, the baseline is adjusted so the scale carries over unchanged.

use crate::Gesture;
use crate::touch::{TouchId, Touches};

/// Recognizes a pinch and reports the scale factor since it began.
#[derive(Clone, Debug)]
pub struct MagnificationGesture {
    min_scale_delta: f64,
    pair: Option<(TouchId, TouchId)>,
    start_distance: f64,
    scale: f64,
    recognized: bool,
}

impl MagnificationGesture {
    /// Default recognition threshold: a 1% change in finger distance.
    pub const DEFAULT_MIN_SCALE_DELTA: f64 = 0.01;

    /// Creates a recognizer that stays silent until `|scale - 1|` reaches `min_scale_delta`.
    #[must_use]
    pub fn new(min_scale_delta: f64) -> Self {
        Self {
            min_scale_delta: min_scale_delta.abs(),
            pair: None,
            start_distance: 0.0,
            scale: 1.0,
            recognized: false,
        }
    }

    /// Recognition threshold.
    #[must_use]
    pub fn min_scale_delta(&self) -> f64 {
        self.min_scale_delta
    }

    /// Scale so far, including changes below the threshold.
    #[must_use]
    pub fn raw_scale(&self) -> f64 {
        self.scale
    }
}

impl Default for MagnificationGesture {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_SCALE_DELTA)
    }
}

impl Gesture for MagnificationGesture {
    type Value = f64;

    fn update(&mut self, touches: &Touches) -> Option<f64> {
        let Some((a, b)) = touches.pair() else {
            return self.value();
        };
        let distance = (b.position - a.position).length();

        let ids = (a.id, b.id);
        if self.pair != Some(ids) {
            self.pair = Some(ids);
            self.start_distance = distance / self.scale;
            return self.value();
        }
        if self.start_distance <= f64::EPSILON {
            // Fingers started on top of each other; measure from the first
            // sample where they are apart.
            self.start_distance = distance / self.scale;
            return self.value();
        }
        if distance <= f64::EPSILON {
            // Keep the scale strictly positive so a later rebaseline can divide by it.
            return self.value();
        }

        self.scale = distance / self.start_distance;
        if !self.recognized && (self.scale - 1.0).abs() >= self.min_scale_delta {
            self.recognized = true;
            log::trace!("magnification recognized at {:.3}x", self.scale);
        }
        self.value()
    }

    fn value(&self) -> Option<f64> {
        self.recognized.then_some(self.scale)
    }

    fn is_tracking(&self) -> bool {
        self.pair.is_some()
    }

    fn end(&mut self) -> Option<f64> {
        let value = self.value();
        self.cancel();
        value
    }

    fn cancel(&mut self) {
        self.pair = None;
        self.start_distance = 0.0;
        self.scale = 1.0;
        self.recognized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::touch::TouchEvent;

    fn two_fingers(b: (f64, f64)) -> Touches {
        let mut touches = Touches::new();
        touches.apply(&TouchEvent::began(1, (0.0, 0.0)));
        touches.apply(&TouchEvent::began(2, b));
        touches
    }

    #[test]
    fn spreading_fingers_scales_up() {
        let mut pinch = MagnificationGesture::default();
        let mut touches = two_fingers((100.0, 0.0));
        assert_eq!(pinch.update(&touches), None);

        touches.apply(&TouchEvent::moved(2, (200.0, 0.0)));
        assert_eq!(pinch.update(&touches), Some(2.0));

        touches.apply(&TouchEvent::moved(2, (50.0, 0.0)));
        assert_eq!(pinch.update(&touches), Some(0.5));
    }

    #[test]
    fn tiny_changes_stay_below_threshold() {
        let mut pinch = MagnificationGesture::default();
        let mut touches = two_fingers((1000.0, 0.0));
        pinch.update(&touches);

        touches.apply(&TouchEvent::moved(2, (1005.0, 0.0)));
        assert_eq!(pinch.update(&touches), None);
        assert!((pinch.raw_scale() - 1.005).abs() < 1e-12);
    }

    #[test]
    fn coincident_start_waits_for_separation() {
        let mut pinch = MagnificationGesture::new(0.0);
        let mut touches = two_fingers((0.0, 0.0));
        assert_eq!(pinch.update(&touches), None);

        touches.apply(&TouchEvent::moved(2, (10.0, 0.0)));
        // First separated sample becomes the baseline.
        assert_eq!(pinch.update(&touches), None);

        touches.apply(&TouchEvent::moved(2, (30.0, 0.0)));
        assert_eq!(pinch.update(&touches), Some(3.0));
    }

    #[test]
    fn changing_the_pair_preserves_scale() {
        let mut pinch = MagnificationGesture::default();
        let mut touches = two_fingers((100.0, 0.0));
        touches.apply(&TouchEvent::began(3, (0.0, 300.0)));
        pinch.update(&touches);

        touches.apply(&TouchEvent::moved(2, (200.0, 0.0)));
        assert_eq!(pinch.update(&touches), Some(2.0));

        touches.apply(&TouchEvent::ended(2, (200.0, 0.0)));
        assert_eq!(pinch.update(&touches), Some(2.0));

        // Finger 3 now pairs with finger 1 at distance 300; doubling it
        // doubles the carried scale.
        touches.apply(&TouchEvent::moved(3, (0.0, 600.0)));
        assert_eq!(pinch.update(&touches), Some(4.0));
    }

    #[test]
    fn end_reports_and_resets() {
        let mut pinch = MagnificationGesture::default();
        let mut touches = two_fingers((100.0, 0.0));
        pinch.update(&touches);
        touches.apply(&TouchEvent::moved(2, (150.0, 0.0)));
        pinch.update(&touches);

        assert_eq!(pinch.end(), Some(1.5));
        assert!(!pinch.is_tracking());
        assert_eq!(pinch.raw_scale(), 1.0);
        assert_eq!(pinch.end(), None);
    }
}

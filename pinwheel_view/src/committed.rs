// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use pinwheel_gesture::{Angle, SimultaneousValue, TransientGestureState};

use crate::DisplayTransform;

/// Transform accumulated from completed gestures.
///
/// Each component changes only when its gesture ends and persists across
/// gesture sessions. There is no clamping: scale may grow without bound and
/// angles keep accumulating past a full turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommittedTransform {
    angle: Angle,
    scale: f64,
    translation: Vec2,
}

impl CommittedTransform {
    /// No rotation, unit scale, no translation.
    pub const IDENTITY: Self = Self {
        angle: Angle::ZERO,
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Cumulative rotation.
    #[must_use]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Cumulative scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Cumulative translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Folds in a finished rotation. `None` (never recognized) adds nothing.
    pub fn commit_rotation(&mut self, angle: Option<Angle>) {
        self.angle += angle.unwrap_or(Angle::ZERO);
        log::debug!("committed rotation: {:.2}°", self.angle.degrees());
    }

    /// Folds in a finished pinch. `None` (never recognized) multiplies by one.
    pub fn commit_magnification(&mut self, scale: Option<f64>) {
        self.scale *= scale.unwrap_or(1.0);
        log::debug!("committed scale: {:.3}x", self.scale);
    }

    /// Folds in a finished drag.
    pub fn commit_translation(&mut self, translation: Vec2) {
        self.translation += translation;
        log::debug!(
            "committed translation: ({:.1}, {:.1})",
            self.translation.x,
            self.translation.y
        );
    }

    /// Folds in a finished rotation/pinch pair.
    pub fn commit_simultaneous(&mut self, value: SimultaneousValue<Angle, f64>) {
        self.commit_rotation(value.first);
        self.commit_magnification(value.second);
    }

    /// Composes this committed state with an in-progress gesture.
    #[must_use]
    pub fn display(&self, transient: &TransientGestureState) -> DisplayTransform {
        DisplayTransform {
            scale: self.scale,
            angle: self.angle,
            offset: self.translation,
        }
        .layer(transient)
    }
}

impl Default for CommittedTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use pinwheel_gesture::{Angle, DragGesture, MagnificationGesture, RotationGesture};

use crate::Graphic;

/// How the drag and the rotate/pinch pair share transient state.
///
/// This enum is consulted by [`crate::SimultaneousView`] whenever it derives
/// the transient state or the display transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SlotPolicy {
    /// One transient slot for every recognizer.
    ///
    /// While a drag is reporting it occupies the slot, so an in-progress
    /// rotation or pinch is not shown until the drag ends or stops reporting.
    /// Nothing is lost: the hidden values are still committed when the pair
    /// ends.
    #[default]
    Shared,
    /// The pair and the drag each have a slot; the display composes both.
    Separate,
}

/// Recognizer thresholds and layout for a [`crate::SimultaneousView`].
///
/// ```
/// use pinwheel_gesture::Angle;
/// use pinwheel_view::{SlotPolicy, ViewConfig};
///
/// let config = ViewConfig::default()
///     .with_min_rotation(Angle::from_degrees(2.0))
///     .with_slot_policy(SlotPolicy::Separate);
/// assert_eq!(config.min_drag_distance, 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Twist needed before a rotation is reported.
    pub min_rotation: Angle,
    /// Change in `|scale - 1|` needed before a pinch is reported.
    pub min_scale_delta: f64,
    /// Travel needed before a drag is reported, in view units.
    pub min_drag_distance: f64,
    /// Frame of the graphic.
    pub frame: Size,
    /// Transient slot sharing.
    pub slot_policy: SlotPolicy,
}

impl ViewConfig {
    /// Sets [`Self::min_rotation`].
    #[must_use]
    pub fn with_min_rotation(mut self, min_rotation: Angle) -> Self {
        self.min_rotation = min_rotation;
        self
    }

    /// Sets [`Self::min_scale_delta`].
    #[must_use]
    pub fn with_min_scale_delta(mut self, min_scale_delta: f64) -> Self {
        self.min_scale_delta = min_scale_delta;
        self
    }

    /// Sets [`Self::min_drag_distance`].
    #[must_use]
    pub fn with_min_drag_distance(mut self, min_drag_distance: f64) -> Self {
        self.min_drag_distance = min_drag_distance;
        self
    }

    /// Sets [`Self::frame`].
    #[must_use]
    pub fn with_frame(mut self, frame: Size) -> Self {
        self.frame = frame;
        self
    }

    /// Sets [`Self::slot_policy`].
    #[must_use]
    pub fn with_slot_policy(mut self, slot_policy: SlotPolicy) -> Self {
        self.slot_policy = slot_policy;
        self
    }

    /// Zero thresholds: every recognizer reports from its first movement.
    #[must_use]
    pub fn immediate() -> Self {
        Self::default()
            .with_min_rotation(Angle::ZERO)
            .with_min_scale_delta(0.0)
            .with_min_drag_distance(0.0)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_rotation: RotationGesture::DEFAULT_MIN_ANGLE_DELTA,
            min_scale_delta: MagnificationGesture::DEFAULT_MIN_SCALE_DELTA,
            min_drag_distance: DragGesture::DEFAULT_MIN_DISTANCE,
            frame: Graphic::DEFAULT_FRAME,
            slot_policy: SlotPolicy::default(),
        }
    }
}

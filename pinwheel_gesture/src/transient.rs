// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::{Angle, SimultaneousValue};

/// In-progress gesture state, recomputed on every touch event.
///
/// Exactly one variant is active. Accessors fall back to identity values, so
/// callers can compose any variant with committed state without matching.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TransientGestureState {
    /// No recognizer is reporting.
    #[default]
    Inactive,
    /// Only the rotation recognizer is reporting.
    Rotating {
        /// Angle turned since the gesture began.
        angle: Angle,
    },
    /// Only the pinch recognizer is reporting.
    Zooming {
        /// Scale factor since the gesture began.
        scale: f64,
    },
    /// Rotation and pinch are both reporting.
    Both {
        /// Angle turned since the gesture began.
        angle: Angle,
        /// Scale factor since the gesture began.
        scale: f64,
    },
    /// The drag recognizer is reporting.
    Dragging {
        /// Offset since the drag began.
        translation: Vec2,
    },
}

impl TransientGestureState {
    /// Reduces a rotation/pinch sample to a single state.
    ///
    /// | rotation | pinch | state      |
    /// |----------|-------|------------|
    /// | yes      | yes   | `Both`     |
    /// | yes      | no    | `Rotating` |
    /// | no       | yes   | `Zooming`  |
    /// | no       | no    | `Inactive` |
    #[must_use]
    pub fn from_simultaneous(value: SimultaneousValue<Angle, f64>) -> Self {
        match (value.first, value.second) {
            (Some(angle), Some(scale)) => Self::Both { angle, scale },
            (Some(angle), None) => Self::Rotating { angle },
            (None, Some(scale)) => Self::Zooming { scale },
            (None, None) => Self::Inactive,
        }
    }

    /// Carried angle, or zero.
    #[must_use]
    pub fn rotation_angle(&self) -> Angle {
        match *self {
            Self::Rotating { angle } | Self::Both { angle, .. } => angle,
            _ => Angle::ZERO,
        }
    }

    /// Carried scale, or `1.0`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        match *self {
            Self::Zooming { scale } | Self::Both { scale, .. } => scale,
            _ => 1.0,
        }
    }

    /// Carried translation, or zero.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        match *self {
            Self::Dragging { translation } => translation,
            _ => Vec2::ZERO,
        }
    }

    /// Returns `true` for every variant except [`Self::Inactive`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

impl From<SimultaneousValue<Angle, f64>> for TransientGestureState {
    fn from(value: SimultaneousValue<Angle, f64>) -> Self {
        Self::from_simultaneous(value)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::TransientGestureState as State;
    use crate::{Angle, SimultaneousValue};

    const TURN: Angle = Angle::from_radians(0.5);

    #[test]
    fn presence_table() {
        assert_eq!(
            State::from_simultaneous(SimultaneousValue::new(Some(TURN), Some(2.0))),
            State::Both {
                angle: TURN,
                scale: 2.0
            }
        );
        assert_eq!(
            State::from_simultaneous(SimultaneousValue::new(Some(TURN), None)),
            State::Rotating { angle: TURN }
        );
        assert_eq!(
            State::from_simultaneous(SimultaneousValue::new(None, Some(2.0))),
            State::Zooming { scale: 2.0 }
        );
        assert_eq!(
            State::from(SimultaneousValue::<Angle, f64>::default()),
            State::Inactive
        );
    }

    #[test]
    fn scale_defaults_to_one_without_pinch() {
        assert_eq!(State::Inactive.scale(), 1.0);
        assert_eq!(State::Rotating { angle: TURN }.scale(), 1.0);
        assert_eq!(
            State::Dragging {
                translation: Vec2::new(3.0, 4.0)
            }
            .scale(),
            1.0
        );
        assert_eq!(State::Zooming { scale: 0.25 }.scale(), 0.25);
        assert_eq!(
            State::Both {
                angle: TURN,
                scale: 3.0
            }
            .scale(),
            3.0
        );
    }

    #[test]
    fn rotation_defaults_to_zero_without_twist() {
        assert_eq!(State::Inactive.rotation_angle(), Angle::ZERO);
        assert_eq!(State::Zooming { scale: 2.0 }.rotation_angle(), Angle::ZERO);
        assert_eq!(State::Rotating { angle: TURN }.rotation_angle(), TURN);
        assert_eq!(
            State::Both {
                angle: TURN,
                scale: 2.0
            }
            .rotation_angle(),
            TURN
        );
    }

    #[test]
    fn translation_only_while_dragging() {
        let translation = Vec2::new(-5.0, 12.0);
        assert_eq!(State::Dragging { translation }.translation(), translation);
        assert_eq!(
            State::Both {
                angle: TURN,
                scale: 2.0
            }
            .translation(),
            Vec2::ZERO
        );
        assert!(!State::Inactive.is_active());
        assert!(State::Dragging { translation }.is_active());
    }
}

// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};
use pinwheel_gesture::{Angle, TransientGestureState};

/// The transform used to draw the graphic: committed state with any
/// in-progress gesture layered on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation.
    pub angle: Angle,
    /// Translation in view units.
    pub offset: Vec2,
}

impl DisplayTransform {
    /// No rotation, unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        angle: Angle::ZERO,
        offset: Vec2::ZERO,
    };

    /// Layers an in-progress gesture on top: scales multiply, angles and
    /// offsets add.
    #[must_use]
    pub fn layer(self, transient: &TransientGestureState) -> Self {
        Self {
            scale: self.scale * transient.scale(),
            angle: self.angle + transient.rotation_angle(),
            offset: self.offset + transient.translation(),
        }
    }

    /// Builds the affine map for a graphic occupying `frame`.
    ///
    /// Scale is applied first, then rotation, both about the frame center;
    /// translation by [`Self::offset`] comes last.
    #[must_use]
    pub fn to_affine(&self, frame: Size) -> Affine {
        let center = frame.to_vec2() * 0.5;
        Affine::translate(self.offset)
            * Affine::translate(center)
            * Affine::rotate(self.angle.radians())
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

impl Default for DisplayTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

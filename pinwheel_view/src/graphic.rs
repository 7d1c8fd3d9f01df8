// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::FRAC_PI_2;

use kurbo::{Affine, BezPath, Point, Rect, RoundedRect, Shape, Size};

use crate::DisplayTransform;

/// The fixed, static drawing manipulated by the gestures.
///
/// The drawing is a four-bladed pinwheel inside a rounded card, laid out in
/// a frame of fixed size. Geometry is in frame-local coordinates with the
/// origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Graphic {
    frame: Size,
}

impl Graphic {
    /// Default frame size.
    pub const DEFAULT_FRAME: Size = Size::new(350.0, 650.0);

    /// Creates a graphic laid out in `frame`.
    #[must_use]
    pub fn new(frame: Size) -> Self {
        Self { frame }
    }

    /// Size of the frame the graphic is laid out in.
    #[must_use]
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Outline of the drawing.
    #[must_use]
    pub fn shape(&self) -> BezPath {
        let bounds = self.frame.to_rect();
        let radius = 0.08 * bounds.width().min(bounds.height());
        let mut path = RoundedRect::from_rect(bounds, radius).to_path(0.1);

        let center = bounds.center();
        let reach = 0.4 * bounds.width().min(bounds.height());
        let mut blade = BezPath::new();
        blade.move_to(center);
        blade.line_to(Point::new(center.x, center.y - reach));
        blade.line_to(Point::new(center.x + 0.5 * reach, center.y - 0.5 * reach));
        blade.close_path();

        for quarter in 0..4_u8 {
            let turn = Affine::translate(center.to_vec2())
                * Affine::rotate(f64::from(quarter) * FRAC_PI_2)
                * Affine::translate(-center.to_vec2());
            path.extend((turn * blade.clone()).elements().iter().copied());
        }
        path
    }

    /// Axis-aligned bounds of the frame after applying `display`.
    #[must_use]
    pub fn transformed_bounds(&self, display: &DisplayTransform) -> Rect {
        display
            .to_affine(self.frame)
            .transform_rect_bbox(self.frame.to_rect())
    }
}

impl Default for Graphic {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FRAME)
    }
}

// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A planar angle, stored in radians.
///
/// Angles are an unbounded measure: adding a quarter turn to three quarter
/// turns yields a full turn, not zero. Callers that need a normalized value
/// can reduce it themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Creates an angle from a value in radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates an angle from a value in degrees.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Returns the angle in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Returns the absolute size of the angle.
    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            radians: self.radians.abs(),
        }
    }

    /// Reduces a difference of two `atan2` results into `(-π, π]`.
    ///
    /// Both inputs lie in `(-π, π]`, so their difference is within one turn
    /// of the target range.
    pub(crate) fn wrapped_delta(radians: f64) -> Self {
        let radians = if radians > PI {
            radians - 2.0 * PI
        } else if radians <= -PI {
            radians + 2.0 * PI
        } else {
            radians
        };
        Self { radians }
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.radians += rhs.radians;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.radians -= rhs.radians;
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}
